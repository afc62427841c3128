//! Integration test utilities for the guild bot
//!
//! Drives the real axum router in-process with signed requests against the
//! in-memory member store; no Redis or network required.

pub mod fixtures;

pub use fixtures::*;
pub use helpers::*;
