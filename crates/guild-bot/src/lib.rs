//! # guild-bot
//!
//! Discord interactions endpoint built with Axum.
//!
//! Inbound slash-command webhooks are signature-verified, dispatched to one
//! of four command handlers, and answered within the request cycle. A
//! background task posts the weekly boss reminder to an outgoing webhook.

pub mod commands;
pub mod interactions;
pub mod scheduled;
pub mod server;
pub mod verify;
pub mod webhook;
