//! # guild-store
//!
//! Storage layer for member records.
//!
//! - **Connection Pool**: managed Redis connection pool with deadpool
//! - **`RedisMemberRepository`**: production store, one JSON value per
//!   member under a fixed key prefix, SCAN-based enumeration
//! - **`MemoryMemberRepository`**: in-process store for tests and local
//!   development

pub mod pool;
pub mod repositories;

// Re-export pool types
pub use pool::{RedisPool, RedisPoolConfig, RedisPoolError, RedisResult};

// Re-export repositories
pub use repositories::{MemoryMemberRepository, RedisMemberRepository, MEMBER_KEY_PREFIX};
