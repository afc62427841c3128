//! Application error types
//!
//! Unified error handling for startup and server-boundary failures. Errors
//! that occur while handling a command never reach this type - the
//! dispatcher degrades those to a generic reply instead.

use guild_core::StoreError;

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    // Storage errors
    #[error(transparent)]
    Store(#[from] StoreError),

    // Signature verification setup (bad public key material)
    #[error("Invalid verification key: {0}")]
    VerificationKey(String),
}

impl AppError {
    /// Create a configuration error
    pub fn config(msg: impl std::fmt::Display) -> Self {
        Self::Config(msg.to_string())
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
