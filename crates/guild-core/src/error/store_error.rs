//! Store errors - failures crossing the repository boundary

use thiserror::Error;

/// Errors surfaced by a [`crate::traits::MemberRepository`] implementation.
///
/// Handlers treat these as degraded conditions: a read failure becomes an
/// absent record upstream, a write failure becomes a graceful reply. They
/// are never shown to the requesting user verbatim.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing store could not be reached or the command failed
    #[error("Storage backend error: {0}")]
    Backend(String),

    /// A record failed to serialize on the way in
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl StoreError {
    /// Create a backend error from any displayable source
    pub fn backend(err: impl std::fmt::Display) -> Self {
        Self::Backend(err.to_string())
    }
}
