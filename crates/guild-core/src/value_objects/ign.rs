//! In-game name (IGN) value object
//!
//! An IGN is 2-12 ASCII letters and digits. Validation happens once at
//! construction so every `Ign` in the system is known-good.

use std::fmt;

/// Minimum IGN length (inclusive)
pub const IGN_MIN_LEN: usize = 2;

/// Maximum IGN length (inclusive)
pub const IGN_MAX_LEN: usize = 12;

/// A validated in-game name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Ign(String);

impl Ign {
    /// Parse and validate a raw IGN string.
    pub fn parse(raw: &str) -> Result<Self, IgnError> {
        let len = raw.chars().count();
        if !(IGN_MIN_LEN..=IGN_MAX_LEN).contains(&len) {
            return Err(IgnError::InvalidLength(len));
        }
        if !raw.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(IgnError::InvalidCharacters);
        }
        Ok(Self(raw.to_string()))
    }

    /// Borrow the validated name
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Ign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Ign {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Validation failures for an IGN
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum IgnError {
    #[error("IGN must be between {IGN_MIN_LEN}-{IGN_MAX_LEN} characters, got {0}")]
    InvalidLength(usize),

    #[error("IGN may only contain letters and digits")]
    InvalidCharacters,
}
