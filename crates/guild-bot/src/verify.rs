//! Request signature verification
//!
//! Discord signs every interaction webhook with ed25519 over
//! `timestamp || raw body`. A request that fails verification must be
//! rejected before any payload processing.

use ed25519_dalek::{Signature, Verifier, VerifyingKey};
use guild_common::AppError;

/// Verifies interaction signatures against the application public key
#[derive(Debug, Clone)]
pub struct SignatureVerifier {
    key: VerifyingKey,
}

impl SignatureVerifier {
    /// Build a verifier from the hex-encoded public key Discord publishes
    /// in the developer portal.
    pub fn from_hex(public_key: &str) -> Result<Self, AppError> {
        let bytes = hex::decode(public_key)
            .map_err(|e| AppError::VerificationKey(format!("not valid hex: {e}")))?;
        let bytes: [u8; 32] = bytes
            .as_slice()
            .try_into()
            .map_err(|_| AppError::VerificationKey("expected 32 bytes".to_string()))?;
        let key = VerifyingKey::from_bytes(&bytes)
            .map_err(|e| AppError::VerificationKey(e.to_string()))?;
        Ok(Self { key })
    }

    /// Check a request's signature headers against its raw body.
    ///
    /// Any malformed header decodes to a plain `false`; callers reject the
    /// request identically whether the signature is absent, garbled, or
    /// simply wrong.
    #[must_use]
    pub fn verify(&self, timestamp: &str, body: &[u8], signature_hex: &str) -> bool {
        let Ok(sig_bytes) = hex::decode(signature_hex) else {
            return false;
        };
        let Ok(signature) = Signature::from_slice(&sig_bytes) else {
            return false;
        };

        let mut message = Vec::with_capacity(timestamp.len() + body.len());
        message.extend_from_slice(timestamp.as_bytes());
        message.extend_from_slice(body);

        self.key.verify(&message, &signature).is_ok()
    }
}
