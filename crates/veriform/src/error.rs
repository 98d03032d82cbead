//! Error types for the Veriform facade.

use thiserror::Error;
use veriform_core::Verihash;

/// Errors that can occur during codec operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Error from the wire format or the hash layer.
    #[error(transparent)]
    Core(#[from] veriform_core::Error),

    /// A message parsed but does not hash to the expected commitment.
    #[error("digest mismatch: expected {expected}, got {actual}")]
    DigestMismatch { expected: Verihash, actual: Verihash },
}

/// Result type for codec operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_errors_pass_through() {
        let err: Error = veriform_core::Error::DuplicateField(3).into();
        assert_eq!(err.to_string(), "duplicate field id: 3");
    }

    #[test]
    fn test_digest_mismatch_message() {
        let err = Error::DigestMismatch {
            expected: Verihash::from_bytes([0u8; 32]),
            actual: Verihash::from_bytes([0xFF; 32]),
        };
        let msg = err.to_string();
        assert!(msg.starts_with("digest mismatch: expected 0000"));
        assert!(msg.ends_with("ffff"));
    }
}
