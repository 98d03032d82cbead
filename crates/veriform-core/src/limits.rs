//! Resource limits applied while parsing untrusted input.

use serde::{Deserialize, Serialize};

/// Default maximum length of an encoded message: 1 KiB.
///
/// Conservative because the main use of the format is as a credential.
pub const DEFAULT_MAX_LENGTH: usize = 1024;

/// Default maximum nesting depth, counting the outermost message as 1.
pub const DEFAULT_MAX_DEPTH: usize = 8;

/// Limits enforced by the parser.
///
/// `max_length` bounds every buffer handed to the parser (nested messages
/// are slices of their parent, so this bounds the whole input). `max_depth`
/// is checked before a new nesting level is entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Limits {
    /// Maximum message length in bytes.
    pub max_length: usize,
    /// Maximum number of nested message levels.
    pub max_depth: usize,
}

impl Limits {
    pub const fn new(max_length: usize, max_depth: usize) -> Self {
        Self {
            max_length,
            max_depth,
        }
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_LENGTH, DEFAULT_MAX_DEPTH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let limits = Limits::default();
        assert_eq!(limits.max_length, 1024);
        assert_eq!(limits.max_depth, 8);
    }

    #[test]
    fn test_deserialize_partial() {
        let limits: Limits = serde_json::from_str(r#"{"max_depth": 4}"#).unwrap();
        assert_eq!(limits, Limits::new(DEFAULT_MAX_LENGTH, 4));

        let limits: Limits = serde_json::from_str("{}").unwrap();
        assert_eq!(limits, Limits::default());
    }
}
