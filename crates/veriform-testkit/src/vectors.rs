//! Golden test vectors for cross-implementation verification.
//!
//! Every implementation of Veriform must agree on:
//! - the varint encoding of each integer
//! - which encoded messages parse and which are rejected
//! - the SHA-256 verihash of every message that parses

use serde::Serialize;
use veriform_core::Error;

/// A varint test vector.
#[derive(Debug, Clone, Serialize)]
pub struct VarintVector {
    /// Encoded bytes (hex).
    pub encoded: &'static str,
    /// Decoded value, or `None` if decoding must fail.
    pub value: Option<u64>,
}

/// How a message vector is expected to fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Failure {
    Truncated,
    OversizeMessage,
    DepthExceeded,
    UnknownWiretype,
    DuplicateField,
    MalformedVarint,
}

impl Failure {
    /// Whether `err` is this kind of failure.
    pub fn matches(&self, err: &Error) -> bool {
        matches!(
            (self, err),
            (Failure::Truncated, Error::Truncated(_))
                | (Failure::OversizeMessage, Error::OversizeMessage { .. })
                | (Failure::DepthExceeded, Error::DepthExceeded { .. })
                | (Failure::UnknownWiretype, Error::UnknownWiretype(_))
                | (Failure::DuplicateField, Error::DuplicateField(_))
                | (Failure::MalformedVarint, Error::MalformedVarint { .. })
        )
    }
}

/// Expected outcome of parsing a message vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Expected {
    /// Parses; the SHA-256 verihash of the result (hex).
    Digest(&'static str),
    /// Fails with the given kind of error.
    Failure(Failure),
}

/// A message test vector.
#[derive(Debug, Clone, Serialize)]
pub struct MessageVector {
    /// Human-readable name for the vector.
    pub name: &'static str,
    /// What the vector exercises.
    pub description: &'static str,
    /// Encoded message (hex).
    pub encoded: &'static str,
    /// Expected outcome with default limits.
    pub expected: Expected,
}

impl VarintVector {
    pub fn bytes(&self) -> Vec<u8> {
        decode_hex(self.encoded)
    }
}

impl MessageVector {
    pub fn bytes(&self) -> Vec<u8> {
        decode_hex(self.encoded)
    }
}

fn decode_hex(s: &str) -> Vec<u8> {
    hex::decode(s).unwrap_or_else(|e| panic!("invalid hex in test vector {:?}: {}", s, e))
}

/// Get all varint vectors.
pub fn varint_vectors() -> Vec<VarintVector> {
    vec![
        VarintVector { encoded: "01", value: Some(0) },
        VarintVector { encoded: "03", value: Some(1) },
        VarintVector { encoded: "55", value: Some(42) },
        VarintVector { encoded: "ff", value: Some(127) },
        VarintVector { encoded: "0202", value: Some(128) },
        VarintVector { encoded: "feff", value: Some(16383) },
        VarintVector { encoded: "040002", value: Some(16384) },
        VarintVector { encoded: "fcffff", value: Some(2_097_151) },
        VarintVector { encoded: "08000002", value: Some(2_097_152) },
        VarintVector { encoded: "80ffffffffffffff", value: Some((1 << 56) - 1) },
        VarintVector { encoded: "000000000000000001", value: Some(1 << 56) },
        VarintVector { encoded: "00ffffffffffffffff", value: Some(u64::MAX) },
        // Empty input
        VarintVector { encoded: "", value: None },
        // Truncated: 2-byte prefix, 1 byte present
        VarintVector { encoded: "02", value: None },
        // Truncated escape form
        VarintVector { encoded: "00ffffffff", value: None },
        // Non-minimal: 0 in 2 bytes
        VarintVector { encoded: "0200", value: None },
        // Non-minimal: 127 in 2 bytes
        VarintVector { encoded: "fe01", value: None },
        // Non-minimal: escape form holding a small value
        VarintVector { encoded: "000100000000000000", value: None },
    ]
}

/// Get all message vectors.
pub fn message_vectors() -> Vec<MessageVector> {
    vec![
        MessageVector {
            name: "empty",
            description: "Message with no fields",
            encoded: "",
            expected: Expected::Digest(
                "c4694f2e93d5c4e7d51f9c5deb75e6cc8be5e1114178c6a45b6fc2c566a0aa8c",
            ),
        },
        MessageVector {
            name: "single_uint64",
            description: "{1: 42}",
            encoded: "1155",
            expected: Expected::Digest(
                "ab172781cdc0ccebeb15b4103b0929b4e92819563714a6bee2ca1c167e1bf85d",
            ),
        },
        MessageVector {
            name: "nested",
            description: "{1: {1: 42}, 2: \"hi\"}",
            encoded: "1505115527056869",
            expected: Expected::Digest(
                "73dd599ab7c8fd9094af84d59c716eeb5725df2e364ca3e4edd892757caebb7a",
            ),
        },
        MessageVector {
            name: "mixed",
            description: "Binary, max uint64 and a nested message, ids out of order",
            encoded: "3709deadbeef1100ffffffffffffffff250977011101",
            expected: Expected::Digest(
                "8ba0bdf4004682f301fe3c4ea24e6111f2e9aee3d7c5004e0e59d100556e6ca9",
            ),
        },
        MessageVector {
            name: "in_order",
            description: "{1: 1, 2: 1}",
            encoded: "11032103",
            expected: Expected::Digest(
                "e052d8c292904afdff58a6354b87db86e650e76b4ef3a0d6bce1ec72e361a546",
            ),
        },
        MessageVector {
            name: "out_of_order",
            description: "{2: 1, 1: 1} hashes the same as {1: 1, 2: 1}",
            encoded: "21031103",
            expected: Expected::Digest(
                "e052d8c292904afdff58a6354b87db86e650e76b4ef3a0d6bce1ec72e361a546",
            ),
        },
        MessageVector {
            name: "large_ids",
            description: "Two-byte field prefix and the largest packable field id",
            encoded: "0e7d037800f8ffffffffffffff0f",
            expected: Expected::Digest(
                "d81ec90b63cf3bedbb15cb748dac6f51e1fb58b833c9e967fc09c54b317063bc",
            ),
        },
        MessageVector {
            name: "credential",
            description: "Credential-shaped message with two nesting levels",
            encoded: "170b616c6963652110207eaa0c354d1741010101010101010101010101010101\
                      01010101010101010101010101010101012505110b",
            expected: Expected::Digest(
                "b21e192b7e198e5ef7775e309f0f602d6a8d0b1406862c5437c069ccfd009821",
            ),
        },
        MessageVector {
            name: "max_depth",
            description: "Eight nested levels, the default maximum",
            encoded: "151d151915151511150d150915051101",
            expected: Expected::Digest(
                "804ba40a0b09ce36cba13f8df0a8e4dcfa78bbe4e72fe71c5ee0a2ce769db949",
            ),
        },
        MessageVector {
            name: "too_deep",
            description: "Nine nested levels, one past the default maximum",
            encoded: "1521151d151915151511150d150915051101",
            expected: Expected::Failure(Failure::DepthExceeded),
        },
        MessageVector {
            name: "truncated_binary",
            description: "Binary length prefix overruns the buffer",
            encoded: "270b6869",
            expected: Expected::Failure(Failure::Truncated),
        },
        MessageVector {
            name: "truncated_nested",
            description: "Nested message length prefix overruns the buffer",
            encoded: "15091155",
            expected: Expected::Failure(Failure::Truncated),
        },
        MessageVector {
            name: "missing_value",
            description: "uint64 field prefix with no value",
            encoded: "11",
            expected: Expected::Failure(Failure::Truncated),
        },
        MessageVector {
            name: "duplicate_field",
            description: "{1: 42, 1: 42}",
            encoded: "11551155",
            expected: Expected::Failure(Failure::DuplicateField),
        },
        MessageVector {
            name: "duplicate_field_mixed_types",
            description: "Field 1 as uint64 then as binary",
            encoded: "11551701",
            expected: Expected::Failure(Failure::DuplicateField),
        },
        MessageVector {
            name: "duplicate_field_nested",
            description: "Duplicate inside a nested message",
            encoded: "150911551155",
            expected: Expected::Failure(Failure::DuplicateField),
        },
        MessageVector {
            name: "unknown_wiretype",
            description: "Wiretype 1 is not defined",
            encoded: "1301",
            expected: Expected::Failure(Failure::UnknownWiretype),
        },
        MessageVector {
            name: "non_minimal_value",
            description: "uint64 value 0 encoded in two bytes",
            encoded: "110200",
            expected: Expected::Failure(Failure::MalformedVarint),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vector_names_unique() {
        let vectors = message_vectors();
        let mut names: Vec<_> = vectors.iter().map(|v| v.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), vectors.len());
    }

    #[test]
    fn test_vectors_are_valid_hex() {
        for v in varint_vectors() {
            let _ = v.bytes();
        }
        for v in message_vectors() {
            let _ = v.bytes();
            if let Expected::Digest(hex) = v.expected {
                assert_eq!(hex.len(), 64, "vector '{}'", v.name);
            }
        }
    }

    #[test]
    fn test_vectors_serialize() {
        let json = serde_json::to_string(&message_vectors()).unwrap();
        assert!(json.contains("\"single_uint64\""));
    }
}
