//! Error types for Veriform Core.

use thiserror::Error;

use crate::field::WireType;

/// Errors that can occur while encoding, parsing, decoding or hashing messages.
///
/// Every error aborts the operation that raised it. A parse that fails never
/// hands back a partially built message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("field {id} has type {actual} (expected {expected})")]
    TypeMismatch {
        id: u64,
        expected: WireType,
        actual: WireType,
    },

    #[error("field {0} not present")]
    MissingField(u64),

    #[error("field id {0} exceeds the maximum of 2^61-1")]
    FieldIdRange(u64),

    #[error("oversized message: {len} bytes (max {max})")]
    OversizeMessage { len: usize, max: usize },

    #[error("max depth of {max} nested messages exceeded")]
    DepthExceeded { max: usize },

    #[error("message truncated: {0}")]
    Truncated(&'static str),

    #[error("unknown wiretype: {0}")]
    UnknownWiretype(u8),

    #[error("duplicate field id: {0}")]
    DuplicateField(u64),

    #[error("invalid state: {0}")]
    InvalidState(&'static str),

    #[error("malformed varint: non-minimal {len}-byte encoding")]
    MalformedVarint { len: usize },

    #[error("length {0} does not fit in memory")]
    LengthOverflow(u64),

    #[error("unknown hash algorithm: {0}")]
    UnknownAlgorithm(String),
}

/// Result type for Veriform Core operations.
pub type Result<T> = std::result::Result<T, Error>;
