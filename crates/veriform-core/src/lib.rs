//! # Veriform Core
//!
//! Pure primitives for Veriform: a compact, self-describing binary message
//! format intended as a credential encoding, and a structured hash over
//! decoded messages usable for commitments and signing.
//!
//! This crate contains no I/O. It is pure computation over byte buffers.
//!
//! ## Key Types
//!
//! - [`Message`] - Decoded tree of field id → [`Value`]
//! - [`Parser`] - Bounded push parser driving any [`Handler`]
//! - [`Decoder`] - The [`Handler`] that builds a [`Message`]
//! - [`Verihash`] - 32-byte structured hash of a value
//!
//! ## Wire Format
//!
//! ```text
//! message := field*
//! field   := varint((field_id << 3) | wiretype) payload
//! payload := varint(value)               ; wiretype 0, uint64
//!          | varint(length) bytes        ; wiretype 2, nested message
//!          | varint(length) bytes        ; wiretype 3, binary
//! ```
//!
//! Integers use the prefix varint described in [`varint`].

pub mod decoder;
pub mod encoder;
pub mod error;
pub mod field;
pub mod limits;
pub mod message;
pub mod parser;
pub mod value;
pub mod varint;
pub mod verihash;

pub use decoder::{parse, parse_with_limits, Decoder};
pub use encoder::{encode, Encoder};
pub use error::{Error, Result};
pub use field::{FieldPrefix, WireType, MAX_FIELD_ID};
pub use limits::{Limits, DEFAULT_MAX_DEPTH, DEFAULT_MAX_LENGTH};
pub use message::Message;
pub use parser::{Handler, Parser};
pub use value::Value;
pub use verihash::{digest, digest_message, hexdigest, HashAlgorithm, Verihash};
