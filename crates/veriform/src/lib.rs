//! # Veriform
//!
//! A compact, self-describing binary message format intended as a credential
//! encoding, plus a structured hash ("verihash") over decoded messages usable
//! for commitments and signing.
//!
//! ## Overview
//!
//! - **Messages**: Trees of field id → value, where a value is an unsigned
//!   64-bit integer, a byte string, or a nested message
//! - **Parsing**: Bounded by length and depth, safe on untrusted input
//! - **Verihash**: A domain-separated hash that ignores field order
//!
//! ## Usage
//!
//! ```rust
//! use veriform::{Codec, CodecConfig, Message};
//!
//! let codec = Codec::new(CodecConfig::default());
//!
//! let mut message = Message::new();
//! message.insert(1, b"alice".to_vec()).unwrap();
//! message.insert(2, 1_700_000_000u64).unwrap();
//!
//! let bytes = codec.encode(&message).unwrap();
//! let (decoded, commitment) = codec.commit(&bytes).unwrap();
//! assert_eq!(decoded, message);
//!
//! // Later, from untrusted bytes:
//! let verified = codec.verify(&bytes, &commitment).unwrap();
//! assert_eq!(verified.get_binary(1).unwrap(), b"alice");
//! ```
//!
//! ## Re-exports
//!
//! - `veriform::core` - Wire format, parser, decoder, encoder, and hashing
//!   primitives. Implement [`Handler`] there to consume parse events without
//!   building a tree.

pub mod codec;
pub mod error;

// Re-export the core crate
pub use veriform_core as core;

// Re-export main types for convenience
pub use codec::{digest, hexdigest, parse, Codec, CodecConfig};
pub use error::{Error, Result};

// Re-export commonly used core types
pub use veriform_core::{
    Decoder, Encoder, HashAlgorithm, Handler, Limits, Message, Parser, Value, Verihash,
    WireType, DEFAULT_MAX_DEPTH, DEFAULT_MAX_LENGTH,
};
