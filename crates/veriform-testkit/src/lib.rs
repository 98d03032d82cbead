//! # Veriform Testkit
//!
//! Testing utilities for Veriform.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Golden vectors**: Encoded messages with expected verihashes or expected failures
//! - **Generators**: Proptest strategies for message trees and raw input
//! - **Fixtures**: A recording handler and builders for hostile input
//!
//! ## Golden Vectors
//!
//! ```rust
//! use veriform_core::{parse, HashAlgorithm};
//! use veriform_testkit::vectors::{message_vectors, Expected};
//!
//! for vector in message_vectors() {
//!     if let Expected::Digest(hex) = vector.expected {
//!         let message = parse(&vector.bytes()).unwrap();
//!         assert_eq!(message.digest(HashAlgorithm::Sha256).to_hex(), hex);
//!     }
//! }
//! ```
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use veriform_testkit::generators::message;
//!
//! proptest! {
//!     #[test]
//!     fn encode_parse_roundtrip(msg in message()) {
//!         let bytes = veriform_core::encode(&msg).unwrap();
//!         prop_assert_eq!(veriform_core::parse(&bytes).unwrap(), msg);
//!     }
//! }
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::{nest_chain, sized_message, Event, Recorder, ROOMY_LIMITS};
pub use vectors::{message_vectors, varint_vectors, Expected, Failure, MessageVector, VarintVector};
