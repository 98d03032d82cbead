//! The Codec: a configured front end over the core primitives.
//!
//! A [`Codec`] pairs parsing [`Limits`] with a [`HashAlgorithm`] so callers
//! configure both once and then parse, hash, and check commitments without
//! threading parameters through every call.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use veriform_core::{
    digest_message, parse_with_limits, Error as CoreError, HashAlgorithm, Limits, Message, Value,
    Verihash,
};

use crate::error::{Error, Result};

/// Configuration for the Codec.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    /// Limits applied to every parse.
    pub limits: Limits,
    /// Hash algorithm used for digests and commitments.
    pub algorithm: HashAlgorithm,
}

/// Parses, encodes, and hashes messages under one configuration.
///
/// Holds no state between calls; a single codec may be shared freely.
#[derive(Debug, Clone, Default)]
pub struct Codec {
    config: CodecConfig,
}

impl Codec {
    /// Create a new codec.
    pub fn new(config: CodecConfig) -> Self {
        Self { config }
    }

    /// Get the configuration.
    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Wire Format
    // ─────────────────────────────────────────────────────────────────────────

    /// Parse an encoded message under the configured limits.
    pub fn parse(&self, bytes: &[u8]) -> Result<Message> {
        let message = parse_with_limits(bytes, self.config.limits)?;
        debug!(len = bytes.len(), fields = message.len(), "parsed message");
        Ok(message)
    }

    /// Encode a message.
    ///
    /// Output longer than the configured `max_length` is refused, since this
    /// codec could not parse it back.
    pub fn encode(&self, message: &Message) -> Result<Vec<u8>> {
        let bytes = veriform_core::encode(message)?;
        let max = self.config.limits.max_length;
        if bytes.len() > max {
            debug!(len = bytes.len(), max, "refusing to emit oversized message");
            return Err(CoreError::OversizeMessage {
                len: bytes.len(),
                max,
            }
            .into());
        }
        Ok(bytes)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Hashing
    // ─────────────────────────────────────────────────────────────────────────

    /// Compute the verihash of a value.
    pub fn digest(&self, value: &Value) -> Verihash {
        value.digest(self.config.algorithm)
    }

    /// Compute the verihash of a message.
    pub fn digest_message(&self, message: &Message) -> Verihash {
        digest_message(message, self.config.algorithm)
    }

    /// Compute the verihash of a value as lowercase hex.
    pub fn hexdigest(&self, value: &Value) -> String {
        self.digest(value).to_hex()
    }

    /// Parse a message and compute its verihash.
    pub fn commit(&self, bytes: &[u8]) -> Result<(Message, Verihash)> {
        let message = self.parse(bytes)?;
        let digest = self.digest_message(&message);
        debug!(
            algorithm = %self.config.algorithm,
            digest = %digest,
            "computed commitment"
        );
        Ok((message, digest))
    }

    /// Parse a message and check it against an expected verihash.
    ///
    /// The message is returned only if its digest matches.
    pub fn verify(&self, bytes: &[u8], expected: &Verihash) -> Result<Message> {
        let (message, actual) = self.commit(bytes)?;
        if actual != *expected {
            warn!(
                expected = %expected,
                actual = %actual,
                algorithm = %self.config.algorithm,
                "commitment mismatch"
            );
            return Err(Error::DigestMismatch {
                expected: *expected,
                actual,
            });
        }
        Ok(message)
    }
}

/// Parse an encoded message with the default configuration.
pub fn parse(bytes: &[u8]) -> Result<Message> {
    Codec::default().parse(bytes)
}

/// Compute the SHA-256 verihash of a value.
pub fn digest(value: &Value) -> Verihash {
    Codec::default().digest(value)
}

/// Compute the SHA-256 verihash of a value as lowercase hex.
pub fn hexdigest(value: &Value) -> String {
    Codec::default().hexdigest(value)
}
