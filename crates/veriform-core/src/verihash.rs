//! Verihash: a structured, domain-separated hash over decoded messages.
//!
//! Every node of the tree gets its own digest:
//!
//! - `UInt64(n)`: `H('u' || le64(n))`
//! - `Binary(b)`: `H('d' || b)`
//! - `Message(m)`: `H('O' || le64(id_1) || verihash(v_1) || ... )` with the
//!   fields taken in ascending id order
//!
//! Sorting by id makes the digest independent of the order fields were
//! decoded or inserted in. The one-byte tags keep values of different types
//! from ever sharing a preimage.
//!
//! **This construction is FROZEN.** Changing the tags or the field order
//! breaks every existing commitment.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256, Sha512_256};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;
use crate::message::Message;
use crate::value::Value;

/// Domain separation tags.
pub mod tags {
    /// Messages ("objects").
    pub const MESSAGE: u8 = b'O';
    /// 8-bit clean binary data.
    pub const BINARY: u8 = b'd';
    /// Unsigned 64-bit integers.
    pub const UINT64: u8 = b'u';
}

/// Length of every supported digest, in bytes.
pub const DIGEST_LEN: usize = 32;

/// Hash function used at every node of the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum HashAlgorithm {
    #[default]
    #[serde(rename = "sha256")]
    Sha256,
    #[serde(rename = "sha512-256")]
    Sha512_256,
    #[serde(rename = "blake3")]
    Blake3,
}

impl HashAlgorithm {
    /// Identifier used in configuration.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sha256 => "sha256",
            Self::Sha512_256 => "sha512-256",
            Self::Blake3 => "blake3",
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HashAlgorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sha256" | "sha-256" => Ok(Self::Sha256),
            "sha512-256" | "sha512/256" | "sha-512/256" => Ok(Self::Sha512_256),
            "blake3" => Ok(Self::Blake3),
            _ => Err(Error::UnknownAlgorithm(s.to_string())),
        }
    }
}

/// A 32-byte structured hash.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Verihash(pub [u8; DIGEST_LEN]);

impl Verihash {
    /// Create from raw bytes.
    pub const fn from_bytes(bytes: [u8; DIGEST_LEN]) -> Self {
        Self(bytes)
    }

    /// Get the raw bytes.
    pub const fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }

    /// Convert to hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Parse from hex string.
    pub fn from_hex(s: &str) -> Result<Self, hex::FromHexError> {
        let bytes = hex::decode(s)?;
        if bytes.len() != DIGEST_LEN {
            return Err(hex::FromHexError::InvalidStringLength);
        }
        let mut arr = [0u8; DIGEST_LEN];
        arr.copy_from_slice(&bytes);
        Ok(Self(arr))
    }
}

impl fmt::Debug for Verihash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Verihash({}...)", &self.to_hex()[..16])
    }
}

impl fmt::Display for Verihash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl AsRef<[u8]> for Verihash {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; DIGEST_LEN]> for Verihash {
    fn from(bytes: [u8; DIGEST_LEN]) -> Self {
        Self(bytes)
    }
}

/// One hash context, owned by a single tree node.
enum NodeHasher {
    Sha256(Sha256),
    Sha512_256(Sha512_256),
    Blake3(Box<blake3::Hasher>),
}

impl NodeHasher {
    fn new(algorithm: HashAlgorithm, tag: u8) -> Self {
        let mut hasher = match algorithm {
            HashAlgorithm::Sha256 => Self::Sha256(Sha256::new()),
            HashAlgorithm::Sha512_256 => Self::Sha512_256(Sha512_256::new()),
            HashAlgorithm::Blake3 => Self::Blake3(Box::new(blake3::Hasher::new())),
        };
        hasher.update(&[tag]);
        hasher
    }

    fn update(&mut self, data: &[u8]) {
        match self {
            Self::Sha256(h) => h.update(data),
            Self::Sha512_256(h) => h.update(data),
            Self::Blake3(h) => {
                h.update(data);
            }
        }
    }

    fn finalize(self) -> Verihash {
        match self {
            Self::Sha256(h) => Verihash(h.finalize().into()),
            Self::Sha512_256(h) => Verihash(h.finalize().into()),
            Self::Blake3(h) => Verihash(*h.finalize().as_bytes()),
        }
    }
}

/// Compute the verihash of any value.
pub fn digest(value: &Value, algorithm: HashAlgorithm) -> Verihash {
    match value {
        Value::Message(m) => digest_message(m, algorithm),
        Value::Binary(b) => digest_binary(b, algorithm),
        Value::UInt64(n) => digest_uint64(*n, algorithm),
    }
}

/// Compute the verihash of a message.
///
/// Recurses once per nesting level; decoded messages are bounded by the
/// parser's depth limit.
pub fn digest_message(message: &Message, algorithm: HashAlgorithm) -> Verihash {
    let mut hasher = NodeHasher::new(algorithm, tags::MESSAGE);
    for (id, value) in message.iter_sorted() {
        hasher.update(&id.to_le_bytes());
        hasher.update(digest(value, algorithm).as_bytes());
    }
    hasher.finalize()
}

/// Compute the verihash of a byte string.
pub fn digest_binary(bytes: &[u8], algorithm: HashAlgorithm) -> Verihash {
    let mut hasher = NodeHasher::new(algorithm, tags::BINARY);
    hasher.update(bytes);
    hasher.finalize()
}

/// Compute the verihash of an unsigned integer.
pub fn digest_uint64(value: u64, algorithm: HashAlgorithm) -> Verihash {
    let mut hasher = NodeHasher::new(algorithm, tags::UINT64);
    hasher.update(&value.to_le_bytes());
    hasher.finalize()
}

/// Compute the verihash of a value, hex encoded.
pub fn hexdigest(value: &Value, algorithm: HashAlgorithm) -> String {
    digest(value, algorithm).to_hex()
}

impl Value {
    /// Verihash of this value.
    pub fn digest(&self, algorithm: HashAlgorithm) -> Verihash {
        digest(self, algorithm)
    }
}

impl Message {
    /// Verihash of this message.
    pub fn digest(&self, algorithm: HashAlgorithm) -> Verihash {
        digest_message(self, algorithm)
    }
}
