//! Field prefixes: the varint that starts every field on the wire.
//!
//! A prefix packs the field id and the wiretype into a single integer as
//! `(field_id << 3) | wiretype`.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Error, Result};
use crate::varint;

/// Largest field id that can be packed into a prefix.
pub const MAX_FIELD_ID: u64 = u64::MAX >> 3;

/// Mask selecting the wiretype bits of a prefix.
const WIRETYPE_MASK: u64 = 0x7;

/// How a field's payload is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum WireType {
    /// Unsigned 64-bit integer stored as a varint.
    UInt64 = 0,
    /// Length-prefixed nested message.
    Message = 2,
    /// Length-prefixed raw bytes.
    Binary = 3,
}

impl WireType {
    /// Convert to the on-wire tag.
    pub const fn to_u8(self) -> u8 {
        self as u8
    }

    /// Try to parse from the on-wire tag.
    pub fn from_u8(value: u8) -> Result<Self> {
        match value {
            0 => Ok(Self::UInt64),
            2 => Ok(Self::Message),
            3 => Ok(Self::Binary),
            other => Err(Error::UnknownWiretype(other)),
        }
    }
}

impl fmt::Display for WireType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::UInt64 => "uint64",
            Self::Message => "message",
            Self::Binary => "binary",
        };
        f.write_str(name)
    }
}

/// A decoded field prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldPrefix {
    pub field_id: u64,
    pub wire_type: WireType,
}

impl FieldPrefix {
    /// Create a new prefix, checking the id can be packed.
    pub fn new(field_id: u64, wire_type: WireType) -> Result<Self> {
        if field_id > MAX_FIELD_ID {
            return Err(Error::FieldIdRange(field_id));
        }
        Ok(Self {
            field_id,
            wire_type,
        })
    }

    /// The packed integer value of this prefix.
    pub const fn to_u64(self) -> u64 {
        (self.field_id << 3) | self.wire_type as u64
    }

    /// Unpack a prefix from its integer value.
    pub fn from_u64(value: u64) -> Result<Self> {
        let wire_type = WireType::from_u8((value & WIRETYPE_MASK) as u8)?;
        Ok(Self {
            field_id: value >> 3,
            wire_type,
        })
    }

    /// Append the varint encoding of this prefix to `buf`.
    pub fn encode_into(self, buf: &mut Vec<u8>) -> usize {
        varint::encode_into(self.to_u64(), buf)
    }

    /// Decode a prefix from the front of `input`, advancing it.
    pub fn decode_from(input: &mut &[u8]) -> Result<Self> {
        let value = varint::decode_from(input)?;
        Self::from_u64(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_packing() {
        let prefix = FieldPrefix::new(1, WireType::UInt64).unwrap();
        assert_eq!(prefix.to_u64(), 8);

        let mut buf = Vec::new();
        prefix.encode_into(&mut buf);
        assert_eq!(buf, vec![0x11]);

        let prefix = FieldPrefix::new(2, WireType::Message).unwrap();
        assert_eq!(prefix.to_u64(), 18);

        let prefix = FieldPrefix::new(3, WireType::Binary).unwrap();
        assert_eq!(prefix.to_u64(), 27);
    }

    #[test]
    fn test_prefix_unpacking() {
        let prefix = FieldPrefix::from_u64(27).unwrap();
        assert_eq!(prefix.field_id, 3);
        assert_eq!(prefix.wire_type, WireType::Binary);

        let mut cursor: &[u8] = &[0x11, 0x55];
        let prefix = FieldPrefix::decode_from(&mut cursor).unwrap();
        assert_eq!(prefix, FieldPrefix::new(1, WireType::UInt64).unwrap());
        assert_eq!(cursor, &[0x55]);
    }

    #[test]
    fn test_unknown_wiretypes() {
        for tag in [1u8, 4, 5, 6, 7] {
            assert_eq!(WireType::from_u8(tag), Err(Error::UnknownWiretype(tag)));
            assert_eq!(
                FieldPrefix::from_u64((5 << 3) | tag as u64),
                Err(Error::UnknownWiretype(tag))
            );
        }
    }

    #[test]
    fn test_field_id_range() {
        assert!(FieldPrefix::new(MAX_FIELD_ID, WireType::Binary).is_ok());
        assert_eq!(
            FieldPrefix::new(MAX_FIELD_ID + 1, WireType::Binary),
            Err(Error::FieldIdRange(MAX_FIELD_ID + 1))
        );

        let prefix = FieldPrefix::new(MAX_FIELD_ID, WireType::Binary).unwrap();
        assert_eq!(FieldPrefix::from_u64(prefix.to_u64()).unwrap(), prefix);
    }

    #[test]
    fn test_wiretype_display() {
        assert_eq!(WireType::UInt64.to_string(), "uint64");
        assert_eq!(WireType::Message.to_string(), "message");
        assert_eq!(WireType::Binary.to_string(), "binary");
    }
}
