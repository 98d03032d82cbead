//! Decoded field values.

use bytes::Bytes;

use crate::field::WireType;
use crate::message::Message;

/// The value of one field in a [`Message`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    UInt64(u64),
    Binary(Bytes),
    Message(Message),
}

impl Value {
    /// The wiretype this value is encoded with.
    pub fn wire_type(&self) -> WireType {
        match self {
            Value::UInt64(_) => WireType::UInt64,
            Value::Binary(_) => WireType::Binary,
            Value::Message(_) => WireType::Message,
        }
    }

    pub fn as_uint64(&self) -> Option<u64> {
        match self {
            Value::UInt64(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_binary(&self) -> Option<&[u8]> {
        match self {
            Value::Binary(b) => Some(&b[..]),
            _ => None,
        }
    }

    pub fn as_message(&self) -> Option<&Message> {
        match self {
            Value::Message(m) => Some(m),
            _ => None,
        }
    }
}

impl From<u64> for Value {
    fn from(n: u64) -> Self {
        Value::UInt64(n)
    }
}

impl From<Bytes> for Value {
    fn from(b: Bytes) -> Self {
        Value::Binary(b)
    }
}

impl From<Vec<u8>> for Value {
    fn from(b: Vec<u8>) -> Self {
        Value::Binary(b.into())
    }
}

impl From<&[u8]> for Value {
    fn from(b: &[u8]) -> Self {
        Value::Binary(Bytes::copy_from_slice(b))
    }
}

impl From<Message> for Value {
    fn from(m: Message) -> Self {
        Value::Message(m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_types() {
        assert_eq!(Value::from(5u64).wire_type(), WireType::UInt64);
        assert_eq!(Value::from(vec![5u8]).wire_type(), WireType::Binary);
        assert_eq!(Value::from(Message::new()).wire_type(), WireType::Message);
    }

    #[test]
    fn test_accessors() {
        let value = Value::from(&b"hello"[..]);
        assert_eq!(value.as_binary(), Some(&b"hello"[..]));
        assert_eq!(value.as_uint64(), None);
        assert!(value.as_message().is_none());

        let value = Value::from(42u64);
        assert_eq!(value.as_uint64(), Some(42));
        assert_eq!(value.as_binary(), None);
    }
}
