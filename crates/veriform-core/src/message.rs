//! Message: a decoded tree of field id → value.
//!
//! Fields are stored in insertion order, which is the order the encoder
//! writes them back out in. Semantics never depend on that order: equality
//! and hashing both treat a message as a set of fields keyed by id.

use std::collections::BTreeMap;

use crate::error::{Error, Result};
use crate::field::{WireType, MAX_FIELD_ID};
use crate::value::Value;

/// A Veriform message.
///
/// A field id can be set at most once per message instance. The same id may
/// be reused freely inside nested messages.
#[derive(Debug, Clone, Default)]
pub struct Message {
    /// Fields in insertion order.
    fields: Vec<(u64, Value)>,
    /// Field id → position in `fields`.
    index: BTreeMap<u64, usize>,
}

impl Message {
    /// Create an empty message.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a message from `(id, value)` pairs, in order.
    pub fn from_fields<I, V>(fields: I) -> Result<Self>
    where
        I: IntoIterator<Item = (u64, V)>,
        V: Into<Value>,
    {
        let mut message = Self::new();
        for (id, value) in fields {
            message.insert(id, value)?;
        }
        Ok(message)
    }

    /// Set field `id`.
    ///
    /// Fails with [`Error::DuplicateField`] if the id is already present and
    /// with [`Error::FieldIdRange`] if it cannot be packed into a prefix.
    pub fn insert(&mut self, id: u64, value: impl Into<Value>) -> Result<()> {
        if id > MAX_FIELD_ID {
            return Err(Error::FieldIdRange(id));
        }
        if self.index.contains_key(&id) {
            return Err(Error::DuplicateField(id));
        }

        self.index.insert(id, self.fields.len());
        self.fields.push((id, value.into()));
        Ok(())
    }

    /// Get the value of field `id`.
    pub fn get(&self, id: u64) -> Option<&Value> {
        self.index.get(&id).map(|&pos| &self.fields[pos].1)
    }

    pub fn contains(&self, id: u64) -> bool {
        self.index.contains_key(&id)
    }

    /// Get an unsigned integer field.
    pub fn get_uint64(&self, id: u64) -> Result<u64> {
        match self.require(id)? {
            Value::UInt64(n) => Ok(*n),
            other => Err(mismatch(id, WireType::UInt64, other)),
        }
    }

    /// Get a binary field.
    pub fn get_binary(&self, id: u64) -> Result<&[u8]> {
        match self.require(id)? {
            Value::Binary(b) => Ok(&b[..]),
            other => Err(mismatch(id, WireType::Binary, other)),
        }
    }

    /// Get a nested message field.
    pub fn get_message(&self, id: u64) -> Result<&Message> {
        match self.require(id)? {
            Value::Message(m) => Ok(m),
            other => Err(mismatch(id, WireType::Message, other)),
        }
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate over fields in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (u64, &Value)> {
        self.fields.iter().map(|(id, value)| (*id, value))
    }

    /// Iterate over fields in ascending field id order.
    pub fn iter_sorted(&self) -> impl Iterator<Item = (u64, &Value)> {
        self.index
            .iter()
            .map(move |(&id, &pos)| (id, &self.fields[pos].1))
    }

    /// Field ids in ascending order.
    pub fn field_ids_sorted(&self) -> Vec<u64> {
        self.index.keys().copied().collect()
    }

    fn require(&self, id: u64) -> Result<&Value> {
        self.get(id).ok_or(Error::MissingField(id))
    }
}

fn mismatch(id: u64, expected: WireType, actual: &Value) -> Error {
    Error::TypeMismatch {
        id,
        expected,
        actual: actual.wire_type(),
    }
}

impl PartialEq for Message {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(id, value)| other.get(id) == Some(value))
    }
}

impl Eq for Message {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_get() {
        let mut message = Message::new();
        message.insert(1, 42u64).unwrap();
        message.insert(2, b"hello".to_vec()).unwrap();

        assert_eq!(message.len(), 2);
        assert_eq!(message.get_uint64(1).unwrap(), 42);
        assert_eq!(message.get_binary(2).unwrap(), b"hello");
        assert!(message.contains(1));
        assert!(!message.contains(3));
    }

    #[test]
    fn test_duplicate_field_rejected() {
        let mut message = Message::new();
        message.insert(1, 42u64).unwrap();
        assert_eq!(message.insert(1, 43u64), Err(Error::DuplicateField(1)));
        assert_eq!(
            message.insert(1, b"x".to_vec()),
            Err(Error::DuplicateField(1))
        );
        assert_eq!(message.get_uint64(1).unwrap(), 42);
    }

    #[test]
    fn test_same_id_at_different_levels() {
        let inner = Message::from_fields([(1, 7u64)]).unwrap();
        let mut outer = Message::new();
        outer.insert(1, 5u64).unwrap();
        outer.insert(2, inner).unwrap();

        assert_eq!(outer.get_message(2).unwrap().get_uint64(1).unwrap(), 7);
    }

    #[test]
    fn test_field_id_range() {
        let mut message = Message::new();
        assert!(message.insert(MAX_FIELD_ID, 1u64).is_ok());
        assert_eq!(
            message.insert(MAX_FIELD_ID + 1, 1u64),
            Err(Error::FieldIdRange(MAX_FIELD_ID + 1))
        );
    }

    #[test]
    fn test_typed_accessor_errors() {
        let message = Message::from_fields([(1, 42u64)]).unwrap();

        assert_eq!(message.get_binary(1), Err(Error::TypeMismatch {
            id: 1,
            expected: WireType::Binary,
            actual: WireType::UInt64,
        }));
        assert!(matches!(
            message.get_message(1),
            Err(Error::TypeMismatch { .. })
        ));
        assert_eq!(message.get_uint64(9), Err(Error::MissingField(9)));
    }

    #[test]
    fn test_iteration_orders() {
        let message = Message::from_fields([(5, 1u64), (1, 2u64), (3, 3u64)]).unwrap();

        let insertion: Vec<u64> = message.iter().map(|(id, _)| id).collect();
        assert_eq!(insertion, vec![5, 1, 3]);

        let sorted: Vec<u64> = message.iter_sorted().map(|(id, _)| id).collect();
        assert_eq!(sorted, vec![1, 3, 5]);
        assert_eq!(message.field_ids_sorted(), vec![1, 3, 5]);
    }

    #[test]
    fn test_equality_ignores_order() {
        let a = Message::from_fields([(1, 10u64), (2, 20u64)]).unwrap();
        let b = Message::from_fields([(2, 20u64), (1, 10u64)]).unwrap();
        let c = Message::from_fields([(1, 10u64), (2, 21u64)]).unwrap();
        let d = Message::from_fields([(1, 10u64)]).unwrap();

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, d);
        assert_ne!(d, a);
    }
}
