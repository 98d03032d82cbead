//! Proptest generators for property-based testing.

use proptest::prelude::*;

use veriform_core::{encode, Message, Value, MAX_FIELD_ID};

/// Maximum nesting of generated values below the root message.
pub const MAX_GENERATED_NESTING: u32 = 3;

/// Generate a field id, biased towards small ids.
pub fn field_id() -> impl Strategy<Value = u64> {
    prop_oneof![
        4 => 0u64..=31,
        1 => 0u64..=MAX_FIELD_ID,
    ]
}

/// Generate a varint value, biased towards the length boundaries.
pub fn varint_value() -> impl Strategy<Value = u64> {
    prop_oneof![
        any::<u64>(),
        (0u32..64).prop_map(|shift| 1u64 << shift),
        (1u32..64).prop_map(|shift| (1u64 << shift) - 1),
        Just(u64::MAX),
    ]
}

/// Generate binary field contents of specified max length.
pub fn binary(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..=max_len)
}

/// Generate a leaf (non-message) value.
pub fn leaf_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        varint_value().prop_map(Value::UInt64),
        binary(32).prop_map(Value::from),
    ]
}

/// Generate a value tree, nesting at most [`MAX_GENERATED_NESTING`] levels.
pub fn value() -> impl Strategy<Value = Value> {
    leaf_value().prop_recursive(MAX_GENERATED_NESTING, 48, 6, |inner| {
        message_of(inner, 6).prop_map(Value::Message)
    })
}

/// Generate a message whose fields are drawn from `value`.
///
/// Field ids are unique and inserted in shuffled order.
pub fn message_of<S>(value: S, max_fields: usize) -> impl Strategy<Value = Message>
where
    S: Strategy<Value = Value>,
{
    prop::collection::btree_map(field_id(), value, 0..=max_fields)
        .prop_map(|fields| fields.into_iter().collect::<Vec<_>>())
        .prop_shuffle()
        .prop_filter_map("field ids must be unique", |fields| {
            Message::from_fields(fields).ok()
        })
}

/// Generate a message tree.
pub fn message() -> impl Strategy<Value = Message> {
    message_of(value(), 8)
}

/// Generate a well-formed encoded message.
pub fn encoded_message() -> impl Strategy<Value = Vec<u8>> {
    message().prop_filter_map("message must encode", |message| encode(&message).ok())
}

/// Generate arbitrary bytes, well-formed or not.
pub fn arbitrary_bytes(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..=max_len)
}

/// Count the message levels of a tree, the root included.
pub fn message_depth(message: &Message) -> usize {
    1 + message
        .iter()
        .filter_map(|(_, value)| value.as_message())
        .map(message_depth)
        .max()
        .unwrap_or(0)
}
