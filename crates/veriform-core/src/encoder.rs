//! Encoder: serializes fields and messages to the wire format.
//!
//! ```text
//! message := field*
//! field   := varint((field_id << 3) | wiretype) payload
//! ```

use crate::error::Result;
use crate::field::{FieldPrefix, WireType};
use crate::message::Message;
use crate::value::Value;
use crate::varint;

/// Writes fields into an owned buffer.
#[derive(Debug, Default)]
pub struct Encoder {
    buf: Vec<u8>,
}

impl Encoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write an unsigned integer field.
    pub fn uint64(&mut self, id: u64, value: u64) -> Result<()> {
        self.write_prefix(id, WireType::UInt64)?;
        varint::encode_into(value, &mut self.buf);
        Ok(())
    }

    /// Write a binary field.
    pub fn binary(&mut self, id: u64, bytes: &[u8]) -> Result<()> {
        self.write_prefix(id, WireType::Binary)?;
        self.write_length_prefixed(bytes);
        Ok(())
    }

    /// Write a nested message field.
    pub fn message(&mut self, id: u64, message: &Message) -> Result<()> {
        let body = encode(message)?;
        self.write_prefix(id, WireType::Message)?;
        self.write_length_prefixed(&body);
        Ok(())
    }

    /// Write a field holding any value.
    pub fn value(&mut self, id: u64, value: &Value) -> Result<()> {
        match value {
            Value::UInt64(n) => self.uint64(id, *n),
            Value::Binary(b) => self.binary(id, b),
            Value::Message(m) => self.message(id, m),
        }
    }

    /// Bytes written so far.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Finish, returning the encoded message.
    pub fn finish(self) -> Vec<u8> {
        self.buf
    }

    fn write_prefix(&mut self, id: u64, wire_type: WireType) -> Result<()> {
        FieldPrefix::new(id, wire_type)?.encode_into(&mut self.buf);
        Ok(())
    }

    fn write_length_prefixed(&mut self, bytes: &[u8]) {
        varint::encode_into(bytes.len() as u64, &mut self.buf);
        self.buf.extend_from_slice(bytes);
    }
}

/// Encode a message, writing its fields in insertion order.
pub fn encode(message: &Message) -> Result<Vec<u8>> {
    let mut encoder = Encoder::new();
    for (id, value) in message.iter() {
        encoder.value(id, value)?;
    }
    Ok(encoder.finish())
}
