//! Test fixtures and helpers.
//!
//! Handlers and input builders shared by integration tests.

use veriform_core::{varint, FieldPrefix, Handler, Limits, Result, WireType};

/// Limits large enough for any generated message.
pub const ROOMY_LIMITS: Limits = Limits::new(1 << 20, 64);

/// A parse event as seen by a [`Handler`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    UInt64 { id: u64, value: u64 },
    Binary { id: u64, bytes: Vec<u8> },
    BeginNested,
    EndNested { id: u64 },
}

/// Handler that records every event it receives.
#[derive(Debug, Default)]
pub struct Recorder {
    events: Vec<Event>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }
}

impl Handler for Recorder {
    type Output = Vec<Event>;

    fn uint64(&mut self, id: u64, value: u64) -> Result<()> {
        self.events.push(Event::UInt64 { id, value });
        Ok(())
    }

    fn binary(&mut self, id: u64, bytes: &[u8]) -> Result<()> {
        self.events.push(Event::Binary {
            id,
            bytes: bytes.to_vec(),
        });
        Ok(())
    }

    fn begin_nested(&mut self) -> Result<()> {
        self.events.push(Event::BeginNested);
        Ok(())
    }

    fn end_nested(&mut self, id: u64) -> Result<()> {
        self.events.push(Event::EndNested { id });
        Ok(())
    }

    fn finish(self) -> Result<Vec<Event>> {
        Ok(self.events)
    }
}

/// Encode a single field prefix followed by `payload` verbatim.
///
/// Unlike the encoder this accepts any payload, so tests can build
/// malformed input.
pub fn raw_field(field_id: u64, wire_type: WireType, payload: &[u8]) -> Vec<u8> {
    let mut out = Vec::new();
    FieldPrefix {
        field_id,
        wire_type,
    }
    .encode_into(&mut out);
    out.extend_from_slice(payload);
    out
}

/// Wrap `body` as field `field_id` holding a nested message.
pub fn wrap_nested(field_id: u64, body: &[u8]) -> Vec<u8> {
    let mut payload = varint::encode(body.len() as u64);
    payload.extend_from_slice(body);
    raw_field(field_id, WireType::Message, &payload)
}

/// Build a chain of `levels` nested messages, the innermost holding
/// `{1: 0}`. Every level uses field id 1.
pub fn nest_chain(levels: usize) -> Vec<u8> {
    let mut bytes = raw_field(1, WireType::UInt64, &varint::encode(0));
    for _ in 1..levels {
        bytes = wrap_nested(1, &bytes);
    }
    bytes
}

/// Build a well-formed message exactly `len` bytes long holding a single
/// binary field.
///
/// `len` must be at least 3.
pub fn sized_message(len: usize) -> Vec<u8> {
    assert!(len >= 3, "a binary field takes at least 3 bytes");
    // Field 16 has a two-byte prefix, which covers lengths where the
    // length varint grows by one byte.
    for field_id in [1u64, 16] {
        let prefix_len = varint::encoded_len((field_id << 3) | WireType::Binary.to_u8() as u64);
        for length_len in 1..=varint::MAX_BYTES {
            let Some(payload_len) = len.checked_sub(prefix_len + length_len) else {
                break;
            };
            if varint::encoded_len(payload_len as u64) == length_len {
                let mut payload = varint::encode(payload_len as u64);
                payload.resize(length_len + payload_len, 0xAA);
                return raw_field(field_id, WireType::Binary, &payload);
            }
        }
    }
    unreachable!("no single-field layout for {} bytes", len)
}

#[cfg(test)]
mod tests {
    use super::*;
    use veriform_core::{parse, Parser};

    #[test]
    fn test_nest_chain_matches_known_bytes() {
        assert_eq!(nest_chain(1), vec![0x11, 0x01]);
        assert_eq!(hex::encode(nest_chain(8)), "151d151915151511150d150915051101");
    }

    #[test]
    fn test_sized_message() {
        for len in [3, 10, 129, 130, 131, 1024, 1025] {
            let bytes = sized_message(len);
            assert_eq!(bytes.len(), len, "len {}", len);
            if len <= 1024 {
                assert!(parse(&bytes).is_ok());
            }
        }
    }

    #[test]
    fn test_recorder() {
        let mut parser = Parser::new(Recorder::new());
        parser.parse(&[0x15, 0x05, 0x11, 0x55, 0x27, 0x03, b'x']).unwrap();
        assert_eq!(
            parser.finish().unwrap(),
            vec![
                Event::BeginNested,
                Event::UInt64 { id: 1, value: 42 },
                Event::EndNested { id: 1 },
                Event::Binary {
                    id: 2,
                    bytes: b"x".to_vec()
                },
            ]
        );
    }
}
