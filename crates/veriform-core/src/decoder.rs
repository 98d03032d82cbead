//! Decoder: the [`Handler`] that builds a [`Message`] tree.

use bytes::Bytes;

use crate::error::{Error, Result};
use crate::limits::Limits;
use crate::message::Message;
use crate::parser::{Handler, Parser};

/// Builds a [`Message`] from parse events.
///
/// Keeps a stack of messages under construction: the root at the bottom and
/// one entry per open nested message above it.
#[derive(Debug)]
pub struct Decoder {
    stack: Vec<Message>,
}

impl Decoder {
    /// Create a decoder holding an empty root message.
    pub fn new() -> Self {
        Self {
            stack: vec![Message::new()],
        }
    }

    /// Number of messages under construction, including the root.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    fn top(&mut self) -> Result<&mut Message> {
        self.stack
            .last_mut()
            .ok_or(Error::InvalidState("decoder stack is empty"))
    }
}

impl Default for Decoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Handler for Decoder {
    type Output = Message;

    fn uint64(&mut self, id: u64, value: u64) -> Result<()> {
        self.top()?.insert(id, value)
    }

    fn binary(&mut self, id: u64, bytes: &[u8]) -> Result<()> {
        self.top()?.insert(id, Bytes::copy_from_slice(bytes))
    }

    fn begin_nested(&mut self) -> Result<()> {
        self.stack.push(Message::new());
        Ok(())
    }

    fn end_nested(&mut self, id: u64) -> Result<()> {
        if self.stack.len() < 2 {
            return Err(Error::InvalidState("not inside a nested message"));
        }
        let nested = self
            .stack
            .pop()
            .ok_or(Error::InvalidState("decoder stack is empty"))?;
        self.top()?.insert(id, nested)
    }

    fn finish(mut self) -> Result<Message> {
        let root = self
            .stack
            .pop()
            .ok_or(Error::InvalidState("decoder stack is empty"))?;
        if !self.stack.is_empty() {
            return Err(Error::InvalidState("nested messages left unfinished"));
        }
        Ok(root)
    }
}

/// Parse an encoded message with the default limits.
pub fn parse(bytes: &[u8]) -> Result<Message> {
    parse_with_limits(bytes, Limits::default())
}

/// Parse an encoded message with the given limits.
pub fn parse_with_limits(bytes: &[u8], limits: Limits) -> Result<Message> {
    let mut parser = Parser::with_limits(Decoder::new(), limits);
    parser.parse(bytes)?;
    parser.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_single_uint64() {
        let message = parse(&[0x11, 0x55]).unwrap();
        assert_eq!(message.len(), 1);
        assert_eq!(message.get_uint64(1).unwrap(), 42);
    }

    #[test]
    fn test_decode_nested() {
        // {1: {1: 42}, 2: b"hi"}
        let bytes = [0x15, 0x05, 0x11, 0x55, 0x27, 0x05, b'h', b'i'];
        let message = parse(&bytes).unwrap();

        let inner = message.get_message(1).unwrap();
        assert_eq!(inner.get_uint64(1).unwrap(), 42);
        assert_eq!(message.get_binary(2).unwrap(), b"hi");
    }

    #[test]
    fn test_duplicate_field_in_same_level() {
        // {1: 42, 1: 42}
        assert_eq!(
            parse(&[0x11, 0x55, 0x11, 0x55]),
            Err(Error::DuplicateField(1))
        );
        // uint64 and binary sharing id 1
        assert_eq!(
            parse(&[0x11, 0x55, 0x17, 0x01]),
            Err(Error::DuplicateField(1))
        );
    }

    #[test]
    fn test_same_id_at_different_levels_allowed() {
        // {1: {1: 42}}
        let message = parse(&[0x15, 0x05, 0x11, 0x55]).unwrap();
        assert_eq!(
            message.get_message(1).unwrap().get_uint64(1).unwrap(),
            42
        );
    }

    #[test]
    fn test_unbalanced_events() {
        let mut decoder = Decoder::new();
        assert_eq!(
            decoder.end_nested(1),
            Err(Error::InvalidState("not inside a nested message"))
        );

        let mut decoder = Decoder::new();
        decoder.begin_nested().unwrap();
        assert_eq!(
            decoder.finish(),
            Err(Error::InvalidState("nested messages left unfinished"))
        );
    }

    #[test]
    fn test_direct_handler_calls() {
        let mut decoder = Decoder::new();
        decoder.uint64(2, 7).unwrap();
        decoder.begin_nested().unwrap();
        assert_eq!(decoder.depth(), 2);
        decoder.binary(1, b"inner").unwrap();
        decoder.end_nested(1).unwrap();
        assert_eq!(decoder.depth(), 1);

        let message = decoder.finish().unwrap();
        assert_eq!(message.get_uint64(2).unwrap(), 7);
        assert_eq!(
            message.get_message(1).unwrap().get_binary(1).unwrap(),
            b"inner"
        );
    }

    #[test]
    fn test_failed_parse_yields_nothing() {
        let mut parser = Parser::new(Decoder::new());
        // {1: 42, 2: <truncated binary>}
        assert!(parser.parse(&[0x11, 0x55, 0x27, 0x09]).is_err());
        assert!(parser.finish().is_err());
    }
}
