//! Bounded push parser for encoded messages.
//!
//! The parser walks a byte buffer and reports what it finds to a
//! [`Handler`]. It never builds a tree itself, so the same parser drives the
//! tree-building [`Decoder`](crate::decoder::Decoder) as well as validators or
//! streaming consumers.
//!
//! Nested messages are parsed by recursion, one call frame per level. The
//! depth limit is checked before a level is entered, so hostile input cannot
//! grow the stack past `max_depth` frames.

use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::field::{FieldPrefix, WireType};
use crate::limits::Limits;
use crate::varint;

/// Receives parse events.
///
/// Every callback may reject the event, which aborts the parse.
pub trait Handler {
    /// What the handler produces once parsing is complete.
    type Output;

    /// An unsigned integer field was parsed.
    fn uint64(&mut self, id: u64, value: u64) -> Result<()>;

    /// A binary field was parsed.
    fn binary(&mut self, id: u64, bytes: &[u8]) -> Result<()>;

    /// A nested message is about to be parsed.
    fn begin_nested(&mut self) -> Result<()>;

    /// The nested message most recently begun is complete and belongs to
    /// field `id` of its parent.
    fn end_nested(&mut self, id: u64) -> Result<()>;

    /// Parsing is complete.
    fn finish(self) -> Result<Self::Output>;
}

/// Push parser driving a [`Handler`].
///
/// A parser holds the state of one in-flight parse. After any error the
/// handler may be partially mutated and must be discarded; [`Parser::finish`]
/// refuses to run on a parser whose last parse failed.
#[derive(Debug)]
pub struct Parser<H: Handler> {
    handler: H,
    limits: Limits,
    /// Number of message levels currently open.
    depth: usize,
    /// Set once any parse has failed.
    failed: bool,
}

impl<H: Handler> Parser<H> {
    /// Create a parser with the default limits.
    pub fn new(handler: H) -> Self {
        Self::with_limits(handler, Limits::default())
    }

    /// Create a parser with the given limits.
    pub fn with_limits(handler: H, limits: Limits) -> Self {
        Self {
            handler,
            limits,
            depth: 0,
            failed: false,
        }
    }

    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    /// Number of message levels currently open.
    ///
    /// Zero between successful parses.
    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn handler(&self) -> &H {
        &self.handler
    }

    /// Take back the handler without finishing it.
    pub fn into_handler(self) -> H {
        self.handler
    }

    /// Parse one encoded message, invoking handler callbacks as fields are
    /// found.
    ///
    /// Fails with [`Error::InvalidState`] once any earlier parse has failed.
    pub fn parse(&mut self, message: &[u8]) -> Result<()> {
        if self.failed {
            return Err(Error::InvalidState("parser failed earlier"));
        }
        let result = self.parse_level(message);
        if result.is_err() {
            self.failed = true;
        }
        result
    }

    fn parse_level(&mut self, message: &[u8]) -> Result<()> {
        if message.len() > self.limits.max_length {
            debug!(
                len = message.len(),
                max = self.limits.max_length,
                "rejecting oversized message"
            );
            return Err(Error::OversizeMessage {
                len: message.len(),
                max: self.limits.max_length,
            });
        }

        if self.depth >= self.limits.max_depth {
            debug!(max = self.limits.max_depth, "rejecting nested message: depth exceeded");
            return Err(Error::DepthExceeded {
                max: self.limits.max_depth,
            });
        }

        // Not unwound on error.
        self.depth += 1;

        let mut remaining = message;
        while !remaining.is_empty() {
            let prefix = FieldPrefix::decode_from(&mut remaining)?;
            trace!(
                depth = self.depth,
                field_id = prefix.field_id,
                wire_type = %prefix.wire_type,
                "field"
            );

            match prefix.wire_type {
                WireType::UInt64 => {
                    let value = varint::decode_from(&mut remaining)?;
                    self.handler.uint64(prefix.field_id, value)?;
                }
                WireType::Message => {
                    let nested = take_length_prefixed(&mut remaining)?;
                    self.handler.begin_nested()?;
                    self.parse_level(nested)?;
                    self.handler.end_nested(prefix.field_id)?;
                }
                WireType::Binary => {
                    let data = take_length_prefixed(&mut remaining)?;
                    self.handler.binary(prefix.field_id, data)?;
                }
            }
        }

        self.depth -= 1;
        Ok(())
    }

    /// Finish parsing, returning what the handler produced.
    ///
    /// Fails with [`Error::InvalidState`] after any failed parse.
    pub fn finish(self) -> Result<H::Output> {
        if self.failed || self.depth != 0 {
            return Err(Error::InvalidState("not finished parsing"));
        }
        self.handler.finish()
    }
}

/// Split a length-prefixed payload off the front of `input`.
fn take_length_prefixed<'a>(input: &mut &'a [u8]) -> Result<&'a [u8]> {
    let mut rest = *input;
    let length = varint::decode_from(&mut rest)?;
    let length = usize::try_from(length).map_err(|_| Error::LengthOverflow(length))?;

    if rest.len() < length {
        debug!(want = length, have = rest.len(), "length prefix overruns buffer");
        return Err(Error::Truncated("not enough bytes remaining in input"));
    }

    let (data, rest) = rest.split_at(length);
    *input = rest;
    Ok(data)
}
