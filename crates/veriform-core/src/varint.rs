//! Little-endian 64-bit unsigned prefix varints.
//!
//! The length of an encoded integer is stored in unary in the low bits of the
//! first byte: the number of trailing zeros plus one is the total length.
//!
//! | Prefix     | Precision | Total Bytes |
//! |------------|-----------|-------------|
//! | `xxxxxxx1` | 7 bits    | 1 byte      |
//! | `xxxxxx10` | 14 bits   | 2 bytes     |
//! | `xxxxx100` | 21 bits   | 3 bytes     |
//! | `xxxx1000` | 28 bits   | 4 bytes     |
//! | `xxx10000` | 35 bits   | 5 bytes     |
//! | `xx100000` | 42 bits   | 6 bytes     |
//! | `x1000000` | 49 bits   | 7 bytes     |
//! | `10000000` | 56 bits   | 8 bytes     |
//! | `00000000` | 64 bits   | 9 bytes     |
//!
//! A first byte of `0x00` is an escape: the next 8 bytes hold the value as a
//! raw little-endian `u64`. The normal path never emits `0x00` because bit 0
//! of its first byte is always the terminating bit of the unary prefix.
//!
//! Decoding is strict: an encoding longer than the minimal one for its value
//! is rejected as [`Error::MalformedVarint`].

use crate::error::{Error, Result};

/// Maximum length of an encoded varint in bytes.
pub const MAX_BYTES: usize = 9;

/// Smallest value that needs the 9-byte escape form.
const ESCAPE_THRESHOLD: u64 = 1 << 56;

/// Number of trailing zeros for every byte value (`0x00` maps to 8).
const CTZ_TABLE: [u8; 256] = build_ctz_table();

const fn build_ctz_table() -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut i = 0;
    while i < 256 {
        table[i] = (i as u8).trailing_zeros() as u8;
        i += 1;
    }
    table
}

/// Encode a `u64` as a prefix varint.
pub fn encode(value: u64) -> Vec<u8> {
    let mut buf = Vec::with_capacity(MAX_BYTES);
    encode_into(value, &mut buf);
    buf
}

/// Append the prefix varint encoding of `value` to `buf`.
///
/// Returns the number of bytes written.
pub fn encode_into(value: u64, buf: &mut Vec<u8>) -> usize {
    let mut length = 1;
    let mut result = (value << 1) | 1;
    let mut max = 1u64 << 7;

    while value >= max {
        if length == 8 {
            buf.push(0);
            buf.extend_from_slice(&value.to_le_bytes());
            return MAX_BYTES;
        }

        result <<= 1;
        max <<= 7;
        length += 1;
    }

    buf.extend_from_slice(&result.to_le_bytes()[..length]);
    length
}

/// Decode a prefix varint, returning the value and the bytes that follow it.
pub fn decode(input: &[u8]) -> Result<(u64, &[u8])> {
    let prefix = *input
        .first()
        .ok_or(Error::Truncated("missing varint prefix"))?;

    let length = decoded_len(prefix);
    if input.len() < length {
        return Err(Error::Truncated("not enough bytes to decode varint"));
    }

    let mut raw = [0u8; 8];
    let value = if prefix == 0 {
        raw.copy_from_slice(&input[1..MAX_BYTES]);
        let value = u64::from_le_bytes(raw);
        if value < ESCAPE_THRESHOLD {
            return Err(Error::MalformedVarint { len: MAX_BYTES });
        }
        value
    } else {
        raw[..length].copy_from_slice(&input[..length]);
        let value = u64::from_le_bytes(raw) >> length;
        if length > 1 && value < (1u64 << (7 * (length - 1))) {
            return Err(Error::MalformedVarint { len: length });
        }
        value
    };

    Ok((value, &input[length..]))
}

/// Decode a prefix varint from the front of `input`, advancing it past the
/// consumed bytes.
///
/// On error `input` is left untouched.
pub fn decode_from(input: &mut &[u8]) -> Result<u64> {
    let (value, rest) = decode(input)?;
    *input = rest;
    Ok(value)
}

/// Total encoded length (including the first byte) signalled by `prefix`.
pub const fn decoded_len(prefix: u8) -> usize {
    if prefix == 0 {
        MAX_BYTES
    } else {
        CTZ_TABLE[prefix as usize] as usize + 1
    }
}

/// Length in bytes of the encoding of `value`.
pub const fn encoded_len(value: u64) -> usize {
    if value >= ESCAPE_THRESHOLD {
        return MAX_BYTES;
    }

    let bits = 64 - value.leading_zeros() as usize;
    if bits == 0 {
        1
    } else {
        (bits + 6) / 7
    }
}
