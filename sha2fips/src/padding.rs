use std::convert::TryFrom;

use crate::consts::{BLOCK_LEN, LENGTH_FIELD_LEN};
use crate::error::{Error, Result};

/// End-of-message marker: a single 1 bit followed by zeros.
pub const MARKER: u8 = 0b1000_0000;

/// Length of a message of `len` bytes in bits, as stored in the length field.
pub fn bit_length(len: usize) -> Result<u64> {
    u64::try_from(len)
        .ok()
        .and_then(|n| n.checked_mul(8))
        .ok_or(Error::LengthOverflow(len))
}

/// Smallest multiple of [`BLOCK_LEN`] that holds `len` message bytes, the marker and the
/// length field.
pub fn padded_len(len: usize) -> Result<usize> {
    len.checked_add(LENGTH_FIELD_LEN)
        .map(|n| n / BLOCK_LEN + 1)
        .and_then(|blocks| blocks.checked_mul(BLOCK_LEN))
        .ok_or(Error::LengthOverflow(len))
}

/// Pads `message` to a whole number of blocks.
///
/// The output is the message, the marker byte, zero fill, and the original length in bits
/// as a 64-bit big endian integer occupying the last 8 bytes.
pub fn pad(message: &[u8]) -> Result<Vec<u8>> {
    let bits = bit_length(message.len())?;
    let total = padded_len(message.len())?;

    let mut padded = Vec::with_capacity(total);
    padded.extend_from_slice(message);
    padded.push(MARKER);
    padded.resize(total - LENGTH_FIELD_LEN, 0);

    // Write L as 64 big endian integer
    padded.extend_from_slice(&bits.to_be_bytes());

    debug_assert_eq!(padded.len() % BLOCK_LEN, 0);
    Ok(padded)
}
