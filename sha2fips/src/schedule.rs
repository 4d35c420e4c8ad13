use byteorder::{ByteOrder, BE};

use crate::consts::{BLOCK_LEN, SCHEDULE_LEN};

/// Number of schedule words read directly from the block.
const BLOCK_WORDS: usize = BLOCK_LEN / 4;

#[inline(always)]
pub fn small_sigma0(x: u32) -> u32 {
    x.rotate_right(7) ^ x.rotate_right(18) ^ (x >> 3)
}

#[inline(always)]
pub fn small_sigma1(x: u32) -> u32 {
    x.rotate_right(17) ^ x.rotate_right(19) ^ (x >> 10)
}

/// Expands one 64-byte block into the 64-word message schedule.
///
/// Words 0..16 are the block read as big endian `u32`s, the rest follow the
/// recurrence `W[t] = σ1(W[t-2]) + W[t-7] + σ0(W[t-15]) + W[t-16]` modulo 2^32.
///
/// # Panics
///
/// Panics if `block` is not exactly [`BLOCK_LEN`] bytes long.
pub fn schedule(block: &[u8]) -> [u32; SCHEDULE_LEN] {
    assert_eq!(block.len(), BLOCK_LEN, "invalid block length");

    let mut w = [0u32; SCHEDULE_LEN];
    BE::read_u32_into(block, &mut w[..BLOCK_WORDS]);

    for t in BLOCK_WORDS..SCHEDULE_LEN {
        w[t] = small_sigma1(w[t - 2])
            .wrapping_add(w[t - 7])
            .wrapping_add(small_sigma0(w[t - 15]))
            .wrapping_add(w[t - 16]);
    }

    w
}
