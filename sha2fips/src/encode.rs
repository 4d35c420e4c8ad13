use byteorder::{ByteOrder, BE};

use crate::consts::{DIGEST_LEN, STATE_LEN};

/// Writes the hash state as 32 bytes, each word big endian, in order H0..H7.
pub fn encode(state: &[u32; STATE_LEN]) -> [u8; DIGEST_LEN] {
    let mut out = [0u8; DIGEST_LEN];
    BE::write_u32_into(state, &mut out);
    out
}

/// Renders a digest as 64 lowercase hex characters.
pub fn to_hex(digest: &[u8; DIGEST_LEN]) -> String {
    hex::encode(digest)
}
