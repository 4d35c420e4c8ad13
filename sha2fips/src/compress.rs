use crate::consts::{BLOCK_LEN, K32, SCHEDULE_LEN, STATE_LEN};
use crate::schedule::schedule;

#[inline(always)]
pub fn ch(x: u32, y: u32, z: u32) -> u32 {
    (x & y) ^ (!x & z)
}

#[inline(always)]
pub fn maj(x: u32, y: u32, z: u32) -> u32 {
    (x & y) ^ (x & z) ^ (y & z)
}

#[inline(always)]
pub fn big_sigma0(x: u32) -> u32 {
    x.rotate_right(2) ^ x.rotate_right(13) ^ x.rotate_right(22)
}

#[inline(always)]
pub fn big_sigma1(x: u32) -> u32 {
    x.rotate_right(6) ^ x.rotate_right(11) ^ x.rotate_right(25)
}

/// Runs the 64 compression rounds over `w` and adds the result into `state`.
///
/// Control flow only depends on the fixed round count, never on the data.
pub fn compress256(state: &mut [u32; STATE_LEN], w: &[u32; SCHEDULE_LEN]) {
    let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = *state;

    for (k, w) in K32.iter().zip(w.iter()) {
        let t1 = h
            .wrapping_add(big_sigma1(e))
            .wrapping_add(ch(e, f, g))
            .wrapping_add(*k)
            .wrapping_add(*w);
        let t2 = big_sigma0(a).wrapping_add(maj(a, b, c));

        h = g;
        g = f;
        f = e;
        e = d.wrapping_add(t1);
        d = c;
        c = b;
        b = a;
        a = t1.wrapping_add(t2);
    }

    for (s, v) in state.iter_mut().zip([a, b, c, d, e, f, g, h].iter()) {
        *s = s.wrapping_add(*v);
    }
}

/// Compresses every block of an already padded message into `state`, in order.
///
/// # Panics
///
/// Panics if `padded` is not a whole number of [`BLOCK_LEN`] blocks.
pub fn compress_blocks(state: &mut [u32; STATE_LEN], padded: &[u8]) {
    assert_eq!(padded.len() % BLOCK_LEN, 0, "message is not padded");

    for block in padded.chunks_exact(BLOCK_LEN) {
        compress256(state, &schedule(block));
    }
}
