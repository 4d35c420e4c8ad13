use log::trace;

use crate::compress::compress_blocks;
use crate::consts::{BLOCK_LEN, DIGEST_LEN, H256, STATE_LEN};
use crate::encode::{encode, to_hex};
use crate::error;
use crate::padding::pad;

/// One-shot SHA-256 hasher.
///
/// The hash state lives only for the duration of a single [`Sha256::digest`] call, so
/// concurrent callers never share anything.
pub struct Sha256 {
    state: [u32; STATE_LEN],
}

impl Default for Sha256 {
    fn default() -> Self {
        Sha256 { state: H256 }
    }
}

impl Sha256 {
    pub fn new() -> Self {
        Sha256::default()
    }

    /// Hashes a fully buffered message.
    pub fn digest(message: &[u8]) -> error::Result<[u8; DIGEST_LEN]> {
        let padded = pad(message)?;
        trace!(
            "sha256: {} bytes in {} blocks",
            message.len(),
            padded.len() / BLOCK_LEN
        );

        let mut sha = Sha256::new();
        sha.input_padded(&padded);
        Ok(sha.finish())
    }

    fn input_padded(&mut self, padded: &[u8]) {
        compress_blocks(&mut self.state, padded);
    }

    fn finish(self) -> [u8; DIGEST_LEN] {
        encode(&self.state)
    }
}

opaque_debug::implement!(Sha256);

/// SHA-256 digest of `message`.
pub fn digest(message: &[u8]) -> error::Result<[u8; DIGEST_LEN]> {
    Sha256::digest(message)
}

/// SHA-256 digest of `message` as 64 lowercase hex characters.
pub fn digest_bytes_hex(message: &[u8]) -> error::Result<String> {
    digest(message).map(|d| to_hex(&d))
}

/// SHA-256 digest of the UTF-8 encoding of `input` as 64 lowercase hex characters.
pub fn digest_hex(input: &str) -> error::Result<String> {
    digest_bytes_hex(input.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rand::{Rng, RngCore, SeedableRng};
    use rand_xorshift::XorShiftRng;
    use sha2::{Digest, Sha256 as Original};

    use crate::TEST_SEED;

    #[test]
    fn test_matching_original() {
        for k in 0..10 {
            for i in 0..255u8 {
                let input = vec![i; 32 * k + usize::from(i % 64)];
                assert_eq!(&digest(&input).unwrap()[..], &Original::digest(&input)[..]);
            }
        }
    }

    #[test]
    fn test_matching_original_random() {
        let rng = &mut XorShiftRng::from_seed(TEST_SEED);

        for _ in 0..200 {
            let len = rng.gen_range(0..1024);
            let mut input = vec![0u8; len];
            rng.fill_bytes(&mut input);

            assert_eq!(
                digest_bytes_hex(&input).unwrap(),
                hex::encode(Original::digest(&input))
            );
        }
    }

    #[test]
    fn test_deterministic() {
        let rng = &mut XorShiftRng::from_seed(TEST_SEED);
        let mut input = vec![0u8; 777];
        rng.fill_bytes(&mut input);

        assert_eq!(digest(&input).unwrap(), digest(&input).unwrap());
    }

    #[test]
    fn test_fixed_size_output() {
        for len in [0, 1, 55, 56, 64, 1000].iter() {
            let input = vec![0x5a; *len];
            assert_eq!(digest(&input).unwrap().len(), DIGEST_LEN);
            assert_eq!(digest_bytes_hex(&input).unwrap().len(), 2 * DIGEST_LEN);
        }
    }

    #[test]
    fn test_hex_uses_utf8() {
        let text = "héllo wörld";
        assert_eq!(
            digest_hex(text).unwrap(),
            "a1003f7d04a4115711d0b48a2eaf1359ce565d2d2a6fd65098dfcffadeeef59f"
        );
        assert_eq!(digest_hex(text).unwrap(), digest_bytes_hex(text.as_bytes()).unwrap());
    }

    #[test]
    fn test_avalanche() {
        let rng = &mut XorShiftRng::from_seed(TEST_SEED);
        let samples = 256;
        let mut flipped_bits = 0u32;

        for _ in 0..samples {
            let mut input = vec![0u8; rng.gen_range(1..200)];
            rng.fill_bytes(&mut input);
            let before = digest(&input).unwrap();

            let bit = rng.gen_range(0..input.len() * 8);
            input[bit / 8] ^= 1 << (bit % 8);
            let after = digest(&input).unwrap();

            flipped_bits += before
                .iter()
                .zip(after.iter())
                .map(|(x, y)| (x ^ y).count_ones())
                .sum::<u32>();
        }

        // About half of the 256 output bits change on average.
        let mean = f64::from(flipped_bits) / f64::from(samples);
        assert!(mean > 120.0 && mean < 136.0, "mean flipped bits {}", mean);
    }

    #[test]
    fn test_debug_is_opaque() {
        assert_eq!(format!("{:?}", Sha256::new()), "Sha256 { ... }");
        assert_eq!(format!("{:?}", Sha256::default()), "Sha256 { ... }");
    }

    #[test]
    fn test_fresh_hasher_starts_from_initial_value() {
        assert_eq!(Sha256::new().state, H256);
        assert_eq!(Sha256::new().finish(), encode(&H256));
    }
}
