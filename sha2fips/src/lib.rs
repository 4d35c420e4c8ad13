//! A portable, one-shot implementation of the [SHA-256][1] cryptographic hash function.
//!
//! The message is padded, split into 64-byte blocks, each block is expanded into a
//! 64-word message schedule and compressed into the running hash state. The final
//! state, written big endian, is the digest.
//!
//! ```
//! let hex = sha2fips::digest_hex("abc").unwrap();
//! assert_eq!(hex, "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad");
//! ```
//!
//! [1]: https://nvlpubs.nist.gov/nistpubs/FIPS/NIST.FIPS.180-4.pdf

#![deny(clippy::all, clippy::perf, clippy::correctness, rust_2018_idioms)]
#![allow(clippy::unreadable_literal)]
#![allow(clippy::many_single_char_names)]

pub mod compress;
pub mod consts;
pub mod encode;
pub mod error;
pub mod padding;
pub mod schedule;
mod sha256;

pub use compress::compress256;
pub use consts::{BLOCK_LEN, DIGEST_LEN};
pub use encode::{encode, to_hex};
pub use error::{Error, Result};
pub use padding::pad;
pub use schedule::schedule;
pub use sha256::{digest, digest_bytes_hex, digest_hex, Sha256};

#[cfg(test)]
pub(crate) const TEST_SEED: [u8; 16] = [
    0x59, 0x62, 0xbe, 0x5d, 0x76, 0x3d, 0x31, 0x8d, 0x17, 0xdb, 0x37, 0x32, 0x54, 0x06, 0xbc, 0xe5,
];
