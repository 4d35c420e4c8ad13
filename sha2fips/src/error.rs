pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while hashing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("message of {0} bytes exceeds the 64-bit length field")]
    LengthOverflow(usize),
}
