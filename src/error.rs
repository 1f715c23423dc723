use thiserror::Error;

/// Errors surfaced by the cipher operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The decode input does not match the token grammar `((0|00) 0+ ?)+`
    /// anchored on the whole string.
    #[error("string must be in the Chuck Norris format: \"((0|00) 0+)+\"")]
    MalformedCipher,

    /// The recovered binary digit count is not a multiple of the bit width.
    #[error("binary representation must contain a multiple of 7 digits, got {len}")]
    InvalidLength {
        /// Number of binary digits actually recovered.
        len: usize,
    },

    /// An encode input character whose code point does not fit in 7 bits.
    #[error("character {0:?} does not fit in a 7-bit code point")]
    CharacterOutOfRange(char),
}

/// Result type for cipher operations.
pub type Result<T> = std::result::Result<T, Error>;
