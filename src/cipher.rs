//! Chuck Norris cipher implementation.
//!
//! The cipher is the composition of two pure transformations sharing a flat
//! binary-digit string as their intermediate form:
//!
//! - [`bits`]: text to/from a fixed-width binary digit sequence
//! - [`runs`]: a binary digit sequence to/from run-length cipher text
//!
//! Encoding runs text through [`bits::to_binary`] then [`runs::encode`];
//! decoding validates and inverts with [`runs::decode`] then
//! [`bits::to_text`]. All state lives on the stack of a single call, so the
//! functions are safe to call from any number of threads.

use crate::error::Result;

pub mod bits;
pub mod runs;

pub use bits::BITS_PER_CHAR;

/// Encode text as Chuck Norris cipher text.
///
/// Every character must fit in a 7-bit code point; anything wider fails with
/// [`Error::CharacterOutOfRange`](crate::Error::CharacterOutOfRange). Empty
/// input encodes to an empty string.
///
/// # Examples
///
/// ```
/// use chuck_norris_cipher::encode_chuck_norris;
///
/// assert_eq!(encode_chuck_norris("A").unwrap(), "0 0 00 00000 0 0");
/// assert_eq!(encode_chuck_norris("").unwrap(), "");
/// ```
pub fn encode_chuck_norris(text: &str) -> Result<String> {
    Ok(runs::encode(&bits::to_binary(text)?))
}

/// Decode Chuck Norris cipher text back to the original text.
///
/// Fails with [`Error::MalformedCipher`](crate::Error::MalformedCipher) when
/// the input does not match the token grammar, or with
/// [`Error::InvalidLength`](crate::Error::InvalidLength) when the recovered
/// digit count is not a multiple of 7. Empty input decodes to an empty
/// string.
///
/// # Examples
///
/// ```
/// use chuck_norris_cipher::decode_chuck_norris;
///
/// assert_eq!(decode_chuck_norris("0 0 00 00000 0 0").unwrap(), "A");
/// assert!(decode_chuck_norris("0 0a").is_err());
/// ```
pub fn decode_chuck_norris(cipher: &str) -> Result<String> {
    bits::to_text(&runs::decode(cipher)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_golden_vector() {
        // 'A' = 65 = 1000001: runs 1 (len 1), 0 (len 5), 1 (len 1).
        assert_eq!(encode_chuck_norris("A").unwrap(), "0 0 00 00000 0 0");
        assert_eq!(decode_chuck_norris("0 0 00 00000 0 0").unwrap(), "A");
    }

    #[test]
    fn test_empty_round_trip() {
        assert_eq!(encode_chuck_norris("").unwrap(), "");
        assert_eq!(decode_chuck_norris("").unwrap(), "");
    }

    #[test]
    fn test_round_trip_ascii() {
        for input in ["CC", "Hello, World!", "chuck norris", "0 0", "  ", "\t\n"] {
            let encoded = encode_chuck_norris(input).unwrap();
            assert_eq!(decode_chuck_norris(&encoded).unwrap(), input, "input {:?}", input);
        }
    }

    #[test]
    fn test_round_trip_random() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let len = rng.gen_range(0..64);
            let input: String = (0..len)
                .map(|_| char::from(rng.gen_range(0u8..128)))
                .collect();
            let encoded = encode_chuck_norris(&input).unwrap();
            assert_eq!(decode_chuck_norris(&encoded).unwrap(), input);
        }
    }

    #[test]
    fn test_encode_rejects_wide_character() {
        assert_eq!(
            encode_chuck_norris("caf\u{e9}"),
            Err(Error::CharacterOutOfRange('\u{e9}'))
        );
    }

    #[test]
    fn test_decode_rejects_malformed() {
        assert_eq!(decode_chuck_norris("0 0a"), Err(Error::MalformedCipher));
    }

    #[test]
    fn test_decode_rejects_bad_length() {
        // A single zero run of length 1 decodes to one bit.
        assert_eq!(decode_chuck_norris("00 0"), Err(Error::InvalidLength { len: 1 }));
        // Grammar-valid, but the tokenizer only recovers two bits.
        assert_eq!(
            decode_chuck_norris("00 00 0"),
            Err(Error::InvalidLength { len: 2 })
        );
    }
}
