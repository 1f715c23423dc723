//! Fixed-width bit packing between text and binary digit strings.
//!
//! Every character maps to exactly [`BITS_PER_CHAR`] binary digits, most
//! significant bit first, zero-padded on the left. The digit string is the
//! shared intermediate form of the cipher and is never persisted.

use crate::error::{Error, Result};

/// Bits rendered per character. 7 bits cover the ASCII range.
pub const BITS_PER_CHAR: usize = 7;

/// Render `text` as a flat string of binary digits, [`BITS_PER_CHAR`] per
/// character, in character order.
///
/// Any character whose code point does not fit in [`BITS_PER_CHAR`] bits
/// fails with [`Error::CharacterOutOfRange`]; emitting an over-length field
/// would silently corrupt the cipher. Empty text yields an empty string.
///
/// # Examples
///
/// ```
/// use chuck_norris_cipher::cipher::bits::to_binary;
///
/// assert_eq!(to_binary("A").unwrap(), "1000001");
/// assert_eq!(to_binary("").unwrap(), "");
/// ```
pub fn to_binary(text: &str) -> Result<String> {
    let mut digits = String::with_capacity(text.len() * BITS_PER_CHAR);
    for ch in text.chars() {
        let code = ch as u32;
        if code >= 1 << BITS_PER_CHAR {
            return Err(Error::CharacterOutOfRange(ch));
        }
        for shift in (0..BITS_PER_CHAR).rev() {
            digits.push(if code >> shift & 1 == 1 { '1' } else { '0' });
        }
    }
    Ok(digits)
}

/// Parse a flat string of binary digits back into text.
///
/// The digit count must be a multiple of [`BITS_PER_CHAR`], else the call
/// fails with [`Error::InvalidLength`]. Each group of [`BITS_PER_CHAR`]
/// digits is read as an unsigned integer, most significant bit first, and
/// mapped to the character with that code point. A byte other than `'0'` or
/// `'1'` fails with [`Error::MalformedCipher`].
///
/// # Examples
///
/// ```
/// use chuck_norris_cipher::cipher::bits::to_text;
///
/// assert_eq!(to_text("1000001").unwrap(), "A");
/// assert!(to_text("100000").is_err());
/// ```
pub fn to_text(digits: &str) -> Result<String> {
    if digits.len() % BITS_PER_CHAR != 0 {
        return Err(Error::InvalidLength { len: digits.len() });
    }
    let mut text = String::with_capacity(digits.len() / BITS_PER_CHAR);
    for group in digits.as_bytes().chunks(BITS_PER_CHAR) {
        let mut code = 0u8;
        for &digit in group {
            code = (code << 1)
                | match digit {
                    b'0' => 0,
                    b'1' => 1,
                    _ => return Err(Error::MalformedCipher),
                };
        }
        // 7 digits parse to at most 127, always a valid char.
        text.push(char::from(code));
    }
    Ok(text)
}
