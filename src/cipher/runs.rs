//! Run-length coding between binary digit strings and cipher text.
//!
//! Each maximal run of equal bits becomes one token: a prefix (`0` for
//! 1-bits, `00` for 0-bits), a space, and the run's length counted out in
//! `0` filler characters. Tokens are separated by single spaces and the
//! whole cipher text may carry one trailing space.

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{Error, Result};

/// One token: prefix, space, run of zeroes, optional separating space.
static TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(0|00) (0+) ?").expect("token pattern is valid"));

/// The full grammar, anchored: one or more tokens and nothing else.
static GRAMMAR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^((0|00) 0+ ?)+$").expect("grammar pattern is valid"));

/// Encode a binary digit string as cipher text.
///
/// Walks the digits one at a time carrying the previous digit: a digit equal
/// to the previous one extends the current token's filler by a single `0`,
/// a transition opens a new token. Empty input yields empty output.
///
/// # Examples
///
/// ```
/// use chuck_norris_cipher::cipher::runs::encode;
///
/// assert_eq!(encode("1000001"), "0 0 00 00000 0 0");
/// assert_eq!(encode("11"), "0 00");
/// ```
pub fn encode(digits: &str) -> String {
    let mut rest = digits.bytes();
    let first = match rest.next() {
        Some(digit) => digit,
        None => return String::new(),
    };
    let mut output = String::with_capacity(digits.len() * 2);
    output.push_str(if first == b'1' { "0 0" } else { "00 0" });
    let mut previous = first;
    for digit in rest {
        if digit != previous {
            output.push_str(if digit == b'1' { " 0 0" } else { " 00 0" });
        } else {
            output.push('0');
        }
        previous = digit;
    }
    output
}

/// Validate cipher text and recover the binary digit string.
///
/// The whole input must match `((0|00) 0+ ?)+`; anything else fails with
/// [`Error::MalformedCipher`] and produces no output. Each token contributes
/// its bit value (`0` prefix reads as `1`, `00` as `0`) repeated once per
/// filler character. Empty input decodes to an empty string.
///
/// # Examples
///
/// ```
/// use chuck_norris_cipher::cipher::runs::decode;
///
/// assert_eq!(decode("0 0 00 00000 0 0").unwrap(), "1000001");
/// assert!(decode("0 0a").is_err());
/// ```
pub fn decode(cipher: &str) -> Result<String> {
    if cipher.is_empty() {
        return Ok(String::new());
    }
    if !GRAMMAR.is_match(cipher) {
        debug!("cipher text rejected by grammar: {:?}", cipher);
        return Err(Error::MalformedCipher);
    }
    let mut digits = String::new();
    for token in TOKEN.captures_iter(cipher) {
        let bit = if token[1].len() == 1 { "1" } else { "0" };
        digits.push_str(&bit.repeat(token[2].len()));
    }
    Ok(digits)
}
