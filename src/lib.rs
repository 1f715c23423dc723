//! The Chuck Norris cipher: any text, written with only zeroes.
//!
//! Each character is rendered as 7 binary digits, and the resulting digit
//! sequence is emitted as runs: a `0` prefix marks a run of 1-bits, a `00`
//! prefix marks a run of 0-bits, and the run's length is counted out in
//! `0` filler characters.
//!
//! ```
//! use chuck_norris_cipher::{decode_chuck_norris, encode_chuck_norris};
//!
//! let encoded = encode_chuck_norris("A").unwrap();
//! assert_eq!(encoded, "0 0 00 00000 0 0");
//! assert_eq!(decode_chuck_norris(&encoded).unwrap(), "A");
//! ```

pub mod cipher;
pub mod error;

pub use cipher::{decode_chuck_norris, encode_chuck_norris, BITS_PER_CHAR};
pub use error::{Error, Result};
