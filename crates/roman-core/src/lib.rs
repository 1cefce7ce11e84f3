//! Roman numeral codec.
//!
//! [`encode`] turns a non-negative integer into its numeral, digit by digit;
//! [`decode`] reads a numeral back with one-letter lookahead for subtractive
//! pairs. Both are pure and share the read-only table in [`symbols`].

pub mod decode;
pub mod encode;
pub mod error;
pub mod settings;
pub mod symbols;


pub use decode::{decode, decode_with, is_canonical, DecodeMode};
pub use encode::{encode, encode_digit, positional_digits, PositionalDigit};
pub use error::{Result, RomanError};
pub use symbols::{letter_for, value_of, Symbol, SYMBOLS};
