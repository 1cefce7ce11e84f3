//! Error type shared by the encoder and decoder.

use thiserror::Error;

/// Every way an encode or decode call can fail.
///
/// All variants describe a problem with the caller's input; nothing here is
/// transient, so callers should never retry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RomanError {
    /// `encode` was called with a negative integer.
    #[error("invalid input: {value} is negative")]
    InvalidInput { value: i64 },

    /// The digit encoder was given something other than a decimal digit.
    #[error("invalid digit {digit}: expected 0-9")]
    InvalidDigit { digit: u8 },

    /// A digit needs a symbol for `multiplier × 10^power` that the table lacks.
    /// This is how values of 4000 and above are rejected.
    #[error("no symbol for {multiplier} × 10^{power}; value is out of range")]
    LookupFailure { multiplier: u64, power: u32 },

    /// `decode` met a character outside I V X L C D M.
    #[error("unknown symbol {symbol:?} at position {position}")]
    UnknownSymbol { symbol: char, position: usize },

    /// Strict decoding rejected a numeral that is not in canonical form.
    #[error("non-canonical numeral {numeral:?} (canonical form is {canonical:?})")]
    NonCanonical { numeral: String, canonical: String },
}

/// A convenience `Result` alias using [`RomanError`].
pub type Result<T> = std::result::Result<T, RomanError>;
