//! Integer → Roman numeral encoding, one decimal digit at a time.

use tracing::{debug, debug_span};

use crate::error::{Result, RomanError};
use crate::symbols::letter_for;

/// A decimal digit together with its positional power of ten.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionalDigit {
    pub digit: u8,
    pub power: u32,
}

/// Split `value` into digits, most significant first.
///
/// `power` counts down to 0 for the units digit. Zero yields a single
/// `(0, 0)` pair.
pub fn positional_digits(value: u64) -> impl Iterator<Item = PositionalDigit> {
    let rendered = value.to_string();
    let len = rendered.len();
    rendered
        .into_bytes()
        .into_iter()
        .enumerate()
        .map(move |(index, b)| PositionalDigit {
            digit: b - b'0',
            power: (len - index - 1) as u32,
        })
}

/// Look up the letter for `multiplier × 10^power`.
fn tier_letter(power: u32, multiplier: u64) -> Result<char> {
    10u64
        .checked_pow(power)
        .and_then(|p| p.checked_mul(multiplier))
        .and_then(letter_for)
        .ok_or(RomanError::LookupFailure { multiplier, power })
}

/// Encode `digit × 10^power` as a Roman substring.
///
/// Only the letters a digit actually needs are looked up, so `3` at power 3
/// gives `"MMM"` while `4` at power 3 fails looking for 5000.
pub fn encode_digit(digit: u8, power: u32) -> Result<String> {
    let current = || tier_letter(power, 1);
    let middle = || tier_letter(power, 5);
    let next = || tier_letter(power, 10);

    let encoded = match digit {
        0..=3 => current()?.to_string().repeat(usize::from(digit)),
        4 => [current()?, middle()?].iter().collect(),
        5 => middle()?.to_string(),
        6..=8 => {
            let mut s = middle()?.to_string();
            s.push_str(&current()?.to_string().repeat(usize::from(digit - 5)));
            s
        }
        9 => [current()?, next()?].iter().collect(),
        _ => return Err(RomanError::InvalidDigit { digit }),
    };
    Ok(encoded)
}

/// Encode a non-negative integer as a Roman numeral.
///
/// `encode(0)` is the empty string. Negative values fail with
/// [`RomanError::InvalidInput`]; values of 4000 and above fail with
/// [`RomanError::LookupFailure`] because the table stops at `M`.
pub fn encode(value: i64) -> Result<String> {
    let _span = debug_span!("encode", value).entered();

    let Ok(unsigned) = u64::try_from(value) else {
        debug!("rejected negative input");
        return Err(RomanError::InvalidInput { value });
    };
    encode_unsigned(unsigned)
}

/// Encode without the sign check; shared with strict decoding.
pub(crate) fn encode_unsigned(value: u64) -> Result<String> {
    let mut numeral = String::new();
    for PositionalDigit { digit, power } in positional_digits(value) {
        match encode_digit(digit, power) {
            Ok(part) => numeral.push_str(&part),
            Err(e) => {
                debug!(digit, power, "digit not encodable: {e}");
                return Err(e);
            }
        }
    }
    Ok(numeral)
}
