//! Roman numeral → integer decoding with one-letter lookahead.

use serde::Deserialize;
use tracing::{debug, debug_span};

use crate::encode::encode_unsigned;
use crate::error::{Result, RomanError};
use crate::symbols::value_of;

/// How much structure `decode_with` demands of its input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecodeMode {
    /// Any sequence of the seven letters is summed; "IIII" and "VX" are accepted.
    #[default]
    Permissive,
    /// The input must be exactly what `encode` would produce for its value.
    Strict,
}

fn lookup(symbol: char, position: usize) -> Result<u64> {
    value_of(symbol)
        .map(u64::from)
        .ok_or(RomanError::UnknownSymbol { symbol, position })
}

/// Decode a Roman numeral permissively.
///
/// A letter followed by a larger one is read as a subtractive pair and both
/// are consumed together. No canonical-form checks are made; the only failure
/// is a character outside I V X L C D M, reported by its char index.
/// The empty string decodes to 0.
pub fn decode(numeral: &str) -> Result<u64> {
    let _span = debug_span!("decode", numeral).entered();

    let letters: Vec<char> = numeral.chars().collect();
    let mut total: u64 = 0;
    let mut index = 0;
    while index < letters.len() {
        let current = lookup(letters[index], index).inspect_err(|e| debug!("{e}"))?;
        let next = match letters.get(index + 1) {
            Some(&c) => lookup(c, index + 1).inspect_err(|e| debug!("{e}"))?,
            None => 0,
        };

        if next > current {
            total += next - current;
            index += 2;
        } else {
            total += current;
            index += 1;
        }
    }
    Ok(total)
}

/// Decode under the given mode.
///
/// Strict mode decodes permissively first, so unknown letters are still
/// reported as [`RomanError::UnknownSymbol`]. A value with no Roman form at
/// all (4000 and above) surfaces the encoder's [`RomanError::LookupFailure`].
pub fn decode_with(numeral: &str, mode: DecodeMode) -> Result<u64> {
    let value = decode(numeral)?;
    if mode == DecodeMode::Permissive {
        return Ok(value);
    }

    let canonical = encode_unsigned(value)?;
    if canonical != numeral {
        debug!(numeral, canonical = %canonical, "rejected non-canonical numeral");
        return Err(RomanError::NonCanonical {
            numeral: numeral.to_string(),
            canonical,
        });
    }
    Ok(value)
}

/// True if `numeral` decodes and re-encodes to itself.
pub fn is_canonical(numeral: &str) -> bool {
    decode_with(numeral, DecodeMode::Strict).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_simple() {
        assert_eq!(decode("I").unwrap(), 1);
        assert_eq!(decode("III").unwrap(), 3);
        assert_eq!(decode("IV").unwrap(), 4);
        assert_eq!(decode("IX").unwrap(), 9);
        assert_eq!(decode("XLII").unwrap(), 42);
    }

    #[test]
    fn test_decode_empty() {
        assert_eq!(decode("").unwrap(), 0);
    }

    #[test]
    fn test_decode_permissive_forms() {
        assert_eq!(decode("IIII").unwrap(), 4);
        assert_eq!(decode("VX").unwrap(), 5);
        assert_eq!(decode("IM").unwrap(), 999);
        assert_eq!(decode("MMMM").unwrap(), 4000);
        // Only one lookahead: "IIV" is 1 + (5 - 1).
        assert_eq!(decode("IIV").unwrap(), 5);
    }

    #[test]
    fn test_decode_unknown_symbol_position() {
        assert_eq!(
            decode("A"),
            Err(RomanError::UnknownSymbol {
                symbol: 'A',
                position: 0
            })
        );
        assert_eq!(
            decode("IV9"),
            Err(RomanError::UnknownSymbol {
                symbol: '9',
                position: 2
            })
        );
        assert_eq!(
            decode("CM<"),
            Err(RomanError::UnknownSymbol {
                symbol: '<',
                position: 2
            })
        );
        assert_eq!(
            decode("xiv"),
            Err(RomanError::UnknownSymbol {
                symbol: 'x',
                position: 0
            })
        );
    }

    #[test]
    fn test_decode_position_counts_chars() {
        assert_eq!(
            decode("XÅ"),
            Err(RomanError::UnknownSymbol {
                symbol: 'Å',
                position: 1
            })
        );
    }

    #[test]
    fn test_strict_accepts_canonical() {
        assert_eq!(decode_with("MCMXC", DecodeMode::Strict).unwrap(), 1990);
        assert_eq!(decode_with("", DecodeMode::Strict).unwrap(), 0);
        assert!(is_canonical("MMMCMXCIX"));
    }

    #[test]
    fn test_strict_rejects_non_canonical() {
        assert_eq!(
            decode_with("IIII", DecodeMode::Strict),
            Err(RomanError::NonCanonical {
                numeral: "IIII".to_string(),
                canonical: "IV".to_string(),
            })
        );
        assert!(!is_canonical("VX"));
        assert!(!is_canonical("IM"));
    }

    #[test]
    fn test_strict_out_of_range() {
        assert!(matches!(
            decode_with("MMMM", DecodeMode::Strict),
            Err(RomanError::LookupFailure { .. })
        ));
    }

    #[test]
    fn test_strict_unknown_symbol_wins() {
        assert!(matches!(
            decode_with("IIIIZ", DecodeMode::Strict),
            Err(RomanError::UnknownSymbol { symbol: 'Z', .. })
        ));
    }

    #[test]
    fn test_permissive_mode_matches_decode() {
        assert_eq!(decode_with("VX", DecodeMode::Permissive).unwrap(), 5);
    }
}
