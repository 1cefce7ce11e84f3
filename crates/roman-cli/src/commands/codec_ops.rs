use roman_core::settings::{check_max_value, SettingsError};
use roman_core::{decode_with, encode, DecodeMode, SYMBOLS};
use serde::Serialize;
use tracing::info;

use super::Outcome;

/// Encode each value. Inputs are kept as text so that non-numeric
/// arguments are reported per item instead of aborting the whole run.
pub fn encode_cmd(values: &[String]) -> Vec<Outcome> {
    values
        .iter()
        .map(|raw| match raw.trim().parse::<i64>() {
            Ok(v) => Outcome::from_result(raw, encode(v)),
            Err(e) => Outcome {
                input: raw.clone(),
                output: None,
                error: Some(format!("not an integer: {e}")),
            },
        })
        .collect()
}

pub fn decode_cmd(numerals: &[String], mode: DecodeMode) -> Vec<Outcome> {
    numerals
        .iter()
        .map(|n| Outcome::from_result(n, decode_with(n, mode)))
        .collect()
}

#[derive(Debug, Serialize)]
struct SymbolRow {
    letter: char,
    value: u32,
}

/// Render the symbol table, one `letter value` pair per line (or a JSON array).
pub fn table_cmd(json: bool) -> serde_json::Result<String> {
    if json {
        let rows: Vec<SymbolRow> = SYMBOLS
            .iter()
            .map(|s| SymbolRow {
                letter: s.letter,
                value: s.value,
            })
            .collect();
        serde_json::to_string(&rows)
    } else {
        Ok(SYMBOLS
            .iter()
            .map(|s| format!("{}\t{}", s.letter, s.value))
            .collect::<Vec<_>>()
            .join("\n"))
    }
}

/// Encode every value in `1..=max`.
pub fn range_cmd(max: u64) -> Result<Vec<Outcome>, SettingsError> {
    let max = check_max_value("--max", max)?;
    Ok((1..=max)
        .map(|value| Outcome::from_result(&value.to_string(), encode(value as i64)))
        .collect())
}

/// A value that failed to survive encode → decode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckFailure {
    pub value: u64,
    pub reason: String,
}

/// Round-trip every value in `0..=max` through the codec (strict decoding).
///
/// `max` must lie within the encodable range, the same bound the settings
/// file enforces for `encode.max_value`.
pub fn check_cmd(max: u64) -> Result<Vec<CheckFailure>, SettingsError> {
    let max = check_max_value("--max", max)?;
    let mut failures = Vec::new();
    for value in 0..=max {
        let result = encode(value as i64)
            .map_err(|e| e.to_string())
            .and_then(|numeral| {
                decode_with(&numeral, DecodeMode::Strict)
                    .map_err(|e| format!("{numeral}: {e}"))
            });
        match result {
            Ok(decoded) if decoded == value => {}
            Ok(decoded) => failures.push(CheckFailure {
                value,
                reason: format!("decoded back to {decoded}"),
            }),
            Err(reason) => failures.push(CheckFailure { value, reason }),
        }
    }
    info!(max, failures = failures.len(), "round-trip check finished");
    Ok(failures)
}
