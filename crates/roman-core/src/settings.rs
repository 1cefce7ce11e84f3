//! Codec settings: the default decode mode and the upper bound used by the
//! `romantool` range and check commands.
//!
//! The embedded `default_settings.toml` applies unless `init_custom` installs
//! another document before the first `settings()` call. Both paths go through
//! `parse_settings_toml`, so a custom file is validated the same way.

use std::sync::OnceLock;

use serde::Deserialize;

use crate::decode::DecodeMode;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

/// Largest value the classical symbol table can encode.
pub const MAX_ENCODABLE: u64 = 3999;

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Set custom TOML before first `settings()` call.
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    parse_settings_toml(&toml_content)?;
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

/// Get or initialize the global settings singleton.
pub fn settings() -> &'static Settings {
    static INSTANCE: OnceLock<Settings> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        let toml_str = CUSTOM_TOML
            .get()
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_SETTINGS_TOML);
        parse_settings_toml(toml_str).expect("settings TOML must be valid")
    })
}

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("settings already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub decode: DecodeSettings,
    pub encode: EncodeSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DecodeSettings {
    #[serde(default)]
    pub mode: DecodeMode,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EncodeSettings {
    pub max_value: u64,
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings = toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

/// Reject an upper bound outside `1..=MAX_ENCODABLE`, naming `field` in the error.
pub fn check_max_value(field: &str, max: u64) -> Result<u64, SettingsError> {
    if !(1..=MAX_ENCODABLE).contains(&max) {
        return Err(SettingsError::InvalidValue {
            field: field.to_string(),
            reason: format!("must be between 1 and {MAX_ENCODABLE}"),
        });
    }
    Ok(max)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    check_max_value("encode.max_value", s.encode.max_value)?;
    Ok(())
}
