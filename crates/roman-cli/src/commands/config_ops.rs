use std::fs;
use std::path::Path;

use roman_core::settings::{self, SettingsError};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("reading {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Settings(#[from] SettingsError),
}

fn read(file: &Path) -> Result<String, ConfigError> {
    fs::read_to_string(file).map_err(|source| ConfigError::Read {
        path: file.display().to_string(),
        source,
    })
}

pub fn settings_export() -> &'static str {
    settings::default_toml()
}

/// Parse and validate a settings file, returning a one-line summary.
pub fn settings_validate(file: &Path) -> Result<String, ConfigError> {
    let content = read(file)?;
    let s = settings::parse_settings_toml(&content)?;
    Ok(format!(
        "OK: decode.mode={:?}, encode.max_value={}",
        s.decode.mode, s.encode.max_value
    ))
}

/// Install a settings file as the process-wide settings.
pub fn settings_load(file: &Path) -> Result<(), ConfigError> {
    let content = read(file)?;
    settings::init_custom(content)?;
    Ok(())
}
