//! Loading [`MaskOptions`] from JSON.
//!
//! Keys follow the attribute names the UI layer already uses
//! (`coloredMoneyVal`, `debounceMs`, ...); anything missing falls back to the
//! defaults in [`MaskOptions::default`].

use std::path::Path;

use shared::MaskOptions;
use tracing::info;

const MAX_DEBOUNCE_MS: u64 = 10_000;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read options file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid options JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Debounce must be between 1 and 10000 ms, got {0}")]
    InvalidDebounce(u64),
}

pub trait MaskOptionsExt: Sized {
    fn from_json(json: &str) -> Result<Self, ConfigError>;
    fn from_file(path: &Path) -> Result<Self, ConfigError>;
}

impl MaskOptionsExt for MaskOptions {
    fn from_json(json: &str) -> Result<Self, ConfigError> {
        let options: MaskOptions = serde_json::from_str(json)?;
        validate(&options)?;
        Ok(options)
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        info!("Loading mask options from {}", path.display());
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}

fn validate(options: &MaskOptions) -> Result<(), ConfigError> {
    if options.debounce_ms == 0 || options.debounce_ms > MAX_DEBOUNCE_MS {
        return Err(ConfigError::InvalidDebounce(options.debounce_ms));
    }
    Ok(())
}
