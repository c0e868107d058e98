//! Settings errors.

use thiserror::Error;

/// Failure while loading or parsing settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The settings file could not be read.
    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),

    /// The settings file is not valid JSON (or does not match the schema).
    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),
}
