//! Error types for the settings crate.
//!
//! This module provides structured error types for loading, saving and
//! validating footprint defaults.

use std::io;
use thiserror::Error;

use perfkit_core::ParameterError;

/// Errors that can occur during settings operations.
#[derive(Error, Debug)]
pub enum SettingsError {
    /// The defaults file could not be loaded.
    #[error("Failed to load settings: {0}")]
    LoadError(String),

    /// The defaults file could not be saved.
    #[error("Failed to save settings: {0}")]
    SaveError(String),

    /// A default value is invalid.
    #[error("Invalid setting '{key}': {reason}")]
    InvalidSetting { key: String, reason: String },

    /// The file extension is neither `.toml` nor `.json`.
    #[error("Unsupported config format: {0}")]
    UnsupportedFormat(String),

    /// The configuration directory could not be found.
    #[error("Config directory error: {0}")]
    ConfigDirectory(String),

    /// A size default failed parameter validation.
    #[error(transparent)]
    Parameter(#[from] ParameterError),

    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// TOML deserialization error.
    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// TOML serialization error.
    #[error("TOML error: {0}")]
    TomlSerializeError(#[from] toml::ser::Error),
}

/// Result type alias for settings operations.
pub type SettingsResult<T> = Result<T, SettingsError>;

#[cfg(test)]
mod tests {
    use super::*;
    use perfkit_core::Size;

    #[test]
    fn test_settings_error_display() {
        let err = SettingsError::LoadError("file not found".to_string());
        assert_eq!(err.to_string(), "Failed to load settings: file not found");

        let err = SettingsError::InvalidSetting {
            key: "dip_ic.pin_count".to_string(),
            reason: "must be even".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid setting 'dip_ic.pin_count': must be even"
        );

        let err = SettingsError::UnsupportedFormat("yaml".to_string());
        assert_eq!(err.to_string(), "Unsupported config format: yaml");
    }

    #[test]
    fn test_error_conversion() {
        let param_err = ParameterError::NonPositive {
            name: "turret.size".to_string(),
            size: Size::inches(0.0),
        };
        let settings_err: SettingsError = param_err.into();
        assert!(matches!(settings_err, SettingsError::Parameter(_)));
        assert_eq!(settings_err.to_string(), "turret.size must be positive, got 0in");

        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let settings_err: SettingsError = io_err.into();
        assert!(matches!(settings_err, SettingsError::IoError(_)));
    }
}
