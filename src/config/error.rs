//! Configuration error types.

use thiserror::Error;

/// Errors raised while locating, parsing, or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    #[error("{0}")]
    MutualExclusivity(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid configuration for {key}: {reason}")]
    Validation { key: String, reason: String },

    #[error("Failed to build configuration")]
    Build(#[from] config::ConfigError),
}

impl ConfigError {
    pub fn file_not_found(message: impl Into<String>) -> Self {
        ConfigError::FileNotFound(message.into())
    }

    pub fn mutual_exclusivity(message: impl Into<String>) -> Self {
        ConfigError::MutualExclusivity(message.into())
    }

    pub fn validation(key: impl Into<String>, reason: impl Into<String>) -> Self {
        ConfigError::Validation {
            key: key.into(),
            reason: reason.into(),
        }
    }
}
