//! Configuration error types.

use thiserror::Error;

/// Errors while loading configuration from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),
}

/// Errors from semantic validation of loaded configuration.
#[derive(Debug, Clone, Error)]
pub enum ValidationError {
    #[error("server port must not be zero")]
    InvalidPort,

    #[error("request timeout must be between 1 and 300 seconds")]
    InvalidTimeout,

    #[error("invalid URL for {field}: {value}")]
    InvalidUrl { field: String, value: String },
}

impl ValidationError {
    /// Creates an invalid URL error.
    pub fn invalid_url(field: impl Into<String>, value: impl Into<String>) -> Self {
        ValidationError::InvalidUrl {
            field: field.into(),
            value: value.into(),
        }
    }
}
