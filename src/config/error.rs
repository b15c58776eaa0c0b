//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Upload limit must be greater than zero")]
    InvalidUploadLimit,

    #[error("AI base URL must start with http:// or https://")]
    InvalidAiBaseUrl,

    #[error("AI temperature must be between 0.0 and 2.0")]
    InvalidTemperature,

    #[error("AI max_tokens must be greater than zero")]
    InvalidMaxTokens,

    #[error("AI timeout must be between 1 and 600 seconds")]
    InvalidAiTimeout,

    #[error("AI max_concurrent_requests must be greater than zero")]
    InvalidConcurrencyLimit,

    #[error("AI queue_timeout_secs must be between 1 and 600 seconds")]
    InvalidQueueTimeout,

    #[error("Extraction temp_dir does not exist or is not a directory: {0}")]
    TempDirNotFound(String),
}
