//! Error types for the domain layer.

use thiserror::Error;

/// Errors raised when caller-supplied input fails validation.
///
/// These surface to HTTP callers as `400 Bad Request` with the display
/// message as the `error` field, so the wording is part of the contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Text too short. Please provide more research data.")]
    TextTooShort { min: usize, actual: usize },

    #[error("No file provided")]
    MissingFile { field: String },
}

impl ValidationError {
    /// Creates a text-too-short validation error.
    pub fn text_too_short(min: usize, actual: usize) -> Self {
        ValidationError::TextTooShort { min, actual }
    }

    /// Creates a missing file validation error for a multipart field.
    pub fn missing_file(field: impl Into<String>) -> Self {
        ValidationError::MissingFile {
            field: field.into(),
        }
    }
}
