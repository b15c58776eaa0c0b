//! Document extraction configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Document extraction configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExtractionConfig {
    /// Directory for staged PDF uploads. Defaults to the OS temp directory.
    pub temp_dir: Option<PathBuf>,
}

impl ExtractionConfig {
    /// Validate extraction configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        match &self.temp_dir {
            Some(dir) if !dir.is_dir() => Err(ValidationError::TempDirNotFound(
                dir.display().to_string(),
            )),
            _ => Ok(()),
        }
    }
}
