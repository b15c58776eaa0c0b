//! Versioned export envelope for analysis results.
//!
//! The envelope is the only durable artifact the service produces. It is
//! written as indented JSON and read back by [`read_analysis`], which only
//! insists on the `analysis` member so that older or hand-edited files still
//! load.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::foundation::Timestamp;

use super::result::AnalysisResult;

/// Envelope format version written into every export.
pub const EXPORT_FORMAT_VERSION: &str = "1.0";

/// Exported analysis file contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisExport {
    pub exported_at: Timestamp,
    pub version: String,
    pub analysis: AnalysisResult,
}

/// Errors raised while reading an exported analysis file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImportError {
    #[error("Failed to load analysis file. Please make sure it's a valid JSON file.")]
    InvalidJson(String),

    #[error("Invalid analysis file format. Please upload a file exported from UX Synthesizer.")]
    MissingAnalysis,

    #[error("Analysis file content does not match the expected format: {0}")]
    InvalidAnalysis(String),
}

impl ImportError {
    /// Underlying parser message, when there is one.
    pub fn details(&self) -> Option<&str> {
        match self {
            ImportError::InvalidJson(details) | ImportError::InvalidAnalysis(details) => {
                Some(details)
            }
            ImportError::MissingAnalysis => None,
        }
    }
}

impl AnalysisExport {
    /// Wraps an analysis in an envelope stamped with `exported_at`.
    pub fn new(analysis: AnalysisResult, exported_at: Timestamp) -> Self {
        Self {
            exported_at,
            version: EXPORT_FORMAT_VERSION.to_string(),
            analysis,
        }
    }

    /// Download filename, e.g. `ux-analysis-2024-03-05-14h07.json`.
    pub fn filename(&self) -> String {
        format!("ux-analysis-{}.json", self.exported_at.file_stamp())
    }

    /// Serializes with two-space indentation.
    pub fn to_pretty_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Reads the analysis back out of an exported file.
///
/// # Errors
///
/// - `ImportError::InvalidJson` if the input is not JSON
/// - `ImportError::MissingAnalysis` if there is no `analysis` member
/// - `ImportError::InvalidAnalysis` if `analysis` does not match the schema
pub fn read_analysis(input: &str) -> Result<AnalysisResult, ImportError> {
    let mut document: serde_json::Value =
        serde_json::from_str(input).map_err(|e| ImportError::InvalidJson(e.to_string()))?;

    let analysis = match document.get_mut("analysis") {
        Some(value) if !value.is_null() => value.take(),
        _ => return Err(ImportError::MissingAnalysis),
    };

    serde_json::from_value(analysis).map_err(|e| ImportError::InvalidAnalysis(e.to_string()))
}
