//! Request types for the analysis endpoint.

use serde::Deserialize;

/// Body of `POST /api/analyze`.
///
/// A missing or null `text` is treated as empty so it fails the length check.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub text: Option<String>,
}

impl AnalyzeRequest {
    pub fn into_text(self) -> String {
        self.text.unwrap_or_default()
    }
}
