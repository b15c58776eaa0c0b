//! Analysis Provider Port - Strategy that turns research text into an
//! `AnalysisResult`.
//!
//! Exactly one implementation is installed at startup: the fixed mock payload
//! when no model credential is configured, or the LLM-backed client otherwise.
//! Handlers only see this trait, so the mock/live decision is never repeated
//! per request.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::analysis::AnalysisResult;
use crate::domain::research::ResearchText;

use super::ai_provider::AIError;

/// Port for producing an analysis from validated research text.
#[async_trait]
pub trait AnalysisProvider: Send + Sync {
    /// Analyze the research text.
    ///
    /// # Errors
    ///
    /// Returns `UpstreamAnalysisError` when the model call fails or its reply
    /// cannot be read as an `AnalysisResult`. Implementations must not
    /// substitute canned data on failure.
    async fn analyze(&self, text: &ResearchText) -> Result<AnalysisResult, UpstreamAnalysisError>;

    /// Short provider name for logs and health checks ("mock", "openai").
    fn name(&self) -> &'static str;
}

/// Failure of the live analysis path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UpstreamAnalysisError {
    /// The completion call itself failed.
    #[error(transparent)]
    Provider(#[from] AIError),

    /// The model answered, but not with a usable analysis object.
    #[error("model reply was not a valid analysis JSON object: {0}")]
    MalformedReply(String),
}

impl UpstreamAnalysisError {
    /// Machine-readable error code surfaced to API callers.
    pub fn code(&self) -> Option<String> {
        match self {
            UpstreamAnalysisError::Provider(err) => err.code(),
            UpstreamAnalysisError::MalformedReply(_) => Some("invalid_json_reply".to_string()),
        }
    }

    /// True when the upstream rejected the configured credential.
    pub fn is_authentication_failure(&self) -> bool {
        matches!(self, UpstreamAnalysisError::Provider(err) if err.is_authentication_failure())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_errors_keep_upstream_code() {
        let err = UpstreamAnalysisError::from(AIError::authentication_failed("Incorrect API key"));
        assert_eq!(err.code().as_deref(), Some("invalid_api_key"));
        assert!(err.is_authentication_failure());
        assert_eq!(err.to_string(), "authentication failed: Incorrect API key");
    }

    #[test]
    fn malformed_reply_has_its_own_code() {
        let err = UpstreamAnalysisError::MalformedReply("expected value at line 1".to_string());
        assert_eq!(err.code().as_deref(), Some("invalid_json_reply"));
        assert!(!err.is_authentication_failure());
    }
}
