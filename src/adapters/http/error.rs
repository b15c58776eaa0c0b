//! JSON error bodies and the mapping from application errors to responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::application::{AnalyzeResearchError, ExportAnalysisError, ExtractDocumentError};
use crate::domain::analysis::ImportError;
use crate::domain::foundation::ValidationError;
use crate::ports::{ExtractionError, UpstreamAnalysisError};

/// Summary returned when the live analysis call fails.
pub const ANALYSIS_FAILED: &str = "AI Analysis failed";

/// Shown with credential failures.
pub const INVALID_KEY_HINT: &str =
    "Check that UX_SYNTH__AI__OPENAI_API_KEY (or OPENAI_API_KEY) holds a valid OpenAI API key.";

/// Error body: `{error, details?, code?, hint?}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
            code: None,
            hint: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn with_code(mut self, code: Option<String>) -> Self {
        self.code = code;
        self
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// An error body paired with its status code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub status: StatusCode,
    pub body: ErrorResponse,
}

impl ApiError {
    pub fn new(status: StatusCode, body: ErrorResponse) -> Self {
        Self { status, body }
    }

    pub fn bad_request(body: ErrorResponse) -> Self {
        Self::new(StatusCode::BAD_REQUEST, body)
    }

    pub fn internal(body: ErrorResponse) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, body)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::bad_request(ErrorResponse::new(err.to_string()))
    }
}

impl From<UpstreamAnalysisError> for ApiError {
    fn from(err: UpstreamAnalysisError) -> Self {
        let mut body = ErrorResponse::new(ANALYSIS_FAILED)
            .with_details(err.to_string())
            .with_code(err.code());
        if err.is_authentication_failure() {
            body = body.with_hint(INVALID_KEY_HINT);
        }
        ApiError::internal(body)
    }
}

impl From<ExtractionError> for ApiError {
    fn from(err: ExtractionError) -> Self {
        ApiError::internal(ErrorResponse::new(err.to_string()).with_details(err.details()))
    }
}

impl From<ImportError> for ApiError {
    fn from(err: ImportError) -> Self {
        let mut body = ErrorResponse::new(err.to_string());
        if let Some(details) = err.details() {
            body = body.with_details(details);
        }
        ApiError::bad_request(body)
    }
}

impl From<AnalyzeResearchError> for ApiError {
    fn from(err: AnalyzeResearchError) -> Self {
        match err {
            AnalyzeResearchError::Validation(e) => e.into(),
            AnalyzeResearchError::Upstream(e) => e.into(),
        }
    }
}

impl From<ExtractDocumentError> for ApiError {
    fn from(err: ExtractDocumentError) -> Self {
        match err {
            ExtractDocumentError::Validation(e) => e.into(),
            ExtractDocumentError::Extraction(e) => e.into(),
        }
    }
}

impl From<ExportAnalysisError> for ApiError {
    fn from(err: ExportAnalysisError) -> Self {
        ApiError::internal(ErrorResponse::new("Failed to export analysis").with_details(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::AIError;
    use serde_json::json;

    #[test]
    fn validation_error_is_bad_request_with_message_only() {
        let err: ApiError = ValidationError::text_too_short(50, 12).into();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(
            serde_json::to_value(&err.body).unwrap(),
            json!({"error": "Text too short. Please provide more research data."})
        );
    }

    #[test]
    fn credential_failure_carries_code_and_hint() {
        let err: ApiError =
            UpstreamAnalysisError::from(AIError::authentication_failed("Incorrect API key provided"))
                .into();

        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.body.error, "AI Analysis failed");
        assert_eq!(
            err.body.details.as_deref(),
            Some("authentication failed: Incorrect API key provided")
        );
        assert_eq!(err.body.code.as_deref(), Some("invalid_api_key"));
        assert_eq!(err.body.hint.as_deref(), Some(INVALID_KEY_HINT));
    }

    #[test]
    fn other_upstream_failures_have_no_hint() {
        let err: ApiError = UpstreamAnalysisError::MalformedReply("eof".to_string()).into();
        assert_eq!(err.body.code.as_deref(), Some("invalid_json_reply"));
        assert!(err.body.hint.is_none());
    }

    #[test]
    fn extraction_error_keeps_decoder_details() {
        let err: ApiError = ExtractionError::pdf("invalid file header").into();
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            serde_json::to_value(&err.body).unwrap(),
            json!({"error": "Failed to parse PDF", "details": "invalid file header"})
        );
    }

    #[test]
    fn import_error_is_bad_request() {
        let err: ApiError = ImportError::MissingAnalysis.into();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert!(err.body.details.is_none());
    }
}
