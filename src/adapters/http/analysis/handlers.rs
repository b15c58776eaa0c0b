//! HTTP handlers for the analysis endpoint.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{ApiError, ErrorResponse};
use crate::application::{AnalyzeResearchCommand, AnalyzeResearchHandler};

use super::dto::AnalyzeRequest;

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct AnalysisHandlers {
    analyze_handler: Arc<AnalyzeResearchHandler>,
}

impl AnalysisHandlers {
    pub fn new(analyze_handler: Arc<AnalyzeResearchHandler>) -> Self {
        Self { analyze_handler }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/analyze - Synthesize research text
pub async fn analyze_research(
    State(handlers): State<AnalysisHandlers>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match payload {
        Ok(req) => req,
        Err(rejection) => {
            return ApiError::bad_request(ErrorResponse::new(rejection.body_text())).into_response()
        }
    };

    let cmd = AnalyzeResearchCommand {
        text: req.into_text(),
    };

    match handlers.analyze_handler.handle(cmd).await {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(e) => ApiError::from(e).into_response(),
    }
}
