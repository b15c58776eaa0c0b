//! HTTP handlers for export and reimport.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{ApiError, ErrorResponse};
use crate::application::{
    ExportAnalysisCommand, ExportAnalysisHandler, ImportAnalysisCommand, ImportAnalysisHandler,
};
use crate::domain::analysis::AnalysisResult;

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct ExportHandlers {
    export_handler: Arc<ExportAnalysisHandler>,
    import_handler: Arc<ImportAnalysisHandler>,
}

impl ExportHandlers {
    pub fn new(
        export_handler: Arc<ExportAnalysisHandler>,
        import_handler: Arc<ImportAnalysisHandler>,
    ) -> Self {
        Self {
            export_handler,
            import_handler,
        }
    }
}

impl Default for ExportHandlers {
    fn default() -> Self {
        Self::new(
            Arc::new(ExportAnalysisHandler::new()),
            Arc::new(ImportAnalysisHandler::new()),
        )
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/export - Wrap an analysis in a downloadable export file
pub async fn export_analysis(
    State(handlers): State<ExportHandlers>,
    payload: Result<Json<AnalysisResult>, JsonRejection>,
) -> Response {
    let Json(analysis) = match payload {
        Ok(analysis) => analysis,
        Err(rejection) => {
            return ApiError::bad_request(ErrorResponse::new(rejection.body_text())).into_response()
        }
    };

    let file = match handlers
        .export_handler
        .handle(ExportAnalysisCommand { analysis })
    {
        Ok(file) => file,
        Err(e) => return ApiError::from(e).into_response(),
    };

    let disposition = format!("attachment; filename=\"{}\"", file.filename);
    match HeaderValue::from_str(&disposition) {
        Ok(disposition) => (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, HeaderValue::from_static("application/json")),
                (header::CONTENT_DISPOSITION, disposition),
            ],
            file.contents,
        )
            .into_response(),
        Err(e) => ApiError::internal(
            ErrorResponse::new("Failed to export analysis").with_details(e.to_string()),
        )
        .into_response(),
    }
}

/// POST /api/import - Read an analysis back out of an export file
pub async fn import_analysis(State(handlers): State<ExportHandlers>, body: String) -> Response {
    match handlers
        .import_handler
        .handle(ImportAnalysisCommand { contents: body })
    {
        Ok(analysis) => (StatusCode::OK, Json(analysis)).into_response(),
        Err(e) => ApiError::from(e).into_response(),
    }
}
