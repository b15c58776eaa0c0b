//! HTTP routes for the extraction endpoints.

use axum::{routing::post, Router};

use super::handlers::{extract_docx, extract_pdf, ExtractionHandlers};

/// Creates the extraction router.
pub fn extraction_routes(handlers: ExtractionHandlers) -> Router {
    Router::new()
        .route("/extract/pdf", post(extract_pdf))
        .route("/extract/docx", post(extract_docx))
        .with_state(handlers)
}
