//! HTTP routes for export and reimport.

use axum::{routing::post, Router};

use super::handlers::{export_analysis, import_analysis, ExportHandlers};

/// Creates the export router.
pub fn export_routes(handlers: ExportHandlers) -> Router {
    Router::new()
        .route("/export", post(export_analysis))
        .route("/import", post(import_analysis))
        .with_state(handlers)
}
