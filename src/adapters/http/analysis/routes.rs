//! HTTP routes for the analysis endpoint.

use axum::{routing::post, Router};

use super::handlers::{analyze_research, AnalysisHandlers};

/// Creates the analysis router.
pub fn analysis_routes(handlers: AnalysisHandlers) -> Router {
    Router::new()
        .route("/analyze", post(analyze_research))
        .with_state(handlers)
}
