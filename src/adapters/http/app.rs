//! Top-level router: API routes, health check and the tower-http stack.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::adapters::analysis::build_analysis_provider;
use crate::adapters::extraction::{DocxRsExtractor, LopdfExtractor};
use crate::application::{AnalyzeResearchHandler, ExtractDocumentHandler};
use crate::config::{AppConfig, ServerConfig};
use crate::ports::{AIError, AnalysisProvider, DocxExtractor, PdfExtractor};

use super::analysis::{analysis_routes, AnalysisHandlers};
use super::export::{export_routes, ExportHandlers};
use super::extraction::{extraction_routes, ExtractionHandlers};

/// Wired application handlers shared by every request.
#[derive(Clone)]
pub struct AppServices {
    analysis: AnalysisHandlers,
    extraction: ExtractionHandlers,
    export: ExportHandlers,
    provider_name: &'static str,
}

impl AppServices {
    pub fn new(
        analysis_provider: Arc<dyn AnalysisProvider>,
        pdf_extractor: Arc<dyn PdfExtractor>,
        docx_extractor: Arc<dyn DocxExtractor>,
    ) -> Self {
        let analyze_handler = Arc::new(AnalyzeResearchHandler::new(analysis_provider));
        let provider_name = analyze_handler.provider_name();
        Self {
            analysis: AnalysisHandlers::new(analyze_handler),
            extraction: ExtractionHandlers::new(Arc::new(ExtractDocumentHandler::new(
                pdf_extractor,
                docx_extractor,
            ))),
            export: ExportHandlers::default(),
            provider_name,
        }
    }

    /// Wires production adapters from configuration.
    ///
    /// # Errors
    ///
    /// Returns `AIError` if the live model client cannot be constructed.
    pub fn from_config(config: &AppConfig) -> Result<Self, AIError> {
        let provider = build_analysis_provider(&config.ai)?;
        let pdf = match &config.extraction.temp_dir {
            Some(dir) => LopdfExtractor::with_temp_dir(dir),
            None => LopdfExtractor::new(),
        };
        Ok(Self::new(provider, Arc::new(pdf), Arc::new(DocxRsExtractor::new())))
    }

    pub fn provider_name(&self) -> &'static str {
        self.provider_name
    }
}

/// Body of `GET /health`.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub provider: &'static str,
}

/// Builds the full application router.
pub fn app_router(services: AppServices, server: &ServerConfig) -> Router {
    let provider = services.provider_name;

    let api = Router::new()
        .merge(analysis_routes(services.analysis))
        .merge(extraction_routes(services.extraction))
        .merge(export_routes(services.export));

    Router::new()
        .route(
            "/health",
            get(move || async move {
                Json(HealthResponse {
                    status: "ok",
                    provider,
                })
            }),
        )
        .nest("/api", api)
        .layer(DefaultBodyLimit::max(server.max_upload_bytes))
        .layer(TimeoutLayer::new(Duration::from_secs(
            server.request_timeout_secs,
        )))
        .layer(cors_layer(server))
        .layer(TraceLayer::new_for_http())
}

/// Explicit origins when configured; permissive outside production otherwise.
fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .into_iter()
        .filter_map(|origin| match HeaderValue::from_str(&origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    if origins.is_empty() {
        if server.is_production() {
            return CorsLayer::new();
        }
        return CorsLayer::permissive();
    }

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any)
}
