//! HTTP adapter for the analysis endpoint.

mod dto;
mod handlers;
mod routes;

pub use dto::AnalyzeRequest;
pub use handlers::AnalysisHandlers;
pub use routes::analysis_routes;
