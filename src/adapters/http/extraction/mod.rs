//! HTTP adapter for the document extraction endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{DocxExtractionResponse, PdfExtractionResponse};
pub use handlers::ExtractionHandlers;
pub use routes::extraction_routes;
