//! HTTP adapter for analysis export and reimport.

mod handlers;
mod routes;

pub use handlers::ExportHandlers;
pub use routes::export_routes;
