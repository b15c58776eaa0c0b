//! HTTP adapters - REST API implementations.
//!
//! Each endpoint group has its own adapter; `app` assembles them behind
//! `/api` with the shared middleware stack.

pub mod analysis;
pub mod app;
pub mod error;
pub mod export;
pub mod extraction;

// Re-export key types for convenience
pub use app::{app_router, AppServices, HealthResponse};
pub use error::{ApiError, ErrorResponse};
