//! Domain layer containing the analysis contract and its value types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (validation errors, timestamps)
//! - `research` - Validated research text submitted for analysis
//! - `analysis` - The `AnalysisResult` payload and its export envelope

pub mod analysis;
pub mod foundation;
pub mod research;
