//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `ai` - Chat-completion providers (OpenAI, scripted mock)
//! - `analysis` - Demonstration and LLM-backed analysis providers
//! - `extraction` - PDF and DOCX text extraction
//! - `http` - axum REST API

pub mod ai;
pub mod analysis;
pub mod extraction;
pub mod http;

pub use analysis::{build_analysis_provider, LlmAnalysisProvider, MockAnalysisProvider};
pub use extraction::{DocxRsExtractor, LopdfExtractor};
