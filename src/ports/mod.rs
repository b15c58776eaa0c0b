//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `AIProvider` - Hosted chat-completion API
//! - `AnalysisProvider` - Research text to `AnalysisResult` (mock or live)
//! - `PdfExtractor` / `DocxExtractor` - Uploaded documents to plain text

mod ai_provider;
mod analysis_provider;
mod document_extractor;

pub use ai_provider::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, FinishReason, Message,
    MessageRole, ProviderInfo, RequestMetadata, ResponseFormat, TokenUsage,
};
pub use analysis_provider::{AnalysisProvider, UpstreamAnalysisError};
pub use document_extractor::{
    ConversionMessage, ConversionMessageKind, DocxExtractor, DocxText, ExtractionError,
    PdfExtractor, PdfText,
};
