//! Application handlers.
//!
//! Command handlers that validate input and orchestrate the ports.

pub mod analysis;
pub mod export;
pub mod extraction;

pub use analysis::{AnalyzeResearchCommand, AnalyzeResearchError, AnalyzeResearchHandler};
pub use export::{
    ExportAnalysisCommand, ExportAnalysisError, ExportAnalysisHandler, ExportedFile,
    ImportAnalysisCommand, ImportAnalysisHandler,
};
pub use extraction::{
    ExtractDocumentCommand, ExtractDocumentError, ExtractDocumentHandler, UPLOAD_FIELD,
};
