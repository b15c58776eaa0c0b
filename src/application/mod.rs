//! Application layer - Commands and Handlers.
//!
//! This layer validates caller input and coordinates between ports.

pub mod handlers;

pub use handlers::{
    // Analysis
    AnalyzeResearchCommand, AnalyzeResearchError, AnalyzeResearchHandler,
    // Export
    ExportAnalysisCommand, ExportAnalysisError, ExportAnalysisHandler, ExportedFile,
    ImportAnalysisCommand, ImportAnalysisHandler,
    // Extraction
    ExtractDocumentCommand, ExtractDocumentError, ExtractDocumentHandler, UPLOAD_FIELD,
};
