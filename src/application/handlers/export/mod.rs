//! Export and reimport handlers.

mod export_analysis;

pub use export_analysis::{
    ExportAnalysisCommand, ExportAnalysisError, ExportAnalysisHandler, ExportedFile,
    ImportAnalysisCommand, ImportAnalysisHandler,
};
