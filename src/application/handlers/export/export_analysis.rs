//! Export and reimport of analysis results.

use thiserror::Error;

use crate::domain::analysis::{read_analysis, AnalysisExport, AnalysisResult, ImportError};
use crate::domain::foundation::Timestamp;

/// Command to export an analysis.
#[derive(Debug, Clone)]
pub struct ExportAnalysisCommand {
    pub analysis: AnalysisResult,
}

/// A ready-to-download export file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedFile {
    pub filename: String,
    pub contents: String,
}

/// Errors from exporting an analysis.
#[derive(Debug, Error)]
pub enum ExportAnalysisError {
    #[error("Failed to serialize analysis: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Handler that wraps an analysis in the export envelope.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExportAnalysisHandler;

impl ExportAnalysisHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, cmd: ExportAnalysisCommand) -> Result<ExportedFile, ExportAnalysisError> {
        self.handle_at(cmd, Timestamp::now())
    }

    /// Exports with an explicit export time.
    pub fn handle_at(
        &self,
        cmd: ExportAnalysisCommand,
        exported_at: Timestamp,
    ) -> Result<ExportedFile, ExportAnalysisError> {
        let export = AnalysisExport::new(cmd.analysis, exported_at);
        let contents = export.to_pretty_json()?;
        let filename = export.filename();

        tracing::info!(filename = %filename, bytes = contents.len(), "Exported analysis");
        Ok(ExportedFile { filename, contents })
    }
}

/// Command to reimport a previously exported file.
#[derive(Debug, Clone)]
pub struct ImportAnalysisCommand {
    pub contents: String,
}

/// Handler that reads the analysis back out of an export file.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImportAnalysisHandler;

impl ImportAnalysisHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, cmd: ImportAnalysisCommand) -> Result<AnalysisResult, ImportError> {
        read_analysis(&cmd.contents).map_err(|err| {
            tracing::info!(error = %err, details = ?err.details(), "Rejected analysis import");
            err
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::analysis::MockAnalysisProvider;
    use chrono::{TimeZone, Utc};

    fn stamp() -> Timestamp {
        Timestamp::from_datetime(Utc.with_ymd_and_hms(2024, 3, 5, 14, 7, 0).unwrap())
    }

    #[test]
    fn export_names_file_after_export_time() {
        let file = ExportAnalysisHandler::new()
            .handle_at(
                ExportAnalysisCommand {
                    analysis: MockAnalysisProvider::payload(),
                },
                stamp(),
            )
            .unwrap();

        assert_eq!(file.filename, "ux-analysis-2024-03-05-14h07.json");
        assert!(file.contents.contains("\n  \"version\": \"1.0\""));
    }

    #[test]
    fn export_then_import_reproduces_analysis_bytes() {
        let original = MockAnalysisProvider::payload();
        let file = ExportAnalysisHandler::new()
            .handle(ExportAnalysisCommand {
                analysis: original.clone(),
            })
            .unwrap();

        let imported = ImportAnalysisHandler::new()
            .handle(ImportAnalysisCommand {
                contents: file.contents,
            })
            .unwrap();

        assert_eq!(imported, original);
        assert_eq!(
            serde_json::to_string(&imported).unwrap(),
            serde_json::to_string(&original).unwrap()
        );
    }

    #[test]
    fn import_without_analysis_is_rejected() {
        let err = ImportAnalysisHandler::new()
            .handle(ImportAnalysisCommand {
                contents: r#"{"exportedAt": "2024-03-05T14:07:00.000Z", "version": "1.0"}"#
                    .to_string(),
            })
            .unwrap_err();

        assert_eq!(err, ImportError::MissingAnalysis);
    }
}
