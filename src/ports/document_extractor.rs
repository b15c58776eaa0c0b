//! Document Extractor Ports - Binary upload to plain text.
//!
//! Both extractors are stateless: one call in, one result out. The PDF
//! contract additionally owns a transient file that must be gone when the
//! call returns, whatever the outcome.

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

/// Port for PDF text extraction.
#[async_trait]
pub trait PdfExtractor: Send + Sync {
    /// Extract text from a PDF, one newline-separated block per page.
    async fn extract_pdf(&self, bytes: Vec<u8>) -> Result<PdfText, ExtractionError>;
}

/// Port for DOCX text extraction.
#[async_trait]
pub trait DocxExtractor: Send + Sync {
    /// Extract raw text from a DOCX document.
    async fn extract_docx(&self, bytes: Vec<u8>) -> Result<DocxText, ExtractionError>;
}

/// Text extracted from a PDF.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PdfText {
    /// Page texts in page order, joined with `\n`.
    pub text: String,
    /// Number of pages in the document.
    pub pages: usize,
    /// Document information dictionary entries.
    pub info: serde_json::Map<String, serde_json::Value>,
}

/// Text extracted from a DOCX document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocxText {
    /// Paragraph texts joined with `\n`.
    pub text: String,
    /// Non-fatal conversion warnings.
    pub messages: Vec<ConversionMessage>,
}

/// A non-fatal note produced while converting a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversionMessage {
    #[serde(rename = "type")]
    pub kind: ConversionMessageKind,
    pub message: String,
}

impl ConversionMessage {
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            kind: ConversionMessageKind::Warning,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConversionMessageKind {
    Warning,
}

/// Document extraction errors.
///
/// The display text is the user-facing summary; [`details`](Self::details)
/// carries the decoder's own message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractionError {
    /// The PDF decoder rejected the document.
    #[error("Failed to parse PDF")]
    Pdf { details: String },

    /// The DOCX decoder rejected the document.
    #[error("Failed to extract text from Word document")]
    Docx { details: String },

    /// The upload could not be staged on disk for decoding.
    #[error("Failed to extract text from PDF")]
    Staging { details: String },

    /// The blocking decode task panicked or was cancelled.
    #[error("Document extraction was interrupted")]
    Interrupted { details: String },
}

impl ExtractionError {
    pub fn pdf(details: impl Into<String>) -> Self {
        Self::Pdf {
            details: details.into(),
        }
    }

    pub fn docx(details: impl Into<String>) -> Self {
        Self::Docx {
            details: details.into(),
        }
    }

    pub fn staging(details: impl Into<String>) -> Self {
        Self::Staging {
            details: details.into(),
        }
    }

    pub fn interrupted(details: impl Into<String>) -> Self {
        Self::Interrupted {
            details: details.into(),
        }
    }

    /// Decoder or I/O message behind this error.
    pub fn details(&self) -> &str {
        match self {
            Self::Pdf { details }
            | Self::Docx { details }
            | Self::Staging { details }
            | Self::Interrupted { details } => details,
        }
    }
}
