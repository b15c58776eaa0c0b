//! ExtractDocumentHandler - Turns an uploaded PDF or DOCX into plain text.

use std::sync::Arc;
use thiserror::Error;

use crate::domain::foundation::ValidationError;
use crate::ports::{DocxExtractor, DocxText, ExtractionError, PdfExtractor, PdfText};

/// Multipart field carrying the upload.
pub const UPLOAD_FIELD: &str = "file";

/// Command to extract text from an upload.
///
/// `file` is `None` when the request carried no upload field.
#[derive(Debug, Clone)]
pub struct ExtractDocumentCommand {
    pub file: Option<Vec<u8>>,
}

/// Errors from document extraction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractDocumentError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Extraction(#[from] ExtractionError),
}

/// Handler for PDF and DOCX text extraction.
pub struct ExtractDocumentHandler {
    pdf: Arc<dyn PdfExtractor>,
    docx: Arc<dyn DocxExtractor>,
}

impl ExtractDocumentHandler {
    pub fn new(pdf: Arc<dyn PdfExtractor>, docx: Arc<dyn DocxExtractor>) -> Self {
        Self { pdf, docx }
    }

    pub async fn handle_pdf(
        &self,
        cmd: ExtractDocumentCommand,
    ) -> Result<PdfText, ExtractDocumentError> {
        let bytes = require_file(cmd)?;
        Ok(self.pdf.extract_pdf(bytes).await?)
    }

    pub async fn handle_docx(
        &self,
        cmd: ExtractDocumentCommand,
    ) -> Result<DocxText, ExtractDocumentError> {
        let bytes = require_file(cmd)?;
        Ok(self.docx.extract_docx(bytes).await?)
    }
}

fn require_file(cmd: ExtractDocumentCommand) -> Result<Vec<u8>, ValidationError> {
    cmd.file
        .ok_or_else(|| ValidationError::missing_file(UPLOAD_FIELD))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::ConversionMessage;
    use async_trait::async_trait;
    use serde_json::Map;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingExtractor {
        received: Mutex<Vec<Vec<u8>>>,
        fail: bool,
    }

    #[async_trait]
    impl PdfExtractor for RecordingExtractor {
        async fn extract_pdf(&self, bytes: Vec<u8>) -> Result<PdfText, ExtractionError> {
            self.received.lock().unwrap().push(bytes);
            if self.fail {
                return Err(ExtractionError::pdf("Invalid PDF structure"));
            }
            Ok(PdfText {
                text: "page one\npage two".to_string(),
                pages: 2,
                info: Map::new(),
            })
        }
    }

    #[async_trait]
    impl DocxExtractor for RecordingExtractor {
        async fn extract_docx(&self, bytes: Vec<u8>) -> Result<DocxText, ExtractionError> {
            self.received.lock().unwrap().push(bytes);
            Ok(DocxText {
                text: "paragraph".to_string(),
                messages: vec![ConversionMessage::warning("Skipped 1 embedded image or drawing")],
            })
        }
    }

    fn handler(extractor: Arc<RecordingExtractor>) -> ExtractDocumentHandler {
        ExtractDocumentHandler::new(extractor.clone(), extractor)
    }

    #[tokio::test]
    async fn missing_file_is_a_validation_error() {
        let extractor = Arc::new(RecordingExtractor::default());
        let handler = handler(extractor.clone());

        let err = handler
            .handle_pdf(ExtractDocumentCommand { file: None })
            .await
            .unwrap_err();

        assert_eq!(
            err,
            ExtractDocumentError::Validation(ValidationError::missing_file("file"))
        );
        assert!(extractor.received.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn pdf_bytes_are_forwarded() {
        let extractor = Arc::new(RecordingExtractor::default());
        let handler = handler(extractor.clone());

        let result = handler
            .handle_pdf(ExtractDocumentCommand {
                file: Some(b"%PDF-1.5".to_vec()),
            })
            .await
            .unwrap();

        assert_eq!(result.pages, 2);
        assert_eq!(extractor.received.lock().unwrap()[0], b"%PDF-1.5".to_vec());
    }

    #[tokio::test]
    async fn decoder_failures_pass_through() {
        let extractor = Arc::new(RecordingExtractor {
            fail: true,
            ..Default::default()
        });
        let handler = handler(extractor);

        let err = handler
            .handle_pdf(ExtractDocumentCommand {
                file: Some(vec![1, 2, 3]),
            })
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            ExtractDocumentError::Extraction(ExtractionError::Pdf { .. })
        ));
    }

    #[tokio::test]
    async fn docx_returns_text_and_messages() {
        let handler = handler(Arc::new(RecordingExtractor::default()));

        let result = handler
            .handle_docx(ExtractDocumentCommand {
                file: Some(vec![0x50, 0x4B]),
            })
            .await
            .unwrap();

        assert_eq!(result.text, "paragraph");
        assert_eq!(result.messages.len(), 1);
    }
}
