//! Response types for the extraction endpoints.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::ports::{ConversionMessage, DocxText, PdfText};

/// Body of a successful `POST /api/extract/pdf`.
#[derive(Debug, Clone, Serialize)]
pub struct PdfExtractionResponse {
    pub text: String,
    pub pages: usize,
    pub info: Map<String, Value>,
}

impl From<PdfText> for PdfExtractionResponse {
    fn from(pdf: PdfText) -> Self {
        Self {
            text: pdf.text,
            pages: pdf.pages,
            info: pdf.info,
        }
    }
}

/// Body of a successful `POST /api/extract/docx`.
#[derive(Debug, Clone, Serialize)]
pub struct DocxExtractionResponse {
    pub text: String,
    pub messages: Vec<ConversionMessage>,
}

impl From<DocxText> for DocxExtractionResponse {
    fn from(docx: DocxText) -> Self {
        Self {
            text: docx.text,
            messages: docx.messages,
        }
    }
}
