//! PDF text extraction with `lopdf`.
//!
//! The upload is staged in a named temporary file and decoded on a blocking
//! thread. The file is owned by a `NamedTempFile` inside the blocking task,
//! so it is removed when the task ends on success, decoder failure or panic.

use async_trait::async_trait;
use lopdf::{Dictionary, Document, Object};
use serde_json::{Map, Value};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::ports::{ExtractionError, PdfExtractor, PdfText};

/// `PdfExtractor` backed by `lopdf`.
#[derive(Debug, Clone, Default)]
pub struct LopdfExtractor {
    temp_dir: Option<PathBuf>,
}

impl LopdfExtractor {
    /// Stages uploads in the OS temp directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stages uploads in `dir` instead of the OS temp directory.
    pub fn with_temp_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            temp_dir: Some(dir.into()),
        }
    }
}

#[async_trait]
impl PdfExtractor for LopdfExtractor {
    async fn extract_pdf(&self, bytes: Vec<u8>) -> Result<PdfText, ExtractionError> {
        let temp_dir = self.temp_dir.clone();
        let size = bytes.len();

        let result = tokio::task::spawn_blocking(move || extract_staged(&bytes, temp_dir.as_deref()))
            .await
            .map_err(|e| ExtractionError::interrupted(e.to_string()))?;

        match &result {
            Ok(pdf) => tracing::info!(bytes = size, pages = pdf.pages, "Extracted PDF text"),
            Err(err) => tracing::warn!(bytes = size, details = err.details(), "PDF extraction failed"),
        }
        result
    }
}

/// Writes the upload to a temporary file and decodes it from there.
fn extract_staged(bytes: &[u8], temp_dir: Option<&Path>) -> Result<PdfText, ExtractionError> {
    let mut builder = tempfile::Builder::new();
    builder.prefix("ux-synth-").suffix(".pdf");
    let mut staged = match temp_dir {
        Some(dir) => builder.tempfile_in(dir),
        None => builder.tempfile(),
    }
    .map_err(|e| ExtractionError::staging(e.to_string()))?;

    staged
        .write_all(bytes)
        .and_then(|()| staged.flush())
        .map_err(|e| ExtractionError::staging(e.to_string()))?;

    let document = Document::load(staged.path()).map_err(|e| ExtractionError::pdf(e.to_string()))?;
    read_document(&document)
}

fn read_document(document: &Document) -> Result<PdfText, ExtractionError> {
    let pages = document.get_pages();

    let mut texts = Vec::with_capacity(pages.len());
    for page_number in pages.keys() {
        let text = document
            .extract_text(&[*page_number])
            .map_err(|e| ExtractionError::pdf(format!("page {}: {}", page_number, e)))?;
        texts.push(text.trim().to_string());
    }

    Ok(PdfText {
        text: texts.join("\n"),
        pages: pages.len(),
        info: document_info(document),
    })
}

/// Entries of the trailer `Info` dictionary plus the header version.
fn document_info(document: &Document) -> Map<String, Value> {
    let mut info = Map::new();

    if let Some(dict) = info_dictionary(document) {
        for (key, value) in dict.iter() {
            if let Some(value) = object_to_json(value) {
                info.insert(String::from_utf8_lossy(key).into_owned(), value);
            }
        }
    }

    info.insert(
        "PDFFormatVersion".to_string(),
        Value::String(document.version.clone()),
    );
    info
}

fn info_dictionary(document: &Document) -> Option<&Dictionary> {
    match document.trailer.get(b"Info").ok()? {
        Object::Reference(id) => document.get_dictionary(*id).ok(),
        Object::Dictionary(dict) => Some(dict),
        _ => None,
    }
}

fn object_to_json(object: &Object) -> Option<Value> {
    match object {
        Object::String(bytes, _) => Some(Value::String(decode_pdf_string(bytes))),
        Object::Name(name) => Some(Value::String(String::from_utf8_lossy(name).into_owned())),
        Object::Integer(i) => Some(Value::from(*i)),
        Object::Real(r) => serde_json::Number::from_f64(f64::from(*r)).map(Value::Number),
        Object::Boolean(b) => Some(Value::Bool(*b)),
        _ => None,
    }
}

/// Decodes a PDF text string: UTF-16BE with BOM, otherwise one byte per char.
fn decode_pdf_string(bytes: &[u8]) -> String {
    match bytes {
        [0xFE, 0xFF, rest @ ..] => {
            let units: Vec<u16> = rest
                .chunks_exact(2)
                .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
                .collect();
            String::from_utf16_lossy(&units)
        }
        _ => bytes.iter().map(|&b| b as char).collect(),
    }
}
