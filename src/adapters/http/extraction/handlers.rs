//! HTTP handlers for the extraction endpoints.

use std::sync::Arc;

use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{ApiError, ErrorResponse};
use crate::application::{ExtractDocumentCommand, ExtractDocumentHandler, UPLOAD_FIELD};

use super::dto::{DocxExtractionResponse, PdfExtractionResponse};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct ExtractionHandlers {
    extract_handler: Arc<ExtractDocumentHandler>,
}

impl ExtractionHandlers {
    pub fn new(extract_handler: Arc<ExtractDocumentHandler>) -> Self {
        Self { extract_handler }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/extract/pdf - Extract text from an uploaded PDF
pub async fn extract_pdf(
    State(handlers): State<ExtractionHandlers>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Response {
    let cmd = match read_upload(multipart).await {
        Ok(cmd) => cmd,
        Err(e) => return e.into_response(),
    };

    match handlers.extract_handler.handle_pdf(cmd).await {
        Ok(pdf) => (StatusCode::OK, Json(PdfExtractionResponse::from(pdf))).into_response(),
        Err(e) => ApiError::from(e).into_response(),
    }
}

/// POST /api/extract/docx - Extract text from an uploaded Word document
pub async fn extract_docx(
    State(handlers): State<ExtractionHandlers>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Response {
    let cmd = match read_upload(multipart).await {
        Ok(cmd) => cmd,
        Err(e) => return e.into_response(),
    };

    match handlers.extract_handler.handle_docx(cmd).await {
        Ok(docx) => (StatusCode::OK, Json(DocxExtractionResponse::from(docx))).into_response(),
        Err(e) => ApiError::from(e).into_response(),
    }
}

/// Pulls the upload field out of the form.
///
/// A request that is not multipart at all counts as carrying no file.
async fn read_upload(
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<ExtractDocumentCommand, ApiError> {
    let mut multipart = match multipart {
        Ok(multipart) => multipart,
        Err(rejection) => {
            tracing::debug!(reason = %rejection.body_text(), "Upload is not a multipart form");
            return Ok(ExtractDocumentCommand { file: None });
        }
    };

    loop {
        let field = multipart.next_field().await.map_err(|e| {
            ApiError::new(e.status(), ErrorResponse::new(e.body_text()))
        })?;
        let Some(field) = field else {
            return Ok(ExtractDocumentCommand { file: None });
        };

        if field.name() == Some(UPLOAD_FIELD) {
            let bytes = field.bytes().await.map_err(|e| {
                ApiError::new(e.status(), ErrorResponse::new(e.body_text()))
            })?;
            return Ok(ExtractDocumentCommand {
                file: Some(bytes.to_vec()),
            });
        }
    }
}
