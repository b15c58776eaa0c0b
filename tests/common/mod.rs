//! Shared helpers for HTTP integration tests.

#![allow(dead_code)]

use std::io::Cursor;
use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use ux_synthesizer::adapters::http::{app_router, AppServices};
use ux_synthesizer::adapters::{DocxRsExtractor, LopdfExtractor, MockAnalysisProvider};
use ux_synthesizer::config::ServerConfig;
use ux_synthesizer::ports::AnalysisProvider;

pub const BOUNDARY: &str = "ux-synth-test-boundary";

// =============================================================================
// App construction
// =============================================================================

/// App with the demonstration provider and real extractors.
pub fn mock_app() -> Router {
    app_with_provider(Arc::new(MockAnalysisProvider::new()))
}

pub fn app_with_provider(provider: Arc<dyn AnalysisProvider>) -> Router {
    let services = AppServices::new(
        provider,
        Arc::new(LopdfExtractor::new()),
        Arc::new(DocxRsExtractor::new()),
    );
    app_router(services, &ServerConfig::default())
}

// =============================================================================
// Requests
// =============================================================================

pub fn json_request(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn raw_request(uri: &str, content_type: &str, body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, content_type)
        .body(body.into())
        .unwrap()
}

/// Multipart form with a single file field.
pub fn multipart_request(uri: &str, field: &str, filename: &str, bytes: &[u8]) -> Request<Body> {
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
    body.extend_from_slice(
        format!(
            "Content-Disposition: form-data; name=\"{field}\"; filename=\"{filename}\"\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(b"Content-Type: application/octet-stream\r\n\r\n");
    body.extend_from_slice(bytes);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

    raw_request(
        uri,
        &format!("multipart/form-data; boundary={BOUNDARY}"),
        body,
    )
}

/// Multipart form with no fields at all.
pub fn empty_multipart_request(uri: &str) -> Request<Body> {
    raw_request(
        uri,
        &format!("multipart/form-data; boundary={BOUNDARY}"),
        format!("--{BOUNDARY}--\r\n"),
    )
}

pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, bytes.to_vec())
}

pub async fn send_json(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let (status, bytes) = send(app, request).await;
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

// =============================================================================
// Fixtures
// =============================================================================

/// A PDF with one line of Courier text per page.
pub fn pdf_fixture(pages: &[&str]) -> Vec<u8> {
    use lopdf::content::{Content, Operation};
    use lopdf::{dictionary, Document, Object, Stream};

    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });

    let mut kids: Vec<Object> = Vec::new();
    for text in pages {
        let content = Content {
            operations: vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 18.into()]),
                Operation::new("Td", vec![72.into(), 720.into()]),
                Operation::new("Tj", vec![Object::string_literal(*text)]),
                Operation::new("ET", vec![]),
            ],
        };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
        });
        kids.push(page_id.into());
    }

    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => pages.len() as i64,
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes).unwrap();
    bytes
}

/// A DOCX with one paragraph per entry.
pub fn docx_fixture(paragraphs: &[&str]) -> Vec<u8> {
    use docx_rs::{Docx, Paragraph, Run};

    let docx = paragraphs.iter().fold(Docx::new(), |docx, text| {
        docx.add_paragraph(Paragraph::new().add_run(Run::new().add_text(*text)))
    });

    let mut cursor = Cursor::new(Vec::new());
    docx.build().pack(&mut cursor).unwrap();
    cursor.into_inner()
}

/// Exactly `n` characters of research text with no surrounding whitespace.
pub fn research_text(n: usize) -> String {
    let mut text: String = "Participant said checkout asked for the address twice. "
        .chars()
        .cycle()
        .take(n.saturating_sub(1))
        .collect();
    if n > 0 {
        text.push('.');
    }
    text
}
