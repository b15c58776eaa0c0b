//! DOCX text extraction with `docx-rs`.

use async_trait::async_trait;
use docx_rs::{
    read_docx, DocumentChild, Docx, Paragraph, ParagraphChild, RunChild, Table, TableCellContent,
    TableChild, TableRowChild,
};

use crate::ports::{ConversionMessage, DocxExtractor, DocxText, ExtractionError};

/// `DocxExtractor` that decodes the upload in memory.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocxRsExtractor;

impl DocxRsExtractor {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl DocxExtractor for DocxRsExtractor {
    async fn extract_docx(&self, bytes: Vec<u8>) -> Result<DocxText, ExtractionError> {
        let size = bytes.len();

        let result = tokio::task::spawn_blocking(move || extract(&bytes))
            .await
            .map_err(|e| ExtractionError::interrupted(e.to_string()))?;

        match &result {
            Ok(docx) => tracing::info!(
                bytes = size,
                warnings = docx.messages.len(),
                "Extracted Word document text"
            ),
            Err(err) => tracing::warn!(bytes = size, details = err.details(), "Word extraction failed"),
        }
        result
    }
}

fn extract(bytes: &[u8]) -> Result<DocxText, ExtractionError> {
    let docx = read_docx(bytes).map_err(|e| ExtractionError::docx(e.to_string()))?;
    Ok(collect_text(&docx))
}

/// Accumulates paragraph lines and counts content that has no text form.
#[derive(Default)]
struct TextCollector {
    lines: Vec<String>,
    skipped_drawings: usize,
}

fn collect_text(docx: &Docx) -> DocxText {
    let mut collector = TextCollector::default();

    for child in &docx.document.children {
        match child {
            DocumentChild::Paragraph(paragraph) => collector.paragraph(paragraph),
            DocumentChild::Table(table) => collector.table(table),
            _ => {}
        }
    }

    DocxText {
        text: collector.lines.join("\n"),
        messages: skipped_drawing_messages(collector.skipped_drawings),
    }
}

impl TextCollector {
    fn paragraph(&mut self, paragraph: &Paragraph) {
        let mut line = String::new();
        self.paragraph_children(&paragraph.children, &mut line);
        self.lines.push(line);
    }

    fn paragraph_children(&mut self, children: &[ParagraphChild], line: &mut String) {
        for child in children {
            match child {
                ParagraphChild::Run(run) => {
                    for run_child in &run.children {
                        match run_child {
                            RunChild::Text(text) => line.push_str(&text.text),
                            RunChild::Tab(_) => line.push('\t'),
                            RunChild::Break(_) => line.push('\n'),
                            RunChild::Drawing(_) => self.skipped_drawings += 1,
                            _ => {}
                        }
                    }
                }
                ParagraphChild::Hyperlink(link) => self.paragraph_children(&link.children, line),
                _ => {}
            }
        }
    }

    fn table(&mut self, table: &Table) {
        for row in &table.rows {
            let TableChild::TableRow(row) = row;
            for cell in &row.cells {
                let TableRowChild::TableCell(cell) = cell;
                for content in &cell.children {
                    match content {
                        TableCellContent::Paragraph(paragraph) => self.paragraph(paragraph),
                        TableCellContent::Table(nested) => self.table(nested),
                        _ => {}
                    }
                }
            }
        }
    }
}

fn skipped_drawing_messages(count: usize) -> Vec<ConversionMessage> {
    match count {
        0 => Vec::new(),
        1 => vec![ConversionMessage::warning(
            "Skipped 1 embedded image or drawing",
        )],
        n => vec![ConversionMessage::warning(format!(
            "Skipped {} embedded images or drawings",
            n
        ))],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docx_rs::{Run, TableCell, TableRow};
    use std::io::Cursor;

    fn pack(docx: Docx) -> Vec<u8> {
        let mut cursor = Cursor::new(Vec::new());
        docx.build().pack(&mut cursor).unwrap();
        cursor.into_inner()
    }

    fn paragraph(text: &str) -> Paragraph {
        Paragraph::new().add_run(Run::new().add_text(text))
    }

    #[tokio::test]
    async fn extracts_paragraphs_in_order() {
        let bytes = pack(
            Docx::new()
                .add_paragraph(paragraph("Interview 1"))
                .add_paragraph(paragraph("The onboarding flow felt long.")),
        );

        let result = DocxRsExtractor::new().extract_docx(bytes).await.unwrap();

        assert_eq!(result.text, "Interview 1\nThe onboarding flow felt long.");
        assert!(result.messages.is_empty());
    }

    #[tokio::test]
    async fn includes_table_cell_text() {
        let table = Table::new(vec![TableRow::new(vec![
            TableCell::new().add_paragraph(paragraph("Participant")),
            TableCell::new().add_paragraph(paragraph("Quote")),
        ])]);
        let bytes = pack(
            Docx::new()
                .add_paragraph(paragraph("Summary table"))
                .add_table(table),
        );

        let result = DocxRsExtractor::new().extract_docx(bytes).await.unwrap();

        assert_eq!(result.text, "Summary table\nParticipant\nQuote");
    }

    #[tokio::test]
    async fn rejects_non_docx_bytes() {
        let err = DocxRsExtractor::new()
            .extract_docx(b"plain text, not a zip".to_vec())
            .await
            .unwrap_err();

        assert!(matches!(err, ExtractionError::Docx { .. }));
        assert_eq!(err.to_string(), "Failed to extract text from Word document");
        assert!(!err.details().is_empty());
    }

    #[test]
    fn drawing_warnings_are_pluralized() {
        assert!(skipped_drawing_messages(0).is_empty());
        assert_eq!(
            skipped_drawing_messages(1)[0].message,
            "Skipped 1 embedded image or drawing"
        );
        assert_eq!(
            skipped_drawing_messages(3)[0].message,
            "Skipped 3 embedded images or drawings"
        );
    }
}
