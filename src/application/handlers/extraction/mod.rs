//! Document extraction command handlers.

mod extract_document;

pub use extract_document::{
    ExtractDocumentCommand, ExtractDocumentError, ExtractDocumentHandler, UPLOAD_FIELD,
};
