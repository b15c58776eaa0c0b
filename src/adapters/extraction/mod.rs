//! Document extraction adapters.
//!
//! - `LopdfExtractor` - PDF via a staged temporary file
//! - `DocxRsExtractor` - DOCX decoded in memory

mod docx_extractor;
mod lopdf_extractor;

pub use docx_extractor::DocxRsExtractor;
pub use lopdf_extractor::LopdfExtractor;
