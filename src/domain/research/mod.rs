//! Research input accepted for analysis.

mod research_text;

pub use research_text::{ResearchText, MIN_RESEARCH_TEXT_CHARS};
