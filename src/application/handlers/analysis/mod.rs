//! Analysis command handlers.

mod analyze_research;

pub use analyze_research::{AnalyzeResearchCommand, AnalyzeResearchError, AnalyzeResearchHandler};
