//! Analysis payload types.
//!
//! # Module Organization
//!
//! - `insights` - Pain points, motivations and the shared severity scale
//! - `codebook` - Qualitative codes with frequency and evidence
//! - `persona` - Behaviour-based personas
//! - `result` - The `AnalysisResult` aggregate, themes, affinity groups, recommendations
//! - `export` - Versioned export envelope and reimport

mod codebook;
mod export;
mod insights;
mod persona;
mod result;

pub use codebook::{CodebookEntry, MIN_CODE_FREQUENCY};
pub use export::{read_analysis, AnalysisExport, ImportError, EXPORT_FORMAT_VERSION};
pub use insights::{Motivation, MotivationDetail, PainPoint, PainPointDetail, Severity};
pub use persona::Persona;
pub use result::{AffinityGroup, AnalysisResult, Recommendation, Theme};
