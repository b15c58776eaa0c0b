//! Qualitative coding codebook.

use serde::{Deserialize, Serialize};

/// A code must be observed at least this many times to enter the codebook.
pub const MIN_CODE_FREQUENCY: u32 = 2;

/// One named code applied during qualitative analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodebookEntry {
    /// Short name for the pattern (e.g. "Navigation Confusion").
    pub code: String,
    /// When this code applies.
    pub definition: String,
    /// Number of occurrences in the source material.
    pub frequency: u32,
    /// Quotes or observations exemplifying the code.
    pub examples: Vec<String>,
    /// Higher-level grouping (e.g. "Usability").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl CodebookEntry {
    /// True when the code meets the minimum frequency for inclusion.
    pub fn is_recurring(&self) -> bool {
        self.frequency >= MIN_CODE_FREQUENCY
    }

    /// Share of all coded occurrences, in percent.
    ///
    /// Returns 0.0 when `total` is zero.
    pub fn share_percent(&self, total: u64) -> f64 {
        if total == 0 {
            return 0.0;
        }
        f64::from(self.frequency) * 100.0 / total as f64
    }
}
