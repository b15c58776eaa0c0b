//! The analysis payload returned by every analysis provider.

use serde::{Deserialize, Serialize};

use super::codebook::CodebookEntry;
use super::insights::{Motivation, PainPoint, Severity};
use super::persona::Persona;

/// Complete synthesis of one body of research text.
///
/// Produced in one shot by either the mock or the live provider and treated
/// as an immutable snapshot afterwards. Both providers return this exact
/// type, so consumers cannot tell them apart structurally.
///
/// `codebook` and `recommendations` default to empty when a model omits
/// them; the other sections are required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub pain_points: Vec<PainPoint>,
    pub motivations: Vec<Motivation>,
    pub themes: Vec<Theme>,
    pub affinity_groups: Vec<AffinityGroup>,
    #[serde(default)]
    pub codebook: Vec<CodebookEntry>,
    pub personas: Vec<Persona>,
    #[serde(default)]
    pub recommendations: Vec<Recommendation>,
}

/// A recurring pattern with supporting evidence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub theme: String,
    pub quotes: Vec<String>,
    /// UX principle the theme connects to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub principle: Option<String>,
}

/// Raw observations clustered by topic rather than by analytical category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AffinityGroup {
    pub category: String,
    pub items: Vec<String>,
}

/// A prioritized design action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub priority: Severity,
    pub issue: String,
    pub recommendation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub principle: Option<String>,
}

impl AnalysisResult {
    /// Codebook entries ordered by descending frequency.
    ///
    /// The sort is stable: entries with equal frequency keep their original
    /// relative order.
    pub fn sorted_codebook(&self) -> Vec<&CodebookEntry> {
        let mut entries: Vec<&CodebookEntry> = self.codebook.iter().collect();
        entries.sort_by(|a, b| b.frequency.cmp(&a.frequency));
        entries
    }

    /// Sum of all code frequencies.
    pub fn total_code_occurrences(&self) -> u64 {
        self.codebook
            .iter()
            .map(|entry| u64::from(entry.frequency))
            .sum()
    }

    /// Removes codes observed fewer than the minimum number of times.
    ///
    /// Returns the names of the removed codes.
    pub fn retain_recurring_codes(&mut self) -> Vec<String> {
        let mut dropped = Vec::new();
        self.codebook.retain(|entry| {
            if entry.is_recurring() {
                true
            } else {
                dropped.push(entry.code.clone());
                false
            }
        });
        dropped
    }
}
