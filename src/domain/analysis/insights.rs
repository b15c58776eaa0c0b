//! Pain points, motivations and the severity scale they share with
//! recommendations.
//!
//! Models may answer with bare strings or with structured records. Both forms
//! are kept as enum variants so a value serializes back to exactly the shape
//! it was read from.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity of a pain point, also used as the priority of a recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    #[serde(alias = "critical", alias = "CRITICAL")]
    Critical,
    #[serde(alias = "high", alias = "HIGH")]
    High,
    #[serde(alias = "medium", alias = "MEDIUM")]
    Medium,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Severity::Critical => "Critical",
            Severity::High => "High",
            Severity::Medium => "Medium",
        };
        write!(f, "{}", s)
    }
}

/// A usability problem observed in the research.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PainPoint {
    Text(String),
    Detailed(PainPointDetail),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PainPointDetail {
    pub description: String,
    pub severity: Severity,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub violated_heuristic: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub impact: Option<String>,
}

impl PainPoint {
    pub fn description(&self) -> &str {
        match self {
            PainPoint::Text(text) => text,
            PainPoint::Detailed(detail) => &detail.description,
        }
    }

    pub fn severity(&self) -> Option<Severity> {
        match self {
            PainPoint::Text(_) => None,
            PainPoint::Detailed(detail) => Some(detail.severity),
        }
    }

    pub fn violated_heuristic(&self) -> Option<&str> {
        match self {
            PainPoint::Text(_) => None,
            PainPoint::Detailed(detail) => detail.violated_heuristic.as_deref(),
        }
    }
}

impl From<&str> for PainPoint {
    fn from(text: &str) -> Self {
        PainPoint::Text(text.to_string())
    }
}

/// Something users are trying to accomplish, and why.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Motivation {
    Text(String),
    Detailed(MotivationDetail),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MotivationDetail {
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl Motivation {
    pub fn description(&self) -> &str {
        match self {
            Motivation::Text(text) => text,
            Motivation::Detailed(detail) => &detail.description,
        }
    }

    pub fn category(&self) -> Option<&str> {
        match self {
            Motivation::Text(_) => None,
            Motivation::Detailed(detail) => detail.category.as_deref(),
        }
    }
}

impl From<&str> for Motivation {
    fn from(text: &str) -> Self {
        Motivation::Text(text.to_string())
    }
}
