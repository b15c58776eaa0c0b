//! Behaviour-based personas.

use serde::{Deserialize, Serialize};

/// A synthesized archetype built from observed goals, frustrations and
/// behaviours.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Persona {
    pub name: String,
    pub role: String,
    /// Age range, e.g. "28-35".
    pub age: String,
    /// When and where this persona uses the product.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    pub goals: Vec<String>,
    pub frustrations: Vec<String>,
    pub behaviors: Vec<String>,
    /// How the persona believes the product works.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mental_model: Option<String>,
    pub quote: String,
}
