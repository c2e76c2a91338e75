use crate::error::DialogConversionError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The complete, declarative definition of a dialog, ready for
/// compilation into a `DialogFlow`. This is the target structure for any
/// custom data-model conversion.
///
/// Steps reference each other by name here, so within a definition step
/// names must be unique; the compiled arena has no such restriction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DialogDefinition {
    /// Name of the entry step.
    pub start: String,
    pub steps: Vec<StepDefinition>,
}

/// Declarative form of a single step.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepDefinition {
    pub name: String,
    /// Text shown to the user; empty marks a structural anchor.
    #[serde(default)]
    pub content: String,
    /// Auxiliary per-step parameters.
    #[serde(default)]
    pub data: HashMap<String, String>,
    /// Name of the linear successor, if any.
    #[serde(default)]
    pub next: Option<String>,
    /// Named branch children, in menu order.
    #[serde(default)]
    pub branches: Vec<BranchDefinition>,
}

/// One named branch out of a fan-out step.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BranchDefinition {
    pub key: String,
    /// Name of the step this branch leads to.
    pub target: String,
}

impl DialogDefinition {
    /// Parses a definition from its JSON form.
    pub fn from_json(json: &str) -> Result<Self, DialogConversionError> {
        serde_json::from_str(json).map_err(|e| DialogConversionError::JsonParse(e.to_string()))
    }
}
