use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// Auxiliary per-step parameters, e.g. a ticket-form id or a control label.
pub type StepData = AHashMap<String, String>;

/// Stable index of a step within its flow's arena.
///
/// Ids are assigned at construction time and never change; all structural
/// links between steps are stored as ids, so the tree contains no owning
/// reference cycles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StepId(pub(crate) usize);

impl StepId {
    /// The raw arena index.
    pub fn index(self) -> usize {
        self.0
    }
}

/// A single point in a dialog tree: displayable content plus structural links.
///
/// Steps are created by a `FlowBuilder` (or compiled from a declarative
/// definition) and are immutable once the flow is built.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Step {
    pub(crate) name: String,
    pub(crate) content: String,
    pub(crate) data: StepData,
    pub(crate) previous: Option<StepId>,
    pub(crate) next: Option<StepId>,
    pub(crate) branches: Vec<(String, StepId)>,
}

impl Step {
    pub(crate) fn new(name: &str, previous: Option<StepId>) -> Self {
        Self {
            name: name.to_string(),
            content: String::new(),
            data: StepData::new(),
            previous,
            next: None,
            branches: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The text shown to the user. Empty content marks a structural anchor
    /// that navigation walks straight past.
    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn data(&self) -> &StepData {
        &self.data
    }

    /// Looks up a single data value by key.
    pub fn data_value(&self, key: &str) -> Option<&str> {
        self.data.get(key).map(String::as_str)
    }

    /// The step that led here, if this is not the start step.
    pub fn previous(&self) -> Option<StepId> {
        self.previous
    }

    /// The linear successor, if any.
    pub fn next(&self) -> Option<StepId> {
        self.next
    }

    /// Named children at a fan-out point, in insertion order.
    pub fn branches(&self) -> &[(String, StepId)] {
        &self.branches
    }

    /// Branch keys in insertion order; this order drives menu presentation.
    pub fn branch_keys(&self) -> impl Iterator<Item = &str> {
        self.branches.iter().map(|(key, _)| key.as_str())
    }

    /// Resolves a branch key to its child step.
    pub fn branch(&self, key: &str) -> Option<StepId> {
        self.branches
            .iter()
            .find(|(k, _)| k.as_str() == key)
            .map(|(_, id)| *id)
    }

    /// True iff a forward transition exists: a linear successor or at
    /// least one branch.
    pub fn has_next(&self) -> bool {
        self.next.is_some() || !self.branches.is_empty()
    }

    pub fn has_previous(&self) -> bool {
        self.previous.is_some()
    }

    /// A terminal step offers no outgoing transition at all.
    pub fn is_terminal(&self) -> bool {
        !self.has_next()
    }
}
