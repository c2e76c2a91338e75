use super::DialogFlow;
use super::step::{Step, StepId};

/// Accumulates the step arena for a `DialogFlow` under construction.
///
/// All construction happens through [`StepBuilder`] handles obtained from
/// [`FlowBuilder::start`] or [`FlowBuilder::at`]; the handles carry the
/// chaining ergonomics while the arena stays in one place.
pub struct FlowBuilder {
    steps: Vec<Step>,
    start: StepId,
}

impl FlowBuilder {
    /// Creates a builder whose arena holds a single, content-less start step.
    pub fn new(start_name: &str) -> Self {
        Self {
            steps: vec![Step::new(start_name, None)],
            start: StepId(0),
        }
    }

    /// A handle on the start step.
    pub fn start(&mut self) -> StepBuilder<'_> {
        let id = self.start;
        StepBuilder { flow: self, id }
    }

    /// Re-anchors a chain on a previously created step.
    pub fn at(&mut self, id: StepId) -> StepBuilder<'_> {
        StepBuilder { flow: self, id }
    }

    /// Freezes the arena into an immutable flow.
    pub fn build(self) -> DialogFlow {
        DialogFlow {
            steps: self.steps,
            start: self.start,
        }
    }

    fn push(&mut self, name: &str, previous: StepId) -> StepId {
        let id = StepId(self.steps.len());
        self.steps.push(Step::new(name, Some(previous)));
        id
    }
}

/// A chaining handle on one step of a [`FlowBuilder`] arena.
///
/// The linking methods return a handle on the *new* step, so a whole
/// sub-chain reads as one expression; `set_content`/`set_data` return the
/// same handle. These are construction-time calls on a tree the caller
/// fully controls, so none of them can fail.
pub struct StepBuilder<'a> {
    flow: &'a mut FlowBuilder,
    id: StepId,
}

impl StepBuilder<'_> {
    /// The id of the step this handle points at, for later re-anchoring.
    pub fn id(&self) -> StepId {
        self.id
    }

    /// Appends a new step as this step's linear successor and returns a
    /// handle on the new step. The back-reference is wired automatically.
    pub fn link_next(self, name: &str) -> Self {
        let child = self.flow.push(name, self.id);
        self.flow.steps[self.id.0].next = Some(child);
        Self {
            flow: self.flow,
            id: child,
        }
    }

    /// Appends a new step under the given branch key and returns a handle
    /// on the new step. The new step is named after the key; the
    /// back-reference is wired automatically.
    pub fn link_branch(self, key: &str) -> Self {
        let child = self.flow.push(key, self.id);
        self.flow.steps[self.id.0]
            .branches
            .push((key.to_string(), child));
        Self {
            flow: self.flow,
            id: child,
        }
    }

    /// Sets the displayed content of this step.
    pub fn set_content(self, content: &str) -> Self {
        self.flow.steps[self.id.0].content = content.to_string();
        self
    }

    /// Sets one auxiliary data value on this step.
    pub fn set_data(self, key: &str, value: &str) -> Self {
        self.flow.steps[self.id.0]
            .data
            .insert(key.to_string(), value.to_string());
        self
    }
}
