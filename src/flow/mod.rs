//! The dialog tree: an arena of steps addressed by stable index.

pub mod builder;
pub mod step;

pub use builder::{FlowBuilder, StepBuilder};
pub use step::{Step, StepData, StepId};

use crate::error::FlowIntegrityError;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// A complete dialog tree, fixed after construction.
///
/// A flow is built once per process (by a [`FlowBuilder`] or compiled from
/// a declarative definition) and shared read-only across all active
/// sessions, typically behind an `Arc`. Each session then owns a
/// `Navigator` holding its private cursor into the shared arena.
///
/// Step names are labels, not keys: several terminals may share a
/// conventional name such as `open_ticket`. Terminal steps are identified
/// structurally, by the absence of outgoing links.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DialogFlow {
    pub(crate) steps: Vec<Step>,
    pub(crate) start: StepId,
}

impl DialogFlow {
    /// Starts chained construction with the given start-step name.
    pub fn builder(start_name: &str) -> FlowBuilder {
        FlowBuilder::new(start_name)
    }

    /// The entry step of the dialog.
    pub fn start(&self) -> StepId {
        self.start
    }

    /// Borrows a step by id.
    ///
    /// Ids are only ever produced by this flow's builder and accessors, so
    /// an out-of-range id is a caller bug and panics via slice indexing.
    pub fn step(&self, id: StepId) -> &Step {
        &self.steps[id.0]
    }

    /// Finds the first step carrying the given name.
    pub fn step_named(&self, name: &str) -> Option<(StepId, &Step)> {
        self.steps().find(|(_, step)| step.name == name)
    }

    /// Iterates all steps with their ids, in arena order.
    pub fn steps(&self) -> impl Iterator<Item = (StepId, &Step)> {
        self.steps
            .iter()
            .enumerate()
            .map(|(index, step)| (StepId(index), step))
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Checks the structural invariants of the tree: branch keys are
    /// unique per step, every linked child points back at its parent, and
    /// every step is reachable from the start step.
    pub fn validate(&self) -> Result<(), FlowIntegrityError> {
        for step in &self.steps {
            if let Some(key) = step.branches.iter().map(|(k, _)| k.as_str()).duplicates().next() {
                return Err(FlowIntegrityError::DuplicateBranchKey {
                    step: step.name.clone(),
                    key: key.to_string(),
                });
            }
        }

        for (id, step) in self.steps() {
            let children = step
                .next
                .into_iter()
                .chain(step.branches.iter().map(|&(_, child)| child));
            for child in children {
                if self.step(child).previous != Some(id) {
                    return Err(FlowIntegrityError::BrokenBackLink {
                        parent: step.name.clone(),
                        child: self.step(child).name.clone(),
                    });
                }
            }
        }

        let mut seen = vec![false; self.steps.len()];
        let mut stack = vec![self.start];
        while let Some(id) = stack.pop() {
            if std::mem::replace(&mut seen[id.0], true) {
                continue;
            }
            let step = self.step(id);
            stack.extend(step.next);
            stack.extend(step.branches.iter().map(|&(_, child)| child));
        }
        if let Some((index, _)) = seen.iter().enumerate().find(|&(_, visited)| !*visited) {
            return Err(FlowIntegrityError::UnreachableStep(
                self.steps[index].name.clone(),
            ));
        }

        Ok(())
    }
}
