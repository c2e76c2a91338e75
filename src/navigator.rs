//! Per-session cursor over a shared dialog tree.

use crate::flow::{DialogFlow, Step, StepId};
use std::sync::Arc;

/// A mutable cursor over an immutable, shared [`DialogFlow`].
///
/// One `Navigator` exists per user session; the flow itself is shared
/// read-only across sessions, so no locking is needed. Transitions are
/// synchronous and perform no I/O.
///
/// Steps with empty content are structural anchors (they hold data or
/// shape without prompting the user), so linear movement walks straight
/// past them: a transition only ever rests the cursor on a step with
/// something to display, except possibly the start step.
///
/// Transition preconditions are the caller's responsibility. The
/// presentation layer is expected to offer only controls consistent with
/// [`Navigator::has_next`] / [`Navigator::has_previous`]; violating a
/// precondition is a bug in the caller and panics rather than silently
/// desynchronizing the displayed controls from the cursor.
pub struct Navigator {
    flow: Arc<DialogFlow>,
    current: StepId,
}

impl Navigator {
    /// Opens a new session positioned at the flow's start step.
    pub fn new(flow: Arc<DialogFlow>) -> Self {
        let current = flow.start();
        Self { flow, current }
    }

    /// The shared flow this navigator walks.
    pub fn flow(&self) -> &DialogFlow {
        &self.flow
    }

    /// Read-only view of the step under the cursor.
    pub fn current_step(&self) -> &Step {
        self.flow.step(self.current)
    }

    /// Arena id of the step under the cursor.
    pub fn current_id(&self) -> StepId {
        self.current
    }

    /// True iff a forward transition (linear or branch) exists.
    pub fn has_next(&self) -> bool {
        self.current_step().has_next()
    }

    /// True iff a backward transition exists.
    pub fn has_previous(&self) -> bool {
        self.current_step().has_previous()
    }

    /// Moves the cursor to the previous step, then keeps moving backward
    /// while the reached step has a previous step and empty content.
    ///
    /// The loop is bounded by `previous` presence: the start step has
    /// none, so the walk stops there even when its content is empty. Note
    /// the deliberate asymmetry with the forward walk, which is bounded by
    /// `next` presence instead.
    ///
    /// # Panics
    ///
    /// Panics when called on the start step.
    pub fn go_back(&mut self) {
        let step = self.current_step();
        let Some(mut id) = step.previous() else {
            panic!("cannot go back from start step '{}'", step.name());
        };
        loop {
            let step = self.flow.step(id);
            match step.previous() {
                Some(previous) if step.content().is_empty() => id = previous,
                _ => break,
            }
        }
        self.current = id;
    }

    /// Moves the cursor forward: into the child named by `branch`, or to
    /// the linear successor when `branch` is `None`. Afterwards keeps
    /// moving along `next` while the reached step has a linear successor
    /// and empty content.
    ///
    /// The skip never descends into branches, so an empty-content branch
    /// point still stops the walk: entering a branch is always an explicit
    /// user choice, never an automatic one. The loop is bounded by `next`
    /// presence: a terminal step has none.
    ///
    /// # Panics
    ///
    /// Panics when `branch` names no branch of the current step, or when
    /// `branch` is `None` and the current step has no linear successor.
    pub fn go_forward(&mut self, branch: Option<&str>) {
        let step = self.current_step();
        let mut id = match branch {
            Some(key) => step.branch(key).unwrap_or_else(|| {
                panic!("step '{}' has no branch named '{}'", step.name(), key)
            }),
            None => step
                .next()
                .unwrap_or_else(|| panic!("step '{}' has no next step", step.name())),
        };
        loop {
            let step = self.flow.step(id);
            match step.next() {
                Some(next) if step.content().is_empty() => id = next,
                _ => break,
            }
        }
        self.current = id;
    }
}
