//! The contract between the engine and a presentation layer.
//!
//! A presentation layer (a chat view, a terminal, ...) renders the
//! current step and turns user actions into exactly one transition each.
//! [`Controls`] tells it which affordances to show; [`DialogSession`]
//! adds the one piece of state the adapter must hold itself: the branch
//! choice picked from the menu but not yet confirmed.

use crate::flow::{DialogFlow, Step};
use crate::navigator::Navigator;
use std::sync::Arc;

/// Default label of the forward control.
pub const DEFAULT_FORWARD_LABEL: &str = "Proceed";

/// Data key overriding the forward control's label on a specific step.
pub const FORWARD_LABEL_KEY: &str = "next-label";

/// Which controls the presentation layer should render for one step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Controls {
    /// Show a back control.
    pub back: bool,
    /// Show a forward control with this label; `None` hides it.
    pub forward: Option<String>,
    /// Branch keys to offer as a menu, in insertion order. Empty away
    /// from the branch point.
    pub menu: Vec<String>,
}

/// One user's dialog session: a navigator plus the pending branch choice.
///
/// At a branch point the forward control stays hidden until the user has
/// picked a menu entry; picking only arms the control, confirming performs
/// the transition. The navigator itself does not enforce this; it is a
/// presentation rule, kept here so every adapter inherits it.
pub struct DialogSession {
    navigator: Navigator,
    pending_branch: Option<String>,
}

impl DialogSession {
    /// Opens a session at the start of the shared flow.
    pub fn new(flow: Arc<DialogFlow>) -> Self {
        Self {
            navigator: Navigator::new(flow),
            pending_branch: None,
        }
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn current_step(&self) -> &Step {
        self.navigator.current_step()
    }

    /// The branch key picked from the menu but not yet confirmed.
    pub fn pending_branch(&self) -> Option<&str> {
        self.pending_branch.as_deref()
    }

    /// Records a menu selection, arming the forward control.
    ///
    /// # Panics
    ///
    /// Panics when the current step has no branch under `key`. Menu keys
    /// come from a closed set and must be used verbatim.
    pub fn select_branch(&mut self, key: &str) {
        let step = self.navigator.current_step();
        if step.branch(key).is_none() {
            panic!("step '{}' has no branch named '{}'", step.name(), key);
        }
        self.pending_branch = Some(key.to_string());
    }

    /// Confirms the forward transition: the pending branch choice at a
    /// branch point, the linear successor otherwise.
    ///
    /// # Panics
    ///
    /// Panics when no transition is armed: at a branch point without a
    /// selection, or on a terminal step.
    pub fn advance(&mut self) {
        match self.pending_branch.take() {
            Some(key) => self.navigator.go_forward(Some(&key)),
            None => self.navigator.go_forward(None),
        }
    }

    /// Steps backward, discarding any unconfirmed menu selection.
    pub fn back(&mut self) {
        self.pending_branch = None;
        self.navigator.go_back();
    }

    /// Derives the controls to render for the current step.
    pub fn controls(&self) -> Controls {
        let step = self.navigator.current_step();
        let at_branch_point = !step.branches().is_empty();

        let forward_armed = if at_branch_point {
            self.pending_branch.is_some()
        } else {
            step.next().is_some()
        };
        let forward = forward_armed.then(|| {
            step.data_value(FORWARD_LABEL_KEY)
                .unwrap_or(DEFAULT_FORWARD_LABEL)
                .to_string()
        });

        Controls {
            back: step.has_previous(),
            forward,
            menu: step.branch_keys().map(str::to_string).collect(),
        }
    }
}
