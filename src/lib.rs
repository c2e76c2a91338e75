//! # Annai - Branching Dialog-Flow Engine
//!
//! **Annai** drives menu-style, multi-step conversational wizards: a fixed
//! decision tree of steps is built once, and each user session walks it
//! with forward/backward transitions and explicit branch selection. Steps
//! without displayable content are skipped automatically, so a tree can
//! carry structural anchors (data-only steps) without the presentation
//! layer special-casing them.
//!
//! ## Core Workflow
//!
//! 1.  **Define the tree**: chain [`flow::FlowBuilder`] calls in code, or
//!     compile a declarative [`definition::DialogDefinition`] (e.g. parsed
//!     from JSON, or produced by your own format through the
//!     [`definition::IntoDialog`] trait).
//! 2.  **Share it**: the built [`flow::DialogFlow`] is immutable; wrap it
//!     in an `Arc` and hand it to every session.
//! 3.  **Navigate**: create one [`navigator::Navigator`] (or a
//!     [`adapter::DialogSession`], which adds the menu-selection state)
//!     per user session and feed user actions into it.
//! 4.  **Render**: after every transition, re-read the current step and
//!     its [`adapter::Controls`] to refresh the display.
//!
//! The crate performs no I/O and depends on no UI library; a presentation
//! layer (chat view, terminal, web) owns all event wiring. The shipped
//! [`triage`] module contains a complete example flow: a support-ticket
//! triage wizard ending in pre-selected help-center ticket links.
//!
//! ## Quick Start
//!
//! ```rust
//! use annai::prelude::*;
//!
//! // 1. Define the dialog tree once, at startup.
//! let mut builder = DialogFlow::builder("start");
//! let fork = builder
//!     .start()
//!     .link_next("pick_topic")
//!     .set_content("What do you need help with?")
//!     .id();
//! builder
//!     .at(fork)
//!     .link_branch("billing")
//!     .link_next("billing_info")
//!     .set_content("Billing answers live in the billing portal.");
//! builder
//!     .at(fork)
//!     .link_branch("outage")
//!     .link_next("outage_info")
//!     .set_content("Check the status page first.");
//! let flow = Arc::new(builder.build());
//!
//! // 2. One navigator per user session, over the shared tree.
//! let mut navigator = Navigator::new(Arc::clone(&flow));
//! navigator.go_forward(None);
//! assert_eq!(navigator.current_step().name(), "pick_topic");
//!
//! // 3. Entering a branch is always an explicit choice; the content-less
//! //    branch step itself is skipped on the way in.
//! navigator.go_forward(Some("outage"));
//! assert_eq!(navigator.current_step().content(), "Check the status page first.");
//! assert!(!navigator.has_next());
//!
//! // 4. Backward movement skips the content-less steps too.
//! navigator.go_back();
//! assert_eq!(navigator.current_step().name(), "pick_topic");
//! ```

pub mod adapter;
pub mod definition;
pub mod error;
pub mod flow;
pub mod navigator;
pub mod prelude;
pub mod triage;
