//! Prelude module for convenient imports
//!
//! Re-exports the most commonly used types from the annai crate. Import
//! this module to get the core functionality without importing each type
//! individually.

// Flow construction and navigation
pub use crate::flow::{DialogFlow, FlowBuilder, Step, StepBuilder, StepData, StepId};
pub use crate::navigator::Navigator;

// Declarative definitions
pub use crate::definition::{BranchDefinition, DialogDefinition, IntoDialog, StepDefinition};

// Presentation contract
pub use crate::adapter::{Controls, DEFAULT_FORWARD_LABEL, DialogSession, FORWARD_LABEL_KEY};

// The shipped triage dialog
pub use crate::triage::{BASE_TICKET_URL, IssueType, TICKET_ID_KEY, ticket_triage_flow, ticket_url};

// Error types
pub use crate::error::{DialogConversionError, FlowIntegrityError};

// Standard library re-exports commonly used with this crate
pub use std::sync::Arc;

// Result type alias for application code driving the engine
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
