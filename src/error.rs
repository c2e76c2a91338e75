use thiserror::Error;

/// Violations of the structural invariants of a built dialog tree.
///
/// A hand-built tree cannot produce these (the builder wires both link
/// directions itself); they exist for trees compiled from external
/// definitions and for test assertions.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FlowIntegrityError {
    #[error("branch key '{key}' appears more than once on step '{step}'")]
    DuplicateBranchKey { step: String, key: String },

    #[error("step '{child}' is linked from '{parent}' but its back-reference points elsewhere")]
    BrokenBackLink { parent: String, child: String },

    #[error("step '{0}' is not reachable from the start step")]
    UnreachableStep(String),
}

/// Errors that can occur when compiling a declarative dialog definition
/// into an executable flow.
//
// NOTE: this enum is hand-implemented (Display/Error/From) rather than using
// `#[derive(Error)]` because the `TargetNotFound` variant has a field literally
// named `source`, which thiserror unconditionally treats as the error source
// and then requires to implement `std::error::Error`. The field is plain data
// (the id of the referring step), so the derive cannot be used. The impls below
// reproduce exactly what the derive would have generated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogConversionError {
    JsonParse(String),

    EmptyDefinition,

    StartNotFound(String),

    DuplicateStep(String),

    TargetNotFound { source: String, target: String },

    Integrity(FlowIntegrityError),
}

impl std::fmt::Display for DialogConversionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::JsonParse(msg) => {
                write!(f, "failed to parse dialog definition JSON: {msg}")
            }
            Self::EmptyDefinition => write!(f, "definition contains no steps"),
            Self::StartNotFound(s) => write!(f, "start step '{s}' is not defined"),
            Self::DuplicateStep(s) => write!(f, "step '{s}' is defined more than once"),
            Self::TargetNotFound { source, target } => write!(
                f,
                "step '{target}' is referenced by '{source}' but is not defined"
            ),
            Self::Integrity(e) => {
                write!(f, "definition produced an inconsistent tree: {e}")
            }
        }
    }
}

impl std::error::Error for DialogConversionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Integrity(e) => Some(e),
            _ => None,
        }
    }
}

impl From<FlowIntegrityError> for DialogConversionError {
    fn from(e: FlowIntegrityError) -> Self {
        Self::Integrity(e)
    }
}
