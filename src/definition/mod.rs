//! Declarative dialog definitions and their conversion into flows.
//!
//! The engine is format-agnostic: custom formats convert into the
//! canonical [`DialogDefinition`], which compiles into an executable
//! `DialogFlow`. The hand-built way (the `FlowBuilder` chain) skips this
//! layer entirely.

pub mod conversion;
pub mod model;

pub use conversion::*;
pub use model::*;
