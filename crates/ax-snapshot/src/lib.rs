//! Accessibility snapshot for semantic locator resolution
//!
//! Loads a JSON/YAML element tree, computes roles, resolved ARIA attributes,
//! accessible names and hidden-ness, and exposes them through
//! [`locator_engine::AccessibilityTree`].

pub mod errors;
pub mod model;
pub mod roles;
pub mod snapshot;

pub use errors::SnapshotError;
pub use model::{ElementSpec, NodeId, NodeSummary, SnapshotDocument, SnapshotFormat};
pub use snapshot::AxSnapshot;
