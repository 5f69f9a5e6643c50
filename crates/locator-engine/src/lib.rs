//! Semantic locator resolution
//!
//! Finds elements the way an assistive-technology user perceives them:
//! - Locators such as `{list 'Cities'} outer {listitem checked:true}`
//! - Role lookup, attribute filtering and name matching per node
//! - `outer` matched per leading element, then merged in document order
//! - Structured [`NotFound`] metadata and readable failure messages
//!
//! The tree itself is supplied through [`AccessibilityTree`].

pub mod diagnostics;
pub mod errors;
mod matcher;
pub mod model;
pub mod policy;
pub mod resolver;
pub mod syntax;
pub mod tree;
pub mod types;

#[cfg(test)]
pub(crate) mod testing;

pub use diagnostics::{describe_failure, failure_message};
pub use errors::LocatorError;
pub use model::{normalize_whitespace, Attribute, NameMatcher, SemanticLocator, SemanticNode};
pub use policy::ResolveOptions;
pub use resolver::{find_all, find_first, resolve, Resolver};
pub use syntax::{parse, supported_attributes};
pub use tree::{outermost, sort_unique, AccessibilityTree};
pub use types::{Missing, NotFound, PartialFind, Resolution};
