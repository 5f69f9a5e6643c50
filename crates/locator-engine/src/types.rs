//! Resolution results and failure metadata

use serde::Serialize;

use crate::model::{Attribute, NameMatcher, SemanticNode};

/// Outcome of matching a locator (or one of its sequences) against a tree
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Resolution<N> {
    /// Matching elements, unique and in document order
    Found { elements: Vec<N> },

    /// Nothing matched; describes where matching stopped
    NotFound(NotFound<N>),
}

impl<N> Resolution<N> {
    pub fn is_found(&self) -> bool {
        matches!(self, Resolution::Found { .. })
    }

    /// Matched elements; empty for `NotFound`
    pub fn elements(&self) -> &[N] {
        match self {
            Resolution::Found { elements } => elements,
            Resolution::NotFound(_) => &[],
        }
    }

    pub fn into_elements(self) -> Vec<N> {
        match self {
            Resolution::Found { elements } => elements,
            Resolution::NotFound(_) => Vec::new(),
        }
    }

    pub fn failure(&self) -> Option<&NotFound<N>> {
        match self {
            Resolution::Found { .. } => None,
            Resolution::NotFound(failure) => Some(failure),
        }
    }
}

/// Failure metadata for a locator that matched nothing
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NotFound<N> {
    /// Leading nodes of the attempted sequence that matched in full
    pub closest_find: Vec<SemanticNode>,

    /// Candidate set at the point of failure
    pub elements_found: Vec<N>,

    /// The predicate that emptied the candidate set
    pub not_found: Missing,

    /// Predicates of the failing node that did match. Absent for role-stage failures.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partial_find: Option<PartialFind>,
}

impl<N> NotFound<N> {
    /// Specificity key: matched-node count, then matched-attribute count of
    /// the failing node. A role-stage failure ranks below any later stage.
    pub fn specificity(&self) -> (usize, Option<usize>) {
        (
            self.closest_find.len(),
            self.partial_find
                .as_ref()
                .map(|partial| partial.attributes.len()),
        )
    }

    /// True when `self` describes a strictly deeper failure than `other`
    pub fn is_more_specific_than(&self, other: &NotFound<N>) -> bool {
        self.specificity() > other.specificity()
    }
}

/// Predicate that no candidate satisfied
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Missing {
    Role(String),
    Attribute(Attribute),
    Name(NameMatcher),
}

/// The parts of the failing node that matched before the failing predicate
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PartialFind {
    pub role: String,
    pub attributes: Vec<Attribute>,
}

impl PartialFind {
    /// Render the matched part as a locator node, e.g. `{checkbox checked:true}`
    pub fn as_node(&self) -> SemanticNode {
        SemanticNode {
            role: self.role.clone(),
            attributes: self.attributes.clone(),
            name: None,
        }
    }
}
