//! Node and sequence matching
//!
//! A node narrows a base set in three stages: role lookup under every base,
//! then each attribute in list order, then the accessible name. A sequence
//! feeds each node's output, reduced to its outermost members, into the next.

use tracing::{debug, warn};

use crate::errors::LocatorError;
use crate::model::SemanticNode;
use crate::tree::{is_document_ordered, outermost, AccessibilityTree};
use crate::types::{Missing, NotFound, PartialFind, Resolution};

/// Result of matching a single node
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum NodeMatch<N> {
    Matched(Vec<N>),
    Failed(NodeFailure<N>),
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct NodeFailure<N> {
    pub elements_found: Vec<N>,
    pub not_found: Missing,
    pub partial_find: Option<PartialFind>,
}

/// Match one node against `bases`, which must be non-empty and outermost.
pub(crate) fn match_node<T: AccessibilityTree + ?Sized>(
    tree: &T,
    node: &SemanticNode,
    bases: &[T::Node],
    include_hidden: bool,
) -> Result<NodeMatch<T::Node>, LocatorError> {
    let mut candidates: Vec<T::Node> = bases
        .iter()
        .flat_map(|base| tree.find_by_role(&node.role, base, include_hidden))
        .collect();
    debug!(
        role = %node.role,
        bases = bases.len(),
        candidates = candidates.len(),
        "role lookup"
    );
    if candidates.is_empty() {
        return Ok(NodeMatch::Failed(NodeFailure {
            elements_found: bases.to_vec(),
            not_found: Missing::Role(node.role.clone()),
            partial_find: None,
        }));
    }

    for (index, attribute) in node.attributes.iter().enumerate() {
        let filtered: Vec<T::Node> = candidates
            .iter()
            .filter(|candidate| {
                tree.attribute_value(candidate, &attribute.name).as_deref()
                    == Some(attribute.value.as_str())
            })
            .cloned()
            .collect();
        debug!(%attribute, remaining = filtered.len(), "attribute filter");
        if filtered.is_empty() {
            return Ok(NodeMatch::Failed(NodeFailure {
                elements_found: candidates,
                not_found: Missing::Attribute(attribute.clone()),
                partial_find: Some(PartialFind {
                    role: node.role.clone(),
                    attributes: node.attributes[..index].to_vec(),
                }),
            }));
        }
        candidates = filtered;
    }

    if let Some(name) = &node.name {
        let filtered: Vec<T::Node> = candidates
            .iter()
            .filter(|candidate| name.matches(&tree.accessible_name(candidate)))
            .cloned()
            .collect();
        debug!(%name, remaining = filtered.len(), "name filter");
        if filtered.is_empty() {
            return Ok(NodeMatch::Failed(NodeFailure {
                elements_found: candidates,
                not_found: Missing::Name(name.clone()),
                partial_find: Some(PartialFind {
                    role: node.role.clone(),
                    attributes: node.attributes.clone(),
                }),
            }));
        }
        candidates = filtered;
    }

    if !is_document_ordered(tree, &candidates) {
        warn!(role = %node.role, "role lookup returned elements out of document order");
        return Err(LocatorError::internal(format!(
            "role lookup for `{}` did not return elements in document order",
            node.role
        )));
    }

    Ok(NodeMatch::Matched(candidates))
}

/// Match `nodes` in order starting from `bases`, stopping at the first failure.
pub(crate) fn match_sequence<T: AccessibilityTree + ?Sized>(
    tree: &T,
    nodes: &[SemanticNode],
    bases: Vec<T::Node>,
    include_hidden: bool,
) -> Result<Resolution<T::Node>, LocatorError> {
    let mut current = bases;
    for (index, node) in nodes.iter().enumerate() {
        let step_bases = outermost(tree, &current);
        match match_node(tree, node, &step_bases, include_hidden)? {
            NodeMatch::Matched(next) => current = next,
            NodeMatch::Failed(failure) => {
                debug!(step = index, node = %node, "sequence stopped");
                return Ok(Resolution::NotFound(NotFound {
                    closest_find: nodes[..index].to_vec(),
                    elements_found: failure.elements_found,
                    not_found: failure.not_found,
                    partial_find: failure.partial_find,
                }));
            }
        }
    }
    Ok(Resolution::Found { elements: current })
}
