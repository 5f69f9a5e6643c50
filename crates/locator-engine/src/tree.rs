//! Tree capabilities consumed by the matcher
//!
//! The engine has no notion of markup. Everything it knows about a tree comes
//! through [`AccessibilityTree`].

use std::cmp::Ordering;
use std::fmt::Debug;
use std::hash::Hash;

/// Read-only view of an element tree with computed accessibility semantics.
///
/// Implementations must be stable for the duration of one resolution call.
pub trait AccessibilityTree {
    /// Opaque element handle; equality is identity
    type Node: Clone + Eq + Hash + Debug;

    /// All elements in the subtree under `base` whose computed role is `role`,
    /// in document order. Elements hidden from assistive technology are left
    /// out unless `include_hidden` is set.
    fn find_by_role(&self, role: &str, base: &Self::Node, include_hidden: bool) -> Vec<Self::Node>;

    /// Resolved value of an ARIA attribute (`checked`, `level`, ...)
    fn attribute_value(&self, node: &Self::Node, attribute: &str) -> Option<String>;

    /// Computed accessible name
    fn accessible_name(&self, node: &Self::Node) -> String;

    /// Total document order
    fn document_order(&self, a: &Self::Node, b: &Self::Node) -> Ordering;

    /// True when `ancestor` is a proper ancestor of `node`
    fn is_ancestor(&self, ancestor: &Self::Node, node: &Self::Node) -> bool;
}

/// Drop every element that has another member of the set as an ancestor.
/// Input order is preserved.
pub fn outermost<T: AccessibilityTree + ?Sized>(tree: &T, nodes: &[T::Node]) -> Vec<T::Node> {
    let mut kept: Vec<T::Node> = Vec::with_capacity(nodes.len());
    for node in nodes {
        if kept.contains(node) {
            continue;
        }
        let covered = nodes
            .iter()
            .any(|other| other != node && tree.is_ancestor(other, node));
        if !covered {
            kept.push(node.clone());
        }
    }
    kept
}

/// Sort by document order and drop repeated elements
pub fn sort_unique<T: AccessibilityTree + ?Sized>(tree: &T, nodes: &mut Vec<T::Node>) {
    nodes.sort_by(|a, b| tree.document_order(a, b));
    nodes.dedup();
}

/// Strictly increasing under document order (which also rules out duplicates)
pub fn is_document_ordered<T: AccessibilityTree + ?Sized>(tree: &T, nodes: &[T::Node]) -> bool {
    nodes
        .windows(2)
        .all(|pair| tree.document_order(&pair[0], &pair[1]) == Ordering::Less)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeTree;
    use pretty_assertions::assert_eq;

    fn tree() -> FakeTree {
        // 0 root
        //   1 list
        //     2 listitem
        //       3 list
        //     4 listitem
        //   5 list
        FakeTree::builder()
            .node("root", None, "generic")
            .node("a", Some("root"), "list")
            .node("a1", Some("a"), "listitem")
            .node("a1x", Some("a1"), "list")
            .node("a2", Some("a"), "listitem")
            .node("b", Some("root"), "list")
            .build()
    }

    #[test]
    fn test_outermost_removes_nested_members() {
        let tree = tree();
        let nodes = tree.ids(&["a1x", "a", "b", "a2"]);
        assert_eq!(outermost(&tree, &nodes), tree.ids(&["a", "b"]));
    }

    #[test]
    fn test_outermost_keeps_unrelated_in_input_order() {
        let tree = tree();
        let nodes = tree.ids(&["b", "a2", "a1x"]);
        assert_eq!(outermost(&tree, &nodes), tree.ids(&["b", "a2", "a1x"]));
    }

    #[test]
    fn test_sort_unique() {
        let tree = tree();
        let mut nodes = tree.ids(&["b", "a1", "a", "a1"]);
        sort_unique(&tree, &mut nodes);
        assert_eq!(nodes, tree.ids(&["a", "a1", "b"]));
        assert!(is_document_ordered(&tree, &nodes));
    }

    #[test]
    fn test_duplicates_are_not_document_ordered() {
        let tree = tree();
        assert!(!is_document_ordered(&tree, &tree.ids(&["a", "a"])));
        assert!(!is_document_ordered(&tree, &tree.ids(&["b", "a"])));
        assert!(is_document_ordered(&tree, &[]));
    }
}
