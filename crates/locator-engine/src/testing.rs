//! In-memory tree for unit tests. Nodes must be added in document order.

use std::cmp::Ordering;
use std::collections::HashMap;

use crate::tree::AccessibilityTree;

#[derive(Debug, Clone)]
struct FakeNode {
    id: String,
    parent: Option<usize>,
    role: String,
    name: String,
    hidden: bool,
    attributes: HashMap<String, String>,
}

#[derive(Debug, Clone, Default)]
pub struct FakeTree {
    nodes: Vec<FakeNode>,
    reverse_role_lookup: bool,
}

pub struct FakeTreeBuilder {
    tree: FakeTree,
}

impl FakeTree {
    pub fn builder() -> FakeTreeBuilder {
        FakeTreeBuilder {
            tree: FakeTree::default(),
        }
    }

    pub fn id(&self, id: &str) -> usize {
        self.nodes
            .iter()
            .position(|node| node.id == id)
            .unwrap_or_else(|| panic!("unknown node {id}"))
    }

    pub fn ids(&self, ids: &[&str]) -> Vec<usize> {
        ids.iter().map(|id| self.id(id)).collect()
    }

    pub fn labels(&self, nodes: &[usize]) -> Vec<String> {
        nodes.iter().map(|n| self.nodes[*n].id.clone()).collect()
    }

    fn effectively_hidden(&self, index: usize) -> bool {
        let mut current = Some(index);
        while let Some(i) = current {
            if self.nodes[i].hidden {
                return true;
            }
            current = self.nodes[i].parent;
        }
        false
    }
}

impl FakeTreeBuilder {
    pub fn node(mut self, id: &str, parent: Option<&str>, role: &str) -> Self {
        let parent = parent.map(|p| self.tree.id(p));
        self.tree.nodes.push(FakeNode {
            id: id.to_string(),
            parent,
            role: role.to_string(),
            name: String::new(),
            hidden: false,
            attributes: HashMap::new(),
        });
        self
    }

    pub fn name(mut self, name: &str) -> Self {
        self.last().name = name.to_string();
        self
    }

    pub fn attr(mut self, key: &str, value: &str) -> Self {
        self.last().attributes.insert(key.to_string(), value.to_string());
        self
    }

    pub fn hidden(mut self) -> Self {
        self.last().hidden = true;
        self
    }

    /// Make role lookup return results in reverse document order
    pub fn reverse_role_lookup(mut self) -> Self {
        self.tree.reverse_role_lookup = true;
        self
    }

    pub fn build(self) -> FakeTree {
        self.tree
    }

    fn last(&mut self) -> &mut FakeNode {
        self.tree.nodes.last_mut().expect("no node added yet")
    }
}

impl AccessibilityTree for FakeTree {
    type Node = usize;

    fn find_by_role(&self, role: &str, base: &usize, include_hidden: bool) -> Vec<usize> {
        let mut found: Vec<usize> = (0..self.nodes.len())
            .filter(|i| self.is_ancestor(base, i))
            .filter(|i| self.nodes[*i].role == role)
            .filter(|i| include_hidden || !self.effectively_hidden(*i))
            .collect();
        if self.reverse_role_lookup {
            found.reverse();
        }
        found
    }

    fn attribute_value(&self, node: &usize, attribute: &str) -> Option<String> {
        self.nodes[*node].attributes.get(attribute).cloned()
    }

    fn accessible_name(&self, node: &usize) -> String {
        self.nodes[*node].name.clone()
    }

    fn document_order(&self, a: &usize, b: &usize) -> Ordering {
        a.cmp(b)
    }

    fn is_ancestor(&self, ancestor: &usize, node: &usize) -> bool {
        let mut current = self.nodes[*node].parent;
        while let Some(i) = current {
            if i == *ancestor {
                return true;
            }
            current = self.nodes[i].parent;
        }
        false
    }
}
