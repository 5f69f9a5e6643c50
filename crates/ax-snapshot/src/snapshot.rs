use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};

use locator_engine::{normalize_whitespace, AccessibilityTree};
use serde_json::Value;
use tracing::debug;

use crate::errors::SnapshotError;
use crate::model::{ElementSpec, NodeId, NodeSummary, SnapshotDocument, SnapshotFormat};
use crate::roles::{implicit_level, implicit_role};

/// Attributes that resolve to `false` when the element does not set them
const FALSE_BY_DEFAULT: &[&str] = &[
    "checked", "current", "disabled", "pressed", "readonly", "selected",
];

/// HTML boolean attributes; presence means `true` whatever the value
const NATIVE_BOOLEAN: &[&str] = &["checked", "disabled", "hidden", "readonly", "selected"];

#[derive(Clone, Debug)]
struct ElementRecord {
    id: Option<String>,
    tag: Option<String>,
    role: Option<String>,
    name: String,
    /// Hidden itself or through an ancestor
    hidden: bool,
    parent: Option<usize>,
    /// One past the pre-order index of the last descendant
    subtree_end: usize,
    attributes: BTreeMap<String, Value>,
}

/// Element tree stored in pre-order, so a [`NodeId`] doubles as document position
#[derive(Clone, Debug)]
pub struct AxSnapshot {
    records: Vec<ElementRecord>,
    ids: HashMap<String, NodeId>,
}

impl AxSnapshot {
    pub fn parse(text: &str, format: SnapshotFormat) -> Result<Self, SnapshotError> {
        match format {
            SnapshotFormat::Json => Self::from_json_str(text),
            SnapshotFormat::Yaml => Self::from_yaml_str(text),
        }
    }

    pub fn from_json_str(text: &str) -> Result<Self, SnapshotError> {
        let document: SnapshotDocument =
            serde_json::from_str(text).map_err(|err| SnapshotError::parse("json", err))?;
        Self::from_document(document)
    }

    pub fn from_yaml_str(text: &str) -> Result<Self, SnapshotError> {
        let document: SnapshotDocument =
            serde_yaml::from_str(text).map_err(|err| SnapshotError::parse("yaml", err))?;
        Self::from_document(document)
    }

    pub fn from_document(document: SnapshotDocument) -> Result<Self, SnapshotError> {
        Self::from_root(document.root)
    }

    pub fn from_root(root: ElementSpec) -> Result<Self, SnapshotError> {
        let mut snapshot = Self {
            records: Vec::new(),
            ids: HashMap::new(),
        };
        snapshot.push(root, None, false)?;
        debug!(elements = snapshot.records.len(), "snapshot loaded");
        Ok(snapshot)
    }

    fn push(
        &mut self,
        spec: ElementSpec,
        parent: Option<usize>,
        parent_hidden: bool,
    ) -> Result<(), SnapshotError> {
        let index = self.records.len();
        if let Some(id) = &spec.id {
            if self.ids.insert(id.clone(), NodeId(index)).is_some() {
                return Err(SnapshotError::DuplicateId(id.clone()));
            }
        }

        let hidden = parent_hidden
            || spec.hidden
            || attr_flag_true(&spec.attributes, "aria-hidden")
            || native_flag(&spec.attributes, "hidden") == Some(true);
        let role = spec
            .role
            .as_deref()
            .and_then(|role| role.split_whitespace().next())
            .map(|role| role.to_ascii_lowercase())
            .or_else(|| {
                spec.tag
                    .as_deref()
                    .and_then(|tag| implicit_role(tag, &spec.attributes))
                    .map(str::to_string)
            });

        self.records.push(ElementRecord {
            id: spec.id,
            tag: spec.tag,
            role,
            name: normalize_whitespace(spec.name.as_deref().unwrap_or_default()),
            hidden,
            parent,
            subtree_end: index + 1,
            attributes: spec.attributes,
        });

        for child in spec.children {
            self.push(child, Some(index), hidden)?;
        }
        self.records[index].subtree_end = self.records.len();
        Ok(())
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn node_by_id(&self, id: &str) -> Option<NodeId> {
        self.ids.get(id).copied()
    }

    pub fn require(&self, id: &str) -> Result<NodeId, SnapshotError> {
        self.node_by_id(id)
            .ok_or_else(|| SnapshotError::UnknownId(id.to_string()))
    }

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.records[node.0].parent.map(NodeId)
    }

    pub fn role(&self, node: NodeId) -> Option<&str> {
        self.records[node.0].role.as_deref()
    }

    pub fn is_hidden(&self, node: NodeId) -> bool {
        self.records[node.0].hidden
    }

    pub fn summary(&self, node: NodeId) -> NodeSummary {
        let record = &self.records[node.0];
        NodeSummary {
            index: node.0,
            id: record.id.clone(),
            role: record.role.clone(),
            name: record.name.clone(),
            hidden: record.hidden,
        }
    }
}

impl AccessibilityTree for AxSnapshot {
    type Node = NodeId;

    fn find_by_role(&self, role: &str, base: &NodeId, include_hidden: bool) -> Vec<NodeId> {
        let end = self.records[base.0].subtree_end;
        (base.0 + 1..end)
            .filter(|index| {
                let record = &self.records[*index];
                record.role.as_deref() == Some(role) && (include_hidden || !record.hidden)
            })
            .map(NodeId)
            .collect()
    }

    fn attribute_value(&self, node: &NodeId, attribute: &str) -> Option<String> {
        let record = &self.records[node.0];
        let aria_key = format!("aria-{attribute}");
        let explicit = record
            .attributes
            .get(&aria_key)
            .and_then(value_to_token)
            .or_else(|| {
                if NATIVE_BOOLEAN.contains(&attribute) {
                    native_flag(&record.attributes, attribute).map(|flag| flag.to_string())
                } else {
                    record.attributes.get(attribute).and_then(value_to_token)
                }
            });
        if explicit.is_some() {
            return explicit;
        }
        if attribute == "level" {
            return record.tag.as_deref().and_then(implicit_level);
        }
        FALSE_BY_DEFAULT
            .contains(&attribute)
            .then(|| "false".to_string())
    }

    fn accessible_name(&self, node: &NodeId) -> String {
        self.records[node.0].name.clone()
    }

    fn document_order(&self, a: &NodeId, b: &NodeId) -> Ordering {
        a.0.cmp(&b.0)
    }

    fn is_ancestor(&self, ancestor: &NodeId, node: &NodeId) -> bool {
        ancestor.0 < node.0 && node.0 < self.records[ancestor.0].subtree_end
    }
}

/// Attribute value as a lower-case token; a bare attribute counts as `true`
fn value_to_token(value: &Value) -> Option<String> {
    match value {
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Number(num) => Some(num.to_string()),
        Value::String(s) => {
            let normalized = s.trim().to_ascii_lowercase();
            if normalized.is_empty() {
                Some("true".to_string())
            } else {
                Some(normalized)
            }
        }
        Value::Null => Some("true".to_string()),
        _ => None,
    }
}

fn attr_flag_true(attrs: &BTreeMap<String, Value>, key: &str) -> bool {
    attrs
        .get(key)
        .and_then(value_to_token)
        .map_or(false, |token| token == "true")
}

/// Present boolean attribute: `checked`, `checked="checked"` and `checked=""`
/// are all `true`; only an explicit `false` turns it off
fn native_flag(attrs: &BTreeMap<String, Value>, key: &str) -> Option<bool> {
    attrs.get(key).map(|value| match value {
        Value::Bool(flag) => *flag,
        Value::String(s) => !s.trim().eq_ignore_ascii_case("false"),
        _ => true,
    })
}
