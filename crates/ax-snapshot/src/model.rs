use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Top-level snapshot document
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SnapshotDocument {
    pub root: ElementSpec,
}

/// One element as written in a snapshot file
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ElementSpec {
    pub id: Option<String>,
    pub tag: Option<String>,
    /// Explicit role; overrides the role implied by `tag`
    pub role: Option<String>,
    /// Computed accessible name
    pub name: Option<String>,
    pub hidden: bool,
    pub attributes: BTreeMap<String, Value>,
    pub children: Vec<ElementSpec>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SnapshotFormat {
    Json,
    Yaml,
}

impl SnapshotFormat {
    /// Pick the format from a file extension, defaulting to JSON
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .as_deref()
        {
            Some("yaml") | Some("yml") => SnapshotFormat::Yaml,
            _ => SnapshotFormat::Json,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SnapshotFormat::Json => "json",
            SnapshotFormat::Yaml => "yaml",
        }
    }
}

/// Element handle: the pre-order index of the element in its snapshot
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct NodeId(pub usize);

/// Printable description of a resolved element
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NodeSummary {
    pub index: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    pub name: String,
    pub hidden: bool,
}
