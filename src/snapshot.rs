//! Snapshot file loading

use std::path::Path;

use anyhow::{Context, Result};
use ax_snapshot::{AxSnapshot, NodeId, SnapshotFormat};
use tokio::fs;
use tracing::info;

/// Read a JSON or YAML snapshot; the format follows the file extension
pub async fn load_snapshot(path: &Path) -> Result<AxSnapshot> {
    let contents = fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read snapshot {}", path.display()))?;
    let format = SnapshotFormat::from_path(path);
    let snapshot = AxSnapshot::parse(&contents, format)
        .with_context(|| format!("Failed to load snapshot {}", path.display()))?;
    info!(
        path = %path.display(),
        format = format.name(),
        elements = snapshot.len(),
        "Loaded snapshot"
    );
    Ok(snapshot)
}

/// Search root: the element with `id`, or the snapshot root
pub fn search_root(snapshot: &AxSnapshot, id: Option<&str>) -> Result<NodeId> {
    match id {
        Some(id) => Ok(snapshot.require(id)?),
        None => Ok(snapshot.root()),
    }
}
