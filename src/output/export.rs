// JSON snapshot export.
//
// Writes every aggregate plus the violin and point geometry to a single
// JSON document that a front-end can load without recomputing anything.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::aggregate::Snapshot;
use crate::geometry::points::{scatter_geometry, PointGeometry};
use crate::geometry::violin::{violin_geometry, ViolinGeometry};

/// The exported document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportDocument {
    pub generated_at: DateTime<Utc>,
    /// Dataset location the snapshot was computed from
    pub source: String,
    #[serde(flatten)]
    pub snapshot: Snapshot,
    pub violins: Vec<ViolinGeometry>,
    pub points: Vec<PointGeometry>,
}

impl ExportDocument {
    pub fn new(source: &str, snapshot: Snapshot) -> Self {
        let violins = violin_geometry(&snapshot.toxicity);
        let points = scatter_geometry(&snapshot.scatter);
        Self {
            generated_at: Utc::now(),
            source: source.to_string(),
            snapshot,
            violins,
            points,
        }
    }
}

/// Write the export document as pretty-printed JSON, creating parent
/// directories as needed. Returns the path written.
pub fn write_snapshot(document: &ExportDocument, path: &str) -> Result<String> {
    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
    }

    let json = serde_json::to_string_pretty(document).context("Failed to serialize snapshot")?;
    std::fs::write(path, json).with_context(|| format!("Failed to write snapshot: {path}"))?;

    info!(path, "Snapshot written");
    Ok(path.to_string())
}
