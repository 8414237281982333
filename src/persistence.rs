//! Catalog persistence.
//!
//! The catalog is one JSON snapshot on disk: load-or-create at session
//! start, save on demand. The snapshot format is private to this module;
//! the rest of the crate only sees `LocalizationModel`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::model::LocalizationModel;

const FORMAT_VERSION: u32 = 1;

#[derive(Serialize)]
struct SnapshotRef<'a> {
    version: u32,
    saved_at: String,
    catalog: &'a LocalizationModel,
}

#[derive(Deserialize)]
struct Snapshot {
    version: u32,
    #[serde(default)]
    #[allow(dead_code)]
    saved_at: String,
    catalog: LocalizationModel,
}

/// Resolve the catalog path: an explicit override wins, otherwise the
/// platform data directory.
pub fn data_file_path(override_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = override_path {
        return Ok(PathBuf::from(path));
    }
    let data_dir = dirs::data_dir().context("could not determine platform data directory")?;
    Ok(data_dir.join("loctui").join("catalog.json"))
}

/// Load the catalog, or start an empty one when none exists yet.
pub fn load_or_create(path: &Path) -> Result<LocalizationModel> {
    if !path.exists() {
        return Ok(LocalizationModel::new());
    }
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read catalog at {}", path.display()))?;
    let snapshot: Snapshot = serde_json::from_str(&raw)
        .with_context(|| format!("catalog at {} is not valid", path.display()))?;
    if snapshot.version != FORMAT_VERSION {
        anyhow::bail!(
            "catalog at {} has unsupported format version {}",
            path.display(),
            snapshot.version
        );
    }
    Ok(snapshot.catalog)
}

/// Save the catalog: write a sibling temp file, then rename over the
/// target, so an interrupted save never truncates the previous snapshot.
pub fn save(path: &Path, catalog: &LocalizationModel) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }

    let snapshot = SnapshotRef {
        version: FORMAT_VERSION,
        saved_at: chrono::Utc::now().to_rfc3339(),
        catalog,
    };
    let json = serde_json::to_string_pretty(&snapshot)?;

    let tmp = path.with_extension("tmp");
    fs::write(&tmp, json)
        .with_context(|| format!("failed to write {}", tmp.display()))?;
    fs::rename(&tmp, path)
        .with_context(|| format!("failed to replace {}", path.display()))?;
    Ok(())
}
