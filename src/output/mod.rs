use anyhow::{Context, Result};
use serde::Serialize;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::geojson::{HullCollection, RegionHullFeature};

pub const HULLS_DIR: &str = "hulls";
pub const HULL_COLLECTION_FILE: &str = "region-hulls-geo.json";

/// Path of the per-region hull file below `root`
pub fn region_hull_path(root: &Path, feature: &RegionHullFeature) -> PathBuf {
    root.join(HULLS_DIR).join(format!("{}.json", feature.id))
}

fn write_pretty_json(path: &Path, value: &impl Serialize) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    let file = File::create(path)
        .with_context(|| format!("Failed to create GeoJSON file: {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, value)
        .with_context(|| format!("Failed to serialize GeoJSON: {}", path.display()))?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

/// Write one region hull feature to `<root>/hulls/<ID>.json`
pub fn write_region_hull(root: &Path, feature: &RegionHullFeature) -> Result<PathBuf> {
    let path = region_hull_path(root, feature);
    write_pretty_json(&path, feature)?;
    Ok(path)
}

/// Write the combined collection to `<root>/region-hulls-geo.json`
pub fn write_hull_collection(root: &Path, collection: &HullCollection) -> Result<PathBuf> {
    let path = root.join(HULL_COLLECTION_FILE);
    write_pretty_json(&path, collection)?;
    Ok(path)
}
