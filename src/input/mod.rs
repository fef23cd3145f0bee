use anyhow::{Context, Result};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::domain::RegionTable;

/// Read one region table from a JSON file
///
/// Airports are sorted by ICAO code so that downstream output does not
/// depend on the order the table was written in.
pub fn load_region_table(path: &Path) -> Result<RegionTable> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open region table: {}", path.display()))?;
    let mut table: RegionTable = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse region table: {}", path.display()))?;
    table.sort_airports();
    Ok(table)
}

/// Read several region tables, sorted by region id
pub fn load_region_tables(paths: &[impl AsRef<Path>]) -> Result<Vec<RegionTable>> {
    let mut tables = paths
        .iter()
        .map(|p| load_region_table(p.as_ref()))
        .collect::<Result<Vec<_>>>()?;
    tables.sort_by(|a, b| a.id.cmp(&b.id));
    Ok(tables)
}
