use serde::{Deserialize, Serialize};
use std::fmt;

use super::GeoPoint;

/// ICAO prefix identifying a region, e.g. "ET" or "NZ"
///
/// Stored in upper case so that lookups in the correction table do not
/// depend on how the caller spelled it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct RegionId(String);

impl RegionId {
    pub fn new(code: &str) -> Self {
        Self(code.trim().to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for RegionId {
    fn from(code: String) -> Self {
        Self::new(&code)
    }
}

impl From<&str> for RegionId {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

impl From<RegionId> for String {
    fn from(id: RegionId) -> Self {
        id.0
    }
}

impl PartialEq<&str> for RegionId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for RegionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One airport row of a region table
#[derive(Debug, Clone, Deserialize)]
pub struct Airport {
    pub icao: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Airport {
    pub fn position(&self) -> GeoPoint {
        GeoPoint::new(self.latitude, self.longitude)
    }
}

/// All airports assigned to one ICAO prefix region
#[derive(Debug, Clone, Deserialize)]
pub struct RegionTable {
    pub id: RegionId,
    /// Display name, e.g. "Region - ET (Germany)"
    pub name: String,
    #[serde(default)]
    pub airports: Vec<Airport>,
}

impl RegionTable {
    /// The point set of the region in airport order
    pub fn points(&self) -> Vec<GeoPoint> {
        self.airports.iter().map(Airport::position).collect()
    }

    pub fn sort_airports(&mut self) {
        self.airports.sort_by(|a, b| a.icao.cmp(&b.icao));
    }
}
