//! GeoJSON documents for region hulls
//!
//! Leaflet reads these directly, so field names and nesting follow the
//! GeoJSON layout: `Feature` with a `Polygon` geometry whose coordinates are
//! a list of rings of `[lon, lat]` pairs.

use serde::{Deserialize, Serialize};

use crate::domain::RegionId;
use crate::geometry::HullPolygon;

pub const CRS84: &str = "urn:ogc:def:crs:OGC:1.3:CRS84";
pub const HULL_COLLECTION_NAME: &str = "Prefix Region Convex Hulls";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NameProperty {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
    Polygon { coordinates: Vec<Vec<[f64; 2]>> },
}

/// One region hull as a GeoJSON feature
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "Feature")]
pub struct RegionHullFeature {
    pub id: RegionId,
    pub properties: NameProperty,
    pub geometry: Geometry,
}

impl RegionHullFeature {
    pub fn new(id: RegionId, name: &str, hull: &HullPolygon) -> Self {
        Self {
            id,
            properties: NameProperty {
                name: name.to_string(),
            },
            geometry: Geometry::Polygon {
                coordinates: vec![hull.ring()],
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Crs {
    #[serde(rename = "type")]
    pub type_: String,
    pub properties: NameProperty,
}

impl Default for Crs {
    fn default() -> Self {
        Self {
            type_: "name".to_string(),
            properties: NameProperty {
                name: CRS84.to_string(),
            },
        }
    }
}

/// All region hulls in one feature collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "FeatureCollection")]
pub struct HullCollection {
    pub name: String,
    pub crs: Crs,
    pub features: Vec<RegionHullFeature>,
}

impl HullCollection {
    pub fn new() -> Self {
        Self {
            name: HULL_COLLECTION_NAME.to_string(),
            crs: Crs::default(),
            features: Vec::new(),
        }
    }

    pub fn push(&mut self, feature: RegionHullFeature) {
        self.features.push(feature);
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

impl Default for HullCollection {
    fn default() -> Self {
        Self::new()
    }
}
