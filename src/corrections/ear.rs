use serde::Deserialize;
use tracing::info;

use super::HullCorrection;
use crate::domain::RegionId;
use crate::geometry::HullPolygon;

/// Hand-tuned anchor for one region
///
/// Every hull vertex of `region` with longitude above `lon_above` and
/// latitude above `lat_above` is replaced by `anchor` (lon, lat).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EarPatch {
    pub region: RegionId,
    pub lon_above: f64,
    pub lat_above: f64,
    pub anchor: [f64; 2],
}

impl EarPatch {
    /// North-eastern ear of ET so that its hull can be picked outside of ED
    pub fn et() -> Self {
        Self {
            region: RegionId::new("ET"),
            lon_above: 12.27,
            lat_above: 53.91,
            anchor: [13.648875, 54.551359],
        }
    }

    fn patch(&self, (lon, lat): (f64, f64)) -> (f64, f64) {
        if lon > self.lon_above && lat > self.lat_above {
            (self.anchor[0], self.anchor[1])
        } else {
            (lon, lat)
        }
    }
}

/// Exception table of named-region ear patches
///
/// Known suspects without a patch yet: A1, NZ, NF, PA, UH.
#[derive(Debug, Clone)]
pub struct EarCorrection {
    patches: Vec<EarPatch>,
}

impl EarCorrection {
    pub fn new(patches: Vec<EarPatch>) -> Self {
        Self { patches }
    }
}

impl Default for EarCorrection {
    fn default() -> Self {
        Self::new(vec![EarPatch::et()])
    }
}

impl HullCorrection for EarCorrection {
    fn name(&self) -> &str {
        "ear"
    }

    fn apply(&self, hull: HullPolygon, region: &RegionId) -> HullPolygon {
        self.patches
            .iter()
            .filter(|patch| &patch.region == region)
            .fold(hull, |hull, patch| {
                info!(%region, anchor = ?patch.anchor, "patching an ear onto the hull");
                hull.map_vertices(|vertex| patch.patch(vertex))
            })
    }
}
