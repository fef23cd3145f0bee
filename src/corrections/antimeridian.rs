use tracing::info;

use super::HullCorrection;
use crate::domain::RegionId;
use crate::geometry::HullPolygon;

/// Default longitude magnitude beyond which a hull is suspected of wrapping
/// the wrong way around the ±180° meridian
pub const DEFAULT_THRESHOLD: f64 = 120.0;

/// Moves the minority side of a hull straddling the antimeridian by 360°
///
/// Triggers when the minimum longitude is below `-threshold` and the maximum
/// is above `+threshold`. Vertices are split by longitude sign (zero belongs
/// to neither side). When both sides are populated, the smaller side is
/// shifted so the whole ring lies in one continuous numeric range. On a tie
/// the positive side is shifted down by 360°.
///
/// Region hulls published by earlier site builds shifted the negative side
/// up whenever it was the larger one, so those regions differ from them.
#[derive(Debug, Clone)]
pub struct AntimeridianCorrection {
    threshold: f64,
}

impl AntimeridianCorrection {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }
}

impl Default for AntimeridianCorrection {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD)
    }
}

impl HullCorrection for AntimeridianCorrection {
    fn name(&self) -> &str {
        "antimeridian"
    }

    fn apply(&self, hull: HullPolygon, region: &RegionId) -> HullPolygon {
        let (Some(lon_min), Some(lon_max)) = (hull.min_lon(), hull.max_lon()) else {
            return hull;
        };
        if !(lon_min < -self.threshold && lon_max > self.threshold) {
            return hull;
        }
        info!(%region, lon_min, lon_max, "hull spans the antimeridian");

        let lons: Vec<f64> = hull.vertices().iter().map(|&(lon, _)| lon).collect();
        let negative = lons.iter().filter(|&&lon| lon < 0.0).count();
        let positive = lons.iter().filter(|&&lon| lon > 0.0).count();
        if negative == 0 || positive == 0 {
            return hull;
        }

        let shift_negative = negative < positive;
        if shift_negative {
            info!(%region, positive, negative, "shifting negative longitudes up by 360 degrees");
        } else {
            info!(%region, positive, negative, "shifting positive longitudes down by 360 degrees");
        }
        hull.map_vertices(|(lon, lat)| {
            if shift_negative && lon < 0.0 {
                (lon + 360.0, lat)
            } else if !shift_negative && lon > 0.0 {
                (lon - 360.0, lat)
            } else {
                (lon, lat)
            }
        })
    }
}
