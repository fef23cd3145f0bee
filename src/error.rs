use thiserror::Error;

use crate::domain::RegionId;

/// Invalid input handed to the hull builder
///
/// Geometric degeneracies (collinear or duplicate points, one or two point
/// sets) are not errors; they resolve to a degenerate polygon.
#[derive(Debug, Error, PartialEq)]
pub enum HullError {
    #[error("Empty point set for region {0}")]
    EmptyPointSet(RegionId),
    #[error("Coordinate out of range for region {region}: lat {lat}, lon {lon}")]
    CoordinateOutOfRange {
        region: RegionId,
        lat: f64,
        lon: f64,
    },
}
