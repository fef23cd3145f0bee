use std::fmt;

use crate::domain::GeoPoint;

/// Latitude/longitude bounding box of a region's airports
#[derive(Debug, Clone, PartialEq)]
pub struct Bounds {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

impl Bounds {
    /// Create bounds from a set of points
    pub fn from_points(points: &[GeoPoint]) -> Option<Self> {
        if points.is_empty() {
            return None;
        }

        let mut bounds = Self {
            min_lat: f64::MAX,
            max_lat: f64::MIN,
            min_lon: f64::MAX,
            max_lon: f64::MIN,
        };
        bounds.expand(points);
        Some(bounds)
    }

    /// Expand bounds to include another set of points
    pub fn expand(&mut self, points: &[GeoPoint]) {
        for p in points {
            self.min_lat = self.min_lat.min(p.lat);
            self.max_lat = self.max_lat.max(p.lat);
            self.min_lon = self.min_lon.min(p.lon);
            self.max_lon = self.max_lon.max(p.lon);
        }
    }

    /// Midpoint of the box, used to center a region map
    pub fn center(&self) -> GeoPoint {
        GeoPoint::new(
            0.5 * (self.min_lat + self.max_lat),
            0.5 * (self.min_lon + self.max_lon),
        )
    }

    pub fn lat_span(&self) -> f64 {
        self.max_lat - self.min_lat
    }

    pub fn lon_span(&self) -> f64 {
        self.max_lon - self.min_lon
    }
}

impl fmt::Display for Bounds {
    /// `[(min_lat, min_lon, max_lat, max_lon)]`, each 7 wide with three decimals
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[({:7.3}, {:7.3}, {:7.3}, {:7.3})]",
            self.min_lat, self.min_lon, self.max_lat, self.max_lon
        )
    }
}
