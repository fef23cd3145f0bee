use geo::{Area, Intersects, LineString, Point, Polygon};

use crate::domain::GeoPoint;

/// Boundary ring of a region as (lon, lat) vertex pairs
///
/// The first vertex is not repeated at the end. Vertices of a hull are in
/// counter-clockwise order in the (lat, lon) frame the hull was built in.
#[derive(Debug, Clone, PartialEq)]
pub struct HullPolygon {
    vertices: Vec<(f64, f64)>,
}

impl HullPolygon {
    pub fn from_vertices(vertices: Vec<(f64, f64)>) -> Self {
        Self { vertices }
    }

    /// Vertices as (lon, lat)
    pub fn vertices(&self) -> &[(f64, f64)] {
        &self.vertices
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn min_lon(&self) -> Option<f64> {
        self.vertices.iter().map(|&(lon, _)| lon).reduce(f64::min)
    }

    pub fn max_lon(&self) -> Option<f64> {
        self.vertices.iter().map(|&(lon, _)| lon).reduce(f64::max)
    }

    /// Apply `f` to every (lon, lat) vertex
    pub fn map_vertices(self, f: impl Fn((f64, f64)) -> (f64, f64)) -> Self {
        Self {
            vertices: self.vertices.into_iter().map(f).collect(),
        }
    }

    /// GeoJSON ring: `[[lon, lat], ...]`
    pub fn ring(&self) -> Vec<[f64; 2]> {
        self.vertices.iter().map(|&(lon, lat)| [lon, lat]).collect()
    }

    /// As a `geo` polygon with x = lon and y = lat
    pub fn to_geo(&self) -> Polygon<f64> {
        let exterior: LineString<f64> = self
            .vertices
            .iter()
            .map(|&(lon, lat)| geo::coord! { x: lon, y: lat })
            .collect();
        Polygon::new(exterior, vec![])
    }

    /// Whether a point lies inside or on the boundary of the polygon
    pub fn covers(&self, point: GeoPoint) -> bool {
        self.to_geo().intersects(&Point::new(point.lon, point.lat))
    }

    /// Planar area in square degrees
    pub fn area_sq_deg(&self) -> f64 {
        self.to_geo().unsigned_area()
    }
}
