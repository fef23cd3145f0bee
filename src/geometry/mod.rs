pub mod bounds;
pub mod hull;
pub mod polygon;

pub use bounds::Bounds;
pub use hull::{Turn, convex_hull, turn};
pub use polygon::HullPolygon;
