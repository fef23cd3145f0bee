pub mod point;
pub mod region;

pub use point::GeoPoint;
pub use region::{Airport, RegionId, RegionTable};
