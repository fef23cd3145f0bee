//! prefixmap - Derive ICAO prefix region boundary polygons for aeronautical web maps

pub mod builder;
pub mod config;
pub mod corrections;
pub mod domain;
pub mod error;
pub mod geojson;
pub mod geometry;
pub mod input;
pub mod output;

pub use builder::{HullBuilder, compute_hull};
pub use error::HullError;
