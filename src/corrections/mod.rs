//! Post-processing corrections applied to a freshly computed hull
//!
//! Each correction is a pure function of the hull and the region it
//! belongs to. They run in the order they were added to a
//! [`CorrectionChain`].

pub mod antimeridian;
pub mod ear;

pub use antimeridian::AntimeridianCorrection;
pub use ear::{EarCorrection, EarPatch};

use crate::domain::RegionId;
use crate::geometry::HullPolygon;

pub trait HullCorrection: Send + Sync {
    fn name(&self) -> &str;

    fn apply(&self, hull: HullPolygon, region: &RegionId) -> HullPolygon;
}

/// Ordered list of corrections
pub struct CorrectionChain {
    corrections: Vec<Box<dyn HullCorrection>>,
}

impl CorrectionChain {
    /// A chain that leaves hulls untouched
    pub fn empty() -> Self {
        Self {
            corrections: Vec::new(),
        }
    }

    pub fn with(mut self, correction: impl HullCorrection + 'static) -> Self {
        self.corrections.push(Box::new(correction));
        self
    }

    pub fn names(&self) -> Vec<&str> {
        self.corrections.iter().map(|c| c.name()).collect()
    }

    pub fn apply(&self, hull: HullPolygon, region: &RegionId) -> HullPolygon {
        self.corrections
            .iter()
            .fold(hull, |hull, correction| correction.apply(hull, region))
    }
}

impl Default for CorrectionChain {
    /// Antimeridian wraparound followed by the built-in ear table
    fn default() -> Self {
        Self::empty()
            .with(AntimeridianCorrection::default())
            .with(EarCorrection::default())
    }
}

impl std::fmt::Debug for CorrectionChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}
