//! Region boundary computation
//!
//! A [`HullBuilder`] turns the airport positions of one region into the
//! convex hull ring consumed by the map pages, then runs its correction
//! chain over the result.

use tracing::debug;

use crate::corrections::CorrectionChain;
use crate::domain::{GeoPoint, RegionId};
use crate::error::HullError;
use crate::geometry::{HullPolygon, convex_hull};

#[derive(Debug, Default)]
pub struct HullBuilder {
    corrections: CorrectionChain,
}

impl HullBuilder {
    pub fn new(corrections: CorrectionChain) -> Self {
        Self { corrections }
    }

    pub fn corrections(&self) -> &CorrectionChain {
        &self.corrections
    }

    /// Compute the corrected convex hull of a region's points
    ///
    /// # Arguments
    /// * `region` - Region the points belong to, selects named corrections
    /// * `points` - (lat, lon) positions in any order, duplicates allowed
    ///
    /// # Returns
    /// * (lon, lat) ring with at least one vertex
    /// * `Err` - if `points` is empty or holds an out-of-range coordinate
    pub fn compute_hull(
        &self,
        region: &RegionId,
        points: &[GeoPoint],
    ) -> Result<HullPolygon, HullError> {
        if points.is_empty() {
            return Err(HullError::EmptyPointSet(region.clone()));
        }
        if let Some(bad) = points.iter().find(|p| !p.is_valid()) {
            return Err(HullError::CoordinateOutOfRange {
                region: region.clone(),
                lat: bad.lat,
                lon: bad.lon,
            });
        }

        let pairs: Vec<(f64, f64)> = points.iter().map(|p| (p.lat, p.lon)).collect();
        let ring: Vec<(f64, f64)> = convex_hull(&pairs)
            .into_iter()
            .map(|(lat, lon)| (lon, lat))
            .collect();
        debug!(%region, points = points.len(), vertices = ring.len(), "computed hull");

        Ok(self
            .corrections
            .apply(HullPolygon::from_vertices(ring), region))
    }
}

/// Compute a hull with the default correction chain
pub fn compute_hull(region: &RegionId, points: &[GeoPoint]) -> Result<HullPolygon, HullError> {
    HullBuilder::default().compute_hull(region, points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Turn, turn};
    use rand::rngs::StdRng;
    use rand::seq::SliceRandom;
    use rand::{Rng, SeedableRng};

    fn pts(pairs: &[(f64, f64)]) -> Vec<GeoPoint> {
        pairs.iter().copied().map(GeoPoint::from).collect()
    }

    fn random_points(rng: &mut StdRng, n: usize) -> Vec<GeoPoint> {
        (0..n)
            .map(|_| GeoPoint::new(rng.gen_range(-60.0..60.0), rng.gen_range(-100.0..100.0)))
            .collect()
    }

    /// Rotate so the lexicographically smallest vertex comes first
    fn canonical(hull: &HullPolygon) -> Vec<(f64, f64)> {
        let v = hull.vertices();
        let start = (0..v.len())
            .min_by(|&a, &b| v[a].0.total_cmp(&v[b].0).then(v[a].1.total_cmp(&v[b].1)))
            .unwrap_or(0);
        v[start..].iter().chain(&v[..start]).copied().collect()
    }

    #[test]
    fn test_end_to_end_example() {
        let hull = compute_hull(
            &RegionId::new("ED"),
            &pts(&[(10.0, 5.0), (10.0, 6.0), (11.0, 5.5)]),
        )
        .unwrap();
        assert_eq!(hull.vertices(), &[(5.0, 10.0), (5.5, 11.0), (6.0, 10.0)]);
    }

    #[test]
    fn test_empty_point_set_is_invalid() {
        let err = compute_hull(&RegionId::new("A1"), &[]).unwrap_err();
        assert_eq!(err, HullError::EmptyPointSet(RegionId::new("A1")));
    }

    #[test]
    fn test_out_of_range_is_invalid() {
        let region = RegionId::new("UH");
        let points = pts(&[(10.0, 5.0), (95.0, 5.0)]);
        let err = compute_hull(&region, &points).unwrap_err();
        assert!(matches!(err, HullError::CoordinateOutOfRange { lat, .. } if lat == 95.0));

        let points = pts(&[(10.0, f64::NAN)]);
        let err = compute_hull(&region, &points).unwrap_err();
        assert!(matches!(err, HullError::CoordinateOutOfRange { .. }));
    }

    #[test]
    fn test_single_point() {
        let points = pts(&[(-29.04, 167.94)]);
        let hull = compute_hull(&RegionId::new("NF"), &points).unwrap();
        assert_eq!(hull.vertices(), &[(167.94, -29.04)]);
    }

    #[test]
    fn test_two_points_and_duplicates() {
        let points = pts(&[(36.15, -5.35), (36.15, -5.34)]);
        let hull = compute_hull(&RegionId::new("LX"), &points).unwrap();
        assert_eq!(hull.vertices(), &[(-5.35, 36.15), (-5.34, 36.15)]);

        let same = pts(&[(47.0, 8.0), (47.0, 8.0), (47.0, 8.0)]);
        let hull = compute_hull(&RegionId::new("LS"), &same).unwrap();
        assert_eq!(hull.vertices(), &[(8.0, 47.0)]);
    }

    #[test]
    fn test_collinear_points_give_segment() {
        let hull = compute_hull(
            &RegionId::new("LS"),
            &pts(&[(1.0, 1.0), (0.0, 0.0), (2.0, 2.0), (3.0, 3.0)]),
        )
        .unwrap();
        assert_eq!(hull.vertices(), &[(0.0, 0.0), (3.0, 3.0)]);
    }

    #[test]
    fn test_convex_and_contains_all_points() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            let n = rng.gen_range(3..200);
            let points = random_points(&mut rng, n);
            let hull = compute_hull(&RegionId::new("LF"), &points).unwrap();
            let v = hull.vertices();
            assert!(v.len() >= 3);

            // Back in the (lat, lon) frame every corner is a strict left turn
            for i in 0..v.len() {
                let p = v[i];
                let q = v[(i + 1) % v.len()];
                let r = v[(i + 2) % v.len()];
                assert_eq!(turn((p.1, p.0), (q.1, q.0), (r.1, r.0)), Turn::Left);
            }

            for p in &points {
                assert!(hull.covers(*p), "{:?} outside hull", p);
            }
        }
    }

    #[test]
    fn test_order_invariance() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut points = random_points(&mut rng, 120);
        let region = RegionId::new("EG");
        let expected = canonical(&compute_hull(&region, &points).unwrap());

        for _ in 0..10 {
            points.shuffle(&mut rng);
            let hull = compute_hull(&region, &points).unwrap();
            assert_eq!(canonical(&hull), expected);
        }
    }

    #[test]
    fn test_idempotent_on_own_vertices() {
        let mut rng = StdRng::seed_from_u64(11);
        let points = random_points(&mut rng, 80);
        let region = RegionId::new("LE");
        let hull = compute_hull(&region, &points).unwrap();

        let again: Vec<GeoPoint> = hull
            .vertices()
            .iter()
            .map(|&(lon, lat)| GeoPoint::new(lat, lon))
            .collect();
        let rehulled = compute_hull(&region, &again).unwrap();
        assert_eq!(canonical(&rehulled), canonical(&hull));
    }

    #[test]
    fn test_antimeridian_tie_scenario() {
        let points = pts(&[
            (10.0, -179.0),
            (11.0, -178.0),
            (10.0, 170.0),
            (11.0, 175.0),
        ]);
        let hull = compute_hull(&RegionId::new("NZ"), &points).unwrap();
        assert_eq!(
            hull.vertices(),
            &[
                (-179.0, 10.0),
                (-178.0, 11.0),
                (-185.0, 11.0),
                (-190.0, 10.0),
            ]
        );
    }

    #[test]
    fn test_et_ear() {
        let points = pts(&[(47.5, 7.6), (54.0, 12.30), (50.0, 14.9), (48.0, 12.0)]);
        let hull = compute_hull(&RegionId::new("ET"), &points).unwrap();
        let anchor = (13.648875, 54.551359);
        assert!(hull.vertices().contains(&anchor));
        for &(lon, lat) in hull.vertices() {
            if lon > 12.27 && lat > 53.91 {
                assert_eq!((lon, lat), anchor);
            }
        }
    }

    #[test]
    fn test_builder_without_corrections() {
        let builder = HullBuilder::new(CorrectionChain::empty());
        let points = pts(&[
            (10.0, -179.0),
            (11.0, -178.0),
            (10.0, 170.0),
            (11.0, 175.0),
        ]);
        let hull = builder.compute_hull(&RegionId::new("NZ"), &points).unwrap();
        assert_eq!(hull.min_lon(), Some(-179.0));
        assert_eq!(hull.max_lon(), Some(175.0));
    }

    #[test]
    fn test_shared_across_threads() {
        let builder = HullBuilder::default();
        let regions = ["ED", "LF", "EG", "LI"];
        let sizes: Vec<usize> = std::thread::scope(|s| {
            let handles: Vec<_> = regions
                .iter()
                .enumerate()
                .map(|(i, code)| {
                    let builder = &builder;
                    s.spawn(move || {
                        let mut rng = StdRng::seed_from_u64(i as u64);
                        let points = random_points(&mut rng, 50);
                        let hull = builder.compute_hull(&RegionId::new(code), &points);
                        hull.unwrap().len()
                    })
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });
        assert!(sizes.iter().all(|&n| n >= 3));
    }
}
