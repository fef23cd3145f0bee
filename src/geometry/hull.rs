//! Monotone chain convex hull over planar (x, y) pairs
//!
//! Points are sorted lexicographically by (x, y); the lower chain is built
//! scanning forward and the upper chain scanning backward. Only strict left
//! turns keep a vertex, so collinear vertices are dropped and the result is
//! counter-clockwise in the (x, y) frame.

use std::cmp::Ordering;

/// Orientation of the path p -> q -> r
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    Left,
    Right,
    Straight,
}

/// Classify the turn p -> q -> r by the sign of the cross product
pub fn turn(p: (f64, f64), q: (f64, f64), r: (f64, f64)) -> Turn {
    let cross = (q.0 - p.0) * (r.1 - p.1) - (r.0 - p.0) * (q.1 - p.1);
    if cross > 0.0 {
        Turn::Left
    } else if cross < 0.0 {
        Turn::Right
    } else {
        Turn::Straight
    }
}

fn lexicographic(a: &(f64, f64), b: &(f64, f64)) -> Ordering {
    a.0.total_cmp(&b.0).then(a.1.total_cmp(&b.1))
}

/// Push `r` onto the chain after popping every vertex that would not make
/// a strict left turn with it
fn keep_left(chain: &mut Vec<(f64, f64)>, r: (f64, f64)) {
    while let &[.., p, q] = chain.as_slice() {
        if turn(p, q, r) == Turn::Left {
            break;
        }
        chain.pop();
    }
    if chain.last() != Some(&r) {
        chain.push(r);
    }
}

/// Compute the convex hull of a set of points
///
/// Returns the vertices in counter-clockwise order without repeating the
/// first one. One distinct point yields one vertex, two distinct points (or
/// any collinear set) yield the two extreme points.
pub fn convex_hull(points: &[(f64, f64)]) -> Vec<(f64, f64)> {
    let mut sorted = points.to_vec();
    sorted.sort_by(lexicographic);

    let mut lower = Vec::with_capacity(sorted.len());
    for &p in &sorted {
        keep_left(&mut lower, p);
    }

    let mut upper = Vec::with_capacity(sorted.len());
    for &p in sorted.iter().rev() {
        keep_left(&mut upper, p);
    }

    if upper.len() > 2 {
        lower.extend_from_slice(&upper[1..upper.len() - 1]);
    }
    lower
}
