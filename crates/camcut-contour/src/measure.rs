//! Contour measurement: area, perimeter, centroid, containment.
//!
//! All operations treat the contour as implicitly closed (the last point
//! connects back to the first) and are generic over the coordinate space.
//! Degenerate input never fails; it yields the neutral result instead.

use camcut_core::{Space, SpacePoint};

/// Unsigned polygon area via the shoelace formula.
///
/// Contours with fewer than 3 points have area 0. A non-finite result (which
/// valid input cannot produce) is clamped to 0.
pub fn area<S: Space>(points: &[SpacePoint<S>]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }
    let a = signed_area_2x(points).abs() / 2.0;
    if a.is_finite() {
        a
    } else {
        0.0
    }
}

/// Sum of edge lengths including the closing edge.
///
/// Contours with fewer than 2 points have perimeter 0.
pub fn perimeter<S: Space>(points: &[SpacePoint<S>]) -> f64 {
    if points.len() < 2 {
        return 0.0;
    }
    let mut total = 0.0;
    for (p, q) in edges(points) {
        total += p.distance(q);
    }
    total
}

/// Polygon centroid via the signed cross term per edge.
///
/// Falls back to the arithmetic mean of the points when the contour has fewer
/// than 3 points or when the formula yields a non-finite result (degenerate or
/// self-intersecting contours whose signed area vanishes). Returns `None` only
/// for an empty contour.
pub fn centroid<S: Space>(points: &[SpacePoint<S>]) -> Option<SpacePoint<S>> {
    if points.is_empty() {
        return None;
    }
    if points.len() >= 3 {
        let mut a2 = 0.0;
        let mut cx = 0.0;
        let mut cy = 0.0;
        for (p, q) in edges(points) {
            let cross = p.x * q.y - q.x * p.y;
            a2 += cross;
            cx += (p.x + q.x) * cross;
            cy += (p.y + q.y) * cross;
        }
        // a2 is twice the signed area, so the divisor 6A becomes 3 * a2.
        let c = SpacePoint::new(cx / (3.0 * a2), cy / (3.0 * a2));
        if c.is_finite() {
            return Some(c);
        }
    }
    Some(mean(points))
}

/// Even-odd (ray casting) point containment test.
///
/// Requires at least 3 points; returns `false` otherwise. Points exactly on
/// the boundary get whatever the edge-crossing test naturally yields.
pub fn contains_point<S: Space>(points: &[SpacePoint<S>], p: SpacePoint<S>) -> bool {
    if points.len() < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = points.len() - 1;
    for i in 0..points.len() {
        let (pi, pj) = (points[i], points[j]);
        if (pi.y > p.y) != (pj.y > p.y) {
            let x_cross = (pj.x - pi.x) * (p.y - pi.y) / (pj.y - pi.y) + pi.x;
            if p.x < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

/// Twice the signed shoelace area (positive for screen-clockwise winding).
fn signed_area_2x<S: Space>(points: &[SpacePoint<S>]) -> f64 {
    let mut a2 = 0.0;
    for (p, q) in edges(points) {
        a2 += p.x * q.y - q.x * p.y;
    }
    a2
}

fn mean<S: Space>(points: &[SpacePoint<S>]) -> SpacePoint<S> {
    let n = points.len() as f64;
    let (sx, sy) = points
        .iter()
        .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
    SpacePoint::new(sx / n, sy / n)
}

/// Consecutive edge pairs including the wraparound edge.
fn edges<S: Space>(
    points: &[SpacePoint<S>],
) -> impl Iterator<Item = (SpacePoint<S>, SpacePoint<S>)> + '_ {
    (0..points.len()).map(move |i| (points[i], points[(i + 1) % points.len()]))
}
