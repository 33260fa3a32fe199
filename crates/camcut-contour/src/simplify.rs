//! Douglas-Peucker contour simplification.
//!
//! Classic recursive split semantics, run on an explicit worklist of index
//! ranges so pathological inputs cannot grow the call stack. The split depth
//! stays bounded: a range that would split deeper than the cap is kept
//! unsimplified rather than failing.

use camcut_core::{Space, SpacePoint};

/// Default split-depth cap. Generous: a balanced split tree this deep covers
/// contours far larger than any real camera frame produces.
pub const DEFAULT_MAX_DEPTH: usize = 100;

/// Simplify `points` so no removed point deviates more than `epsilon` from the
/// simplified polyline, with the default depth cap.
///
/// The first and last point are always preserved; inputs with at most 2 points
/// are returned unchanged.
pub fn simplify<S: Space>(points: &[SpacePoint<S>], epsilon: f64) -> Vec<SpacePoint<S>> {
    simplify_with_depth(points, epsilon, DEFAULT_MAX_DEPTH)
}

/// [`simplify`] with an explicit split-depth cap.
///
/// A segment whose split would exceed `max_depth` is emitted as-is, so the
/// result is always a superset of what an unbounded run would keep.
pub fn simplify_with_depth<S: Space>(
    points: &[SpacePoint<S>],
    epsilon: f64,
    max_depth: usize,
) -> Vec<SpacePoint<S>> {
    if points.len() <= 2 {
        return points.to_vec();
    }

    let mut keep = vec![false; points.len()];
    keep[0] = true;
    keep[points.len() - 1] = true;

    // Worklist of (start, end, depth) index ranges, replacing the recursion.
    let mut ranges = vec![(0usize, points.len() - 1, 0usize)];
    while let Some((start, end, depth)) = ranges.pop() {
        if end <= start + 1 {
            continue;
        }
        if depth >= max_depth {
            for flag in &mut keep[start..=end] {
                *flag = true;
            }
            continue;
        }

        let mut split = start;
        let mut max_dev = 0.0;
        for i in start + 1..end {
            let dev = deviation(points[i], points[start], points[end]);
            if dev > max_dev {
                max_dev = dev;
                split = i;
            }
        }

        if max_dev > epsilon {
            keep[split] = true;
            ranges.push((start, split, depth + 1));
            ranges.push((split, end, depth + 1));
        }
    }

    points
        .iter()
        .zip(&keep)
        .filter_map(|(&p, &k)| k.then_some(p))
        .collect()
}

/// Perpendicular distance from `p` to the line through `a` and `b`.
/// A zero-length reference segment degrades to the point distance.
fn deviation<S: Space>(p: SpacePoint<S>, a: SpacePoint<S>, b: SpacePoint<S>) -> f64 {
    let len_sq = a.distance_squared(b);
    if len_sq == 0.0 {
        return p.distance(a);
    }
    let cross = ((b.x - a.x) * (a.y - p.y) - (a.x - p.x) * (b.y - a.y)).abs();
    cross / len_sq.sqrt()
}
