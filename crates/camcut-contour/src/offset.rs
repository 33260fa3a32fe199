//! Per-edge contour offsetting.
//!
//! Each edge of the (implicitly closed) contour is translated along its unit
//! normal by the signed distance. This is deliberately *not* a true polygon
//! offset: corner intersections are left unresolved, so concave or sharp
//! convex corners produce gapped or self-overlapping output. Downstream
//! consumers rely on this exact geometry; a miter/bevel-resolving offset would
//! be a separate additive operation, not a replacement.

use camcut_core::{Space, SpacePoint};
use nalgebra::Vector2;

/// Edges shorter than this are skipped: their direction (and therefore the
/// normal) is numerically meaningless.
pub const MIN_EDGE_LENGTH: f64 = 1e-9;

/// Offset every edge of `points` along its normal by `distance`.
///
/// The contour is treated as closed; a closing point is appended internally
/// when the input does not repeat its first point. Positive distances move
/// each edge to the right of its travel direction, which is outward for a
/// contour wound clockwise on screen (the usual winding of detected image
/// contours). Inputs with fewer than 3 points are returned unchanged.
///
/// The output holds two points per surviving edge, in input edge order.
pub fn offset<S: Space>(points: &[SpacePoint<S>], distance: f64) -> Vec<SpacePoint<S>> {
    if points.len() < 3 {
        return points.to_vec();
    }

    let mut closed = points.to_vec();
    if closed.first() != closed.last() {
        closed.push(closed[0]);
    }

    let mut out = Vec::with_capacity(2 * (closed.len() - 1));
    for w in closed.windows(2) {
        let (a, b) = (w[0], w[1]);
        let len = a.distance(b);
        if len < MIN_EDGE_LENGTH {
            continue;
        }
        let dir = b.delta(a) / len;
        // Unit normal: edge direction rotated a quarter turn.
        let shift = Vector2::new(dir.y, -dir.x) * distance;
        out.push(a.translate(shift));
        out.push(b.translate(shift));
    }
    out
}
