//! Contour geometry for vision-guided cutting paths.
//!
//! Operations on ordered point sequences: measurement (area, perimeter,
//! centroid, containment), Douglas-Peucker simplification, and best-effort
//! per-edge offsetting. All functions are pure and generic over the point's
//! coordinate space.

pub mod measure;
mod offset;
mod simplify;

pub use measure::{area, centroid, contains_point, perimeter};
pub use offset::{offset, MIN_EDGE_LENGTH};
pub use simplify::{simplify, simplify_with_depth, DEFAULT_MAX_DEPTH};
