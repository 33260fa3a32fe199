//! High-level facade crate for the `camcut-*` workspace.
//!
//! The computational core of a vision-guided CNC toolpath pipeline: calibrate
//! a machine coordinate frame from three optically detected markers, convert
//! detected contours into machine millimetres, and measure / simplify /
//! offset them into cutting paths. Camera capture, marker detection, settings
//! and UI live in the consuming application; this workspace only ever sees
//! in-memory points and polygons.
//!
//! ## Quickstart
//!
//! ```
//! use camcut::calib::{Calibration, MarkerTriple};
//! use camcut::core::PixelPoint;
//! use camcut::plan::{plan_cutting_path, PathParams};
//!
//! let cal = Calibration::from_markers(&MarkerTriple {
//!     origin: PixelPoint::new(0.0, 0.0),
//!     x_axis: PixelPoint::new(100.0, 0.0),
//!     scale: PixelPoint::new(0.0, 100.0),
//!     distance_mm: 50.0,
//!     distance_y_mm: None,
//! });
//! assert!(!cal.is_fallback());
//!
//! let contour = vec![
//!     PixelPoint::new(0.0, 0.0),
//!     PixelPoint::new(20.0, 0.0),
//!     PixelPoint::new(20.0, 20.0),
//!     PixelPoint::new(0.0, 20.0),
//! ];
//! let path = plan_cutting_path(&contour, &cal, &PathParams::default());
//! assert_eq!(path.area_mm2, 100.0);
//! ```
//!
//! ## API map
//! - `camcut::core`: space-tagged points, sizes, logger.
//! - `camcut::calib`: marker calibration, pixel↔machine transforms, display fit.
//! - `camcut::contour`: area/perimeter/centroid/containment, simplification,
//!   per-edge offsetting.
//! - `camcut::plan`: end-to-end contour → cutting path helper.

pub use camcut_calib as calib;
pub use camcut_contour as contour;
pub use camcut_core as core;

pub use camcut_calib::{Calibration, CalibrationSource, MachineFrame, MarkerTriple, ViewFit};
pub use camcut_core::{DisplayPoint, MachinePoint, PixelPoint, Size};

pub mod plan;
