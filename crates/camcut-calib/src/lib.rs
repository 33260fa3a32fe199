//! Machine coordinate frame calibration and point transforms.
//!
//! Builds a [`MachineFrame`] from three optically detected marker points plus
//! known real-world distances, converts points between pixel and machine
//! space, and maps image points into an aspect-ratio-fitted display viewport.
//!
//! Calibration never fails outwardly: rejected marker input yields a fixed
//! default frame tagged as a fallback (see [`Calibration`]), so an interactive
//! session degrades instead of aborting while the rejection reason stays
//! observable.

mod display;
mod frame;
mod transform;

pub use display::ViewFit;
pub use frame::{
    Calibration, CalibrationError, CalibrationSource, MachineFrame, MarkerTriple,
    COLLINEARITY_FACTOR, FALLBACK_MM_PER_PX, MAX_MM_PER_PX, MIN_MARKER_SEPARATION_PX,
    MIN_MM_PER_PX, MIN_SCALE_DISTANCE_PX,
};
