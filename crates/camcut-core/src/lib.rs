//! Shared value types for the camcut workspace.
//!
//! This crate is intentionally small and purely geometric: space-tagged 2D
//! points and image/viewport sizes. It knows nothing about calibration or
//! toolpaths, and leaves logger installation to the binary (`env_logger` in
//! the `camcut` CLI).

mod point;

pub use point::{
    Display, DisplayPoint, Machine, MachinePoint, Pixel, PixelPoint, Size, Space, SpacePoint,
};
