//! Pixel ↔ machine point transforms.
//!
//! Image space is Y-down, machine space is Y-up, so the rotation applied here
//! is a reflection (its 2×2 matrix is its own inverse). Forward and inverse
//! are exact inverses of each other up to floating-point rounding.

use camcut_core::{MachinePoint, PixelPoint};
use nalgebra::Vector2;

use crate::frame::MachineFrame;

impl MachineFrame {
    /// Convert a pixel-space point to machine millimetres.
    ///
    /// Translate by `-origin_px`, project onto the rotated (Y-flipped) machine
    /// axes, scale by `mm_per_px`.
    #[inline]
    pub fn pixel_to_machine(&self, p: PixelPoint) -> MachinePoint {
        let d = p.delta(self.origin_px);
        let (sin, cos) = self.orientation_rad.sin_cos();
        MachinePoint::new(
            self.mm_per_px * (d.x * cos + d.y * sin),
            self.mm_per_px * (d.x * sin - d.y * cos),
        )
    }

    /// Convert a machine-space point back to image pixels.
    #[inline]
    pub fn machine_to_pixel(&self, p: MachinePoint) -> PixelPoint {
        let u = p.x / self.mm_per_px;
        let v = p.y / self.mm_per_px;
        let (sin, cos) = self.orientation_rad.sin_cos();
        // Same reflection matrix: it is involutory.
        self.origin_px
            .translate(Vector2::new(u * cos + v * sin, u * sin - v * cos))
    }

    /// Map a pixel-space contour into machine space, preserving order.
    pub fn pixel_to_machine_path(&self, path: &[PixelPoint]) -> Vec<MachinePoint> {
        path.iter().map(|&p| self.pixel_to_machine(p)).collect()
    }

    /// Map a machine-space path back into pixel space, preserving order.
    pub fn machine_to_pixel_path(&self, path: &[MachinePoint]) -> Vec<PixelPoint> {
        path.iter().map(|&p| self.machine_to_pixel(p)).collect()
    }
}
