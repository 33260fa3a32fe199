//! Image ↔ display viewport mapping.
//!
//! Models an image scaled to fit a viewport while preserving aspect ratio and
//! centred: letterboxed when the image is relatively taller, pillarboxed when
//! relatively wider. Independent of machine calibration.

use camcut_core::{DisplayPoint, PixelPoint, Size};
use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

/// The fitted placement of an image inside a display viewport.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ViewFit {
    image: Size,
    /// Display pixels per image pixel.
    scale: f64,
    /// Top-left corner of the fitted rectangle in viewport coordinates.
    offset: Vector2<f64>,
}

impl ViewFit {
    /// Compute the centred aspect-preserving fit of `image` inside `viewport`.
    ///
    /// Returns `None` when either extent is non-positive or non-finite.
    pub fn new(image: Size, viewport: Size) -> Option<Self> {
        if !image.is_valid() || !viewport.is_valid() {
            return None;
        }
        let scale = (viewport.width / image.width).min(viewport.height / image.height);
        let offset = Vector2::new(
            (viewport.width - image.width * scale) / 2.0,
            (viewport.height - image.height * scale) / 2.0,
        );
        Some(Self {
            image,
            scale,
            offset,
        })
    }

    /// Top-left corner and size of the sub-rectangle the image occupies.
    pub fn fitted_rect(&self) -> (DisplayPoint, Size) {
        (
            DisplayPoint::new(self.offset.x, self.offset.y),
            Size::new(self.image.width * self.scale, self.image.height * self.scale),
        )
    }

    /// Map an image-space point into viewport coordinates.
    #[inline]
    pub fn image_to_display(&self, p: PixelPoint) -> DisplayPoint {
        DisplayPoint::new(
            self.offset.x + p.x * self.scale,
            self.offset.y + p.y * self.scale,
        )
    }

    /// Map a viewport point back into image coordinates.
    ///
    /// Returns `None` for points outside the fitted rectangle (in the
    /// letterbox/pillarbox bars or beyond the viewport) instead of silently
    /// producing out-of-image coordinates.
    pub fn display_to_image(&self, p: DisplayPoint) -> Option<PixelPoint> {
        let x = (p.x - self.offset.x) / self.scale;
        let y = (p.y - self.offset.y) / self.scale;
        if x < 0.0 || y < 0.0 || x > self.image.width || y > self.image.height {
            return None;
        }
        Some(PixelPoint::new(x, y))
    }

    /// Like [`display_to_image`](Self::display_to_image) but clamps the result
    /// into the valid image range.
    pub fn display_to_image_clamped(&self, p: DisplayPoint) -> PixelPoint {
        let x = (p.x - self.offset.x) / self.scale;
        let y = (p.y - self.offset.y) / self.scale;
        PixelPoint::new(
            x.clamp(0.0, self.image.width),
            y.clamp(0.0, self.image.height),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(x: f64, y: f64) {
        assert!((x - y).abs() < 1e-9, "expected {x} ~ {y}");
    }

    #[test]
    fn pillarbox_centres_a_tall_image() {
        // 4:3 image in a wide 16:9 viewport: bars left and right.
        let fit = ViewFit::new(Size::new(400.0, 300.0), Size::new(1600.0, 900.0)).expect("fit");
        let (corner, size) = fit.fitted_rect();
        assert_close(size.width, 1200.0);
        assert_close(size.height, 900.0);
        assert_close(corner.x, 200.0);
        assert_close(corner.y, 0.0);
    }

    #[test]
    fn letterbox_centres_a_wide_image() {
        let fit = ViewFit::new(Size::new(1600.0, 400.0), Size::new(800.0, 600.0)).expect("fit");
        let (corner, size) = fit.fitted_rect();
        assert_close(size.width, 800.0);
        assert_close(size.height, 200.0);
        assert_close(corner.x, 0.0);
        assert_close(corner.y, 200.0);
    }

    #[test]
    fn image_corners_map_to_fitted_rect_corners() {
        let fit = ViewFit::new(Size::new(400.0, 300.0), Size::new(1600.0, 900.0)).expect("fit");
        let tl = fit.image_to_display(PixelPoint::new(0.0, 0.0));
        let br = fit.image_to_display(PixelPoint::new(400.0, 300.0));
        assert_close(tl.x, 200.0);
        assert_close(tl.y, 0.0);
        assert_close(br.x, 1400.0);
        assert_close(br.y, 900.0);
    }

    #[test]
    fn round_trip_inside_the_fitted_rect() {
        let fit = ViewFit::new(Size::new(640.0, 480.0), Size::new(1000.0, 1000.0)).expect("fit");
        for p in [
            PixelPoint::new(0.0, 0.0),
            PixelPoint::new(320.0, 240.0),
            PixelPoint::new(639.5, 0.25),
        ] {
            let back = fit
                .display_to_image(fit.image_to_display(p))
                .expect("inside the image");
            assert_close(back.x, p.x);
            assert_close(back.y, p.y);
        }
    }

    #[test]
    fn bar_points_are_flagged_and_clamped() {
        let fit = ViewFit::new(Size::new(400.0, 300.0), Size::new(1600.0, 900.0)).expect("fit");
        // A point in the left pillarbox bar.
        let bar = DisplayPoint::new(100.0, 450.0);
        assert_eq!(fit.display_to_image(bar), None);
        let clamped = fit.display_to_image_clamped(bar);
        assert_close(clamped.x, 0.0);
        assert_close(clamped.y, 150.0);
    }

    #[test]
    fn degenerate_sizes_refuse_to_fit() {
        assert!(ViewFit::new(Size::new(0.0, 300.0), Size::new(100.0, 100.0)).is_none());
        assert!(ViewFit::new(Size::new(400.0, 300.0), Size::new(100.0, f64::NAN)).is_none());
    }
}
