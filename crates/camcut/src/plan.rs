//! End-to-end path planning: detected pixel contour → machine-space path.
//!
//! Composes the sub-crates the way the consuming vision/UI layer does:
//! convert into machine millimetres, measure, simplify, then apply the tool
//! offset. Pure and deterministic; safe to call from any thread.

use camcut_calib::Calibration;
use camcut_core::{MachinePoint, PixelPoint};
use serde::{Deserialize, Serialize};

/// Tolerances for turning a raw contour into a cutting path.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PathParams {
    /// Douglas-Peucker tolerance in machine millimetres.
    #[serde(default = "default_epsilon_mm")]
    pub simplify_epsilon_mm: f64,
    /// Signed per-edge tool offset in millimetres; 0 disables offsetting.
    /// Positive moves edges to the right of travel (outward for contours
    /// wound clockwise on screen).
    #[serde(default)]
    pub tool_offset_mm: f64,
}

fn default_epsilon_mm() -> f64 {
    0.1
}

impl Default for PathParams {
    fn default() -> Self {
        Self {
            simplify_epsilon_mm: default_epsilon_mm(),
            tool_offset_mm: 0.0,
        }
    }
}

/// A planned machine-space cutting path plus part measurements.
///
/// Measurements describe the full-resolution machine-space contour, before
/// simplification and offsetting touch the path itself.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CuttingPath {
    pub path_mm: Vec<MachinePoint>,
    pub area_mm2: f64,
    pub perimeter_mm: f64,
    pub centroid_mm: Option<MachinePoint>,
    /// True when the calibration used was the tagged fallback frame.
    pub fallback_calibration: bool,
}

/// Plan a cutting path from a pixel-space contour and a calibration.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        level = "info",
        skip(contour_px, calibration, params),
        fields(points = contour_px.len(), fallback = calibration.is_fallback())
    )
)]
pub fn plan_cutting_path(
    contour_px: &[PixelPoint],
    calibration: &Calibration,
    params: &PathParams,
) -> CuttingPath {
    let machine = calibration.frame.pixel_to_machine_path(contour_px);

    let area_mm2 = camcut_contour::area(&machine);
    let perimeter_mm = camcut_contour::perimeter(&machine);
    let centroid_mm = camcut_contour::centroid(&machine);

    let simplified = camcut_contour::simplify(&machine, params.simplify_epsilon_mm);
    log::debug!(
        "planned path: {} -> {} points after simplification (epsilon {} mm)",
        machine.len(),
        simplified.len(),
        params.simplify_epsilon_mm
    );

    let path_mm: Vec<MachinePoint> = if params.tool_offset_mm != 0.0 {
        camcut_contour::offset(&simplified, params.tool_offset_mm)
    } else {
        simplified
    };

    CuttingPath {
        path_mm,
        area_mm2,
        perimeter_mm,
        centroid_mm,
        fallback_calibration: calibration.is_fallback(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use camcut_calib::{MachineFrame, MarkerTriple};

    fn markers() -> MarkerTriple {
        MarkerTriple {
            origin: PixelPoint::new(0.0, 0.0),
            x_axis: PixelPoint::new(100.0, 0.0),
            scale: PixelPoint::new(0.0, 100.0),
            distance_mm: 50.0,
            distance_y_mm: None,
        }
    }

    fn square_px() -> Vec<PixelPoint> {
        vec![
            PixelPoint::new(0.0, 0.0),
            PixelPoint::new(20.0, 0.0),
            PixelPoint::new(20.0, 20.0),
            PixelPoint::new(0.0, 20.0),
        ]
    }

    #[test]
    fn plan_converts_and_measures_in_machine_units() {
        let cal = Calibration::from_markers(&markers());
        assert!(!cal.is_fallback());

        // 20 px square at 0.5 mm/px is a 10 mm square.
        let plan = plan_cutting_path(&square_px(), &cal, &PathParams::default());
        approx::assert_relative_eq!(plan.area_mm2, 100.0, max_relative = 1e-12);
        approx::assert_relative_eq!(plan.perimeter_mm, 40.0, max_relative = 1e-12);
        let c = plan.centroid_mm.expect("non-empty");
        assert!((c.x - 5.0).abs() < 1e-9);
        assert!((c.y + 5.0).abs() < 1e-9); // image Y-down flips to machine -Y
        assert!(!plan.fallback_calibration);
        assert_eq!(plan.path_mm.len(), 4);
    }

    #[test]
    fn offset_doubles_the_point_count_per_edge() {
        let cal = Calibration::from_markers(&markers());
        let params = PathParams {
            simplify_epsilon_mm: 0.1,
            tool_offset_mm: 1.0,
        };
        let plan = plan_cutting_path(&square_px(), &cal, &params);
        // 4 closed edges, two points each.
        assert_eq!(plan.path_mm.len(), 8);
    }

    #[test]
    fn fallback_calibration_is_reported() {
        let collinear = MarkerTriple {
            origin: PixelPoint::new(0.0, 0.0),
            x_axis: PixelPoint::new(10.0, 0.0),
            scale: PixelPoint::new(20.0, 0.0),
            distance_mm: 50.0,
            distance_y_mm: None,
        };
        let cal = Calibration::from_markers(&collinear);
        let plan = plan_cutting_path(&square_px(), &cal, &PathParams::default());
        assert!(plan.fallback_calibration);
        assert_eq!(cal.frame, MachineFrame::fallback(collinear.origin));
    }

    #[test]
    fn empty_contour_plans_to_empty_path() {
        let cal = Calibration::from_markers(&markers());
        let plan = plan_cutting_path(&[], &cal, &PathParams::default());
        assert!(plan.path_mm.is_empty());
        assert_eq!(plan.area_mm2, 0.0);
        assert_eq!(plan.perimeter_mm, 0.0);
        assert_eq!(plan.centroid_mm, None);
    }
}
