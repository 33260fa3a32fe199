use camcut_core::PixelPoint;
use serde::{Deserialize, Serialize};

/// Minimum pixel separation between any two markers.
pub const MIN_MARKER_SEPARATION_PX: f64 = 10.0;

/// Minimum origin→scale pixel distance (guards the ratio division).
pub const MIN_SCALE_DISTANCE_PX: f64 = 10.0;

/// Collinearity threshold factor: the triangle area spanned by the three
/// markers must exceed `longest_pairwise_distance * COLLINEARITY_FACTOR`.
/// Scaling by the longest side makes the test scale-invariant.
pub const COLLINEARITY_FACTOR: f64 = 0.01;

/// Accepted mm-per-pixel range, lower bound exclusive, upper inclusive.
pub const MIN_MM_PER_PX: f64 = 0.01;
pub const MAX_MM_PER_PX: f64 = 100.0;

/// Scale used by the fallback frame when marker input is rejected.
pub const FALLBACK_MM_PER_PX: f64 = 0.1;

/// Three detected marker points plus their known real-world distances.
///
/// `distance_mm` is the origin→scale distance; when `distance_y_mm` is also
/// given, `distance_mm` is reinterpreted as the origin→x-axis distance and the
/// two per-axis ratios are averaged into one isotropic scale.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MarkerTriple {
    pub origin: PixelPoint,
    pub x_axis: PixelPoint,
    pub scale: PixelPoint,
    pub distance_mm: f64,
    #[serde(default)]
    pub distance_y_mm: Option<f64>,
}

/// Why a marker triple was rejected.
#[derive(thiserror::Error, Clone, Copy, Debug, PartialEq)]
pub enum CalibrationError {
    #[error("markers are collinear (triangle area {area:.3} below threshold {threshold:.3})")]
    CollinearMarkers { area: f64, threshold: f64 },
    #[error("markers too close together ({distance_px:.2} px, need {MIN_MARKER_SEPARATION_PX} px)")]
    MarkersTooClose { distance_px: f64 },
    #[error("origin to scale marker distance degenerate ({distance_px:.2} px)")]
    DegenerateScaleDistance { distance_px: f64 },
    #[error("resulting scale {mm_per_px} mm/px outside ({MIN_MM_PER_PX}, {MAX_MM_PER_PX}]")]
    ScaleOutOfRange { mm_per_px: f64 },
}

/// A calibrated machine coordinate frame.
///
/// Immutable once built; a re-calibration event produces a new value. The
/// frame is expressed in pixel space: where the machine origin sits, how the
/// machine X axis is rotated relative to image X, and the isotropic scale.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MachineFrame {
    pub origin_px: PixelPoint,
    pub orientation_rad: f64,
    pub mm_per_px: f64,
}

impl MachineFrame {
    /// Build a frame from a validated marker triple.
    ///
    /// Rejects collinear or crowded markers and out-of-range scales; see
    /// [`Calibration::from_markers`] for the never-failing variant.
    pub fn from_markers(markers: &MarkerTriple) -> Result<Self, CalibrationError> {
        validate_marker_geometry(markers)?;

        let orientation_rad = {
            let d = markers.x_axis.delta(markers.origin);
            d.y.atan2(d.x)
        };

        let mm_per_px = match markers.distance_y_mm {
            None => markers.distance_mm / markers.origin.distance(markers.scale),
            Some(distance_y_mm) => {
                // Two known distances: average the per-axis ratios into one
                // isotropic scale. Independent X/Y scaling is not supported.
                let rx = markers.distance_mm / markers.origin.distance(markers.x_axis);
                let ry = distance_y_mm / markers.origin.distance(markers.scale);
                0.5 * (rx + ry)
            }
        };

        if !mm_per_px.is_finite() || mm_per_px <= MIN_MM_PER_PX || mm_per_px > MAX_MM_PER_PX {
            return Err(CalibrationError::ScaleOutOfRange { mm_per_px });
        }

        Ok(Self {
            origin_px: markers.origin,
            orientation_rad,
            mm_per_px,
        })
    }

    /// The fixed default frame substituted when marker input is rejected:
    /// no rotation, 0.1 mm/px, origin at the requested origin marker.
    pub fn fallback(origin: PixelPoint) -> Self {
        Self {
            origin_px: origin,
            orientation_rad: 0.0,
            mm_per_px: FALLBACK_MM_PER_PX,
        }
    }
}

fn validate_marker_geometry(markers: &MarkerTriple) -> Result<(), CalibrationError> {
    let (a, b, c) = (markers.origin, markers.x_axis, markers.scale);

    let d_ab = a.distance(b);
    let d_ac = a.distance(c);
    let d_bc = b.distance(c);

    // Cross-product triangle area, compared against a threshold scaled by the
    // longest side so the test is independent of marker pixel scale.
    let area = (a.x * (b.y - c.y) + b.x * (c.y - a.y) + c.x * (a.y - b.y)).abs() / 2.0;
    let threshold = d_ab.max(d_ac).max(d_bc) * COLLINEARITY_FACTOR;
    if area < threshold {
        return Err(CalibrationError::CollinearMarkers { area, threshold });
    }

    // The origin→scale distance feeds the ratio division, so it gets its own
    // rejection before the generic pairwise check.
    if d_ac < MIN_SCALE_DISTANCE_PX {
        return Err(CalibrationError::DegenerateScaleDistance { distance_px: d_ac });
    }

    for d in [d_ab, d_ac, d_bc] {
        if d < MIN_MARKER_SEPARATION_PX {
            return Err(CalibrationError::MarkersTooClose { distance_px: d });
        }
    }

    Ok(())
}

/// Where a [`Calibration`]'s frame came from.
///
/// Serialize-only (as is [`Calibration`]): the source tag is a diagnostic for
/// consumers, not a persisted input.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CalibrationSource {
    /// Frame computed from the supplied markers.
    Markers,
    /// Marker input was rejected; the frame is the fixed default.
    Fallback(CalibrationError),
}

impl Serialize for CalibrationError {
    fn serialize<Ser: serde::Serializer>(&self, s: Ser) -> Result<Ser::Ok, Ser::Error> {
        s.collect_str(self)
    }
}

/// A calibration result that is always usable.
///
/// Invalid marker input never fails outwardly; it yields the fixed default
/// frame, tagged so callers can surface a warning instead of treating the
/// substitute as a real calibration.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Calibration {
    pub frame: MachineFrame,
    pub source: CalibrationSource,
}

impl Calibration {
    /// Calibrate from a marker triple, substituting the tagged fallback frame
    /// on invalid input.
    pub fn from_markers(markers: &MarkerTriple) -> Self {
        match MachineFrame::from_markers(markers) {
            Ok(frame) => Self {
                frame,
                source: CalibrationSource::Markers,
            },
            Err(err) => {
                log::warn!("calibration rejected, using fallback frame: {err}");
                Self {
                    frame: MachineFrame::fallback(markers.origin),
                    source: CalibrationSource::Fallback(err),
                }
            }
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self.source, CalibrationSource::Fallback(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triple(
        origin: (f64, f64),
        x_axis: (f64, f64),
        scale: (f64, f64),
        distance_mm: f64,
    ) -> MarkerTriple {
        MarkerTriple {
            origin: PixelPoint::new(origin.0, origin.1),
            x_axis: PixelPoint::new(x_axis.0, x_axis.1),
            scale: PixelPoint::new(scale.0, scale.1),
            distance_mm,
            distance_y_mm: None,
        }
    }

    #[test]
    fn axis_aligned_markers_calibrate() {
        use approx::assert_relative_eq;

        let m = triple((0.0, 0.0), (100.0, 0.0), (0.0, 100.0), 50.0);
        let frame = MachineFrame::from_markers(&m).expect("valid markers");
        assert_relative_eq!(frame.mm_per_px, 0.5, max_relative = 1e-12);
        assert!(frame.orientation_rad.abs() < 1e-12);
        assert_eq!(frame.origin_px, m.origin);
    }

    #[test]
    fn frame_serde_round_trips() {
        let m = triple((12.0, 34.0), (250.0, 70.0), (40.0, 300.0), 80.0);
        let frame = MachineFrame::from_markers(&m).expect("valid");
        let json = serde_json::to_string(&frame).expect("serialize");
        let back: MachineFrame = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, frame);
    }

    #[test]
    fn calibration_is_deterministic() {
        let m = triple((12.0, 34.0), (250.0, 70.0), (40.0, 300.0), 80.0);
        let a = MachineFrame::from_markers(&m).expect("valid");
        let b = MachineFrame::from_markers(&m).expect("valid");
        assert_eq!(a, b);
    }

    #[test]
    fn collinear_markers_are_rejected() {
        let m = triple((0.0, 0.0), (10.0, 0.0), (20.0, 0.0), 50.0);
        assert!(matches!(
            MachineFrame::from_markers(&m),
            Err(CalibrationError::CollinearMarkers { .. })
        ));

        let cal = Calibration::from_markers(&m);
        assert!(cal.is_fallback());
        assert_eq!(cal.frame, MachineFrame::fallback(m.origin));
    }

    #[test]
    fn crowded_markers_are_rejected() {
        let m = triple((0.0, 0.0), (5.0, 0.0), (0.0, 200.0), 50.0);
        assert!(matches!(
            MachineFrame::from_markers(&m),
            Err(CalibrationError::MarkersTooClose { .. })
        ));
    }

    #[test]
    fn short_scale_distance_reports_its_own_rejection() {
        // Origin and scale marker 5 px apart, everything else well spread:
        // the scale-distance guard fires, not the generic pairwise one.
        let m = triple((0.0, 0.0), (100.0, 2.0), (0.0, 5.0), 50.0);
        assert!(matches!(
            MachineFrame::from_markers(&m),
            Err(CalibrationError::DegenerateScaleDistance { distance_px }) if distance_px == 5.0
        ));
    }

    #[test]
    fn out_of_range_scale_is_rejected() {
        // 10000 mm over ~100 px is 100+ mm/px.
        let m = triple((0.0, 0.0), (100.0, 0.0), (0.0, 99.0), 10_000.0);
        assert!(matches!(
            MachineFrame::from_markers(&m),
            Err(CalibrationError::ScaleOutOfRange { .. })
        ));
    }

    #[test]
    fn nan_marker_input_falls_back() {
        let m = triple((f64::NAN, 0.0), (100.0, 0.0), (0.0, 100.0), 50.0);
        let cal = Calibration::from_markers(&m);
        assert!(cal.is_fallback());
        assert!(cal.frame.mm_per_px == FALLBACK_MM_PER_PX);
    }

    #[test]
    fn two_distance_calibration_averages_ratios() {
        let m = MarkerTriple {
            origin: PixelPoint::new(0.0, 0.0),
            x_axis: PixelPoint::new(100.0, 0.0),
            scale: PixelPoint::new(0.0, 200.0),
            distance_mm: 50.0,  // 0.5 mm/px along X
            distance_y_mm: Some(200.0), // 1.0 mm/px along Y
        };
        let frame = MachineFrame::from_markers(&m).expect("valid");
        assert!((frame.mm_per_px - 0.75).abs() < 1e-12);
    }

    #[test]
    fn rotated_markers_recover_orientation() {
        // X axis marker at 45 degrees in image coords.
        let m = triple((50.0, 50.0), (150.0, 150.0), (150.0, -50.0), 50.0);
        let frame = MachineFrame::from_markers(&m).expect("valid");
        assert!((frame.orientation_rad - std::f64::consts::FRAC_PI_4).abs() < 1e-12);
    }
}
