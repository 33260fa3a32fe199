//! Calibrate from a marker triple and plan a cutting path for a contour.
//!
//! Run with `cargo run --example plan_path`.

use camcut::calib::{Calibration, MarkerTriple};
use camcut::core::PixelPoint;
use camcut::plan::{plan_cutting_path, PathParams};

fn main() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .init();

    let cal = Calibration::from_markers(&MarkerTriple {
        origin: PixelPoint::new(120.0, 800.0),
        x_axis: PixelPoint::new(900.0, 780.0),
        scale: PixelPoint::new(130.0, 150.0),
        distance_mm: 260.0,
        distance_y_mm: None,
    });
    println!(
        "calibrated: {:.4} mm/px, orientation {:.4} rad, fallback: {}",
        cal.frame.mm_per_px,
        cal.frame.orientation_rad,
        cal.is_fallback()
    );

    // A jagged rectangle, as a contour tracer might produce it.
    let contour: Vec<PixelPoint> = (0..=40)
        .map(|i| {
            let t = i as f64 / 40.0;
            let wiggle = if i % 2 == 0 { 1.5 } else { -1.5 };
            match i / 10 {
                0 => PixelPoint::new(200.0 + 400.0 * (t * 4.0), 700.0 + wiggle),
                1 => PixelPoint::new(600.0 + wiggle, 700.0 - 400.0 * (t * 4.0 - 1.0)),
                2 => PixelPoint::new(600.0 - 400.0 * (t * 4.0 - 2.0), 300.0 + wiggle),
                _ => PixelPoint::new(200.0 + wiggle, 300.0 + 400.0 * (t * 4.0 - 3.0)),
            }
        })
        .collect();

    let plan = plan_cutting_path(
        &contour,
        &cal,
        &PathParams {
            simplify_epsilon_mm: 1.0,
            tool_offset_mm: 2.0,
        },
    );

    println!(
        "part: {:.1} mm2, perimeter {:.1} mm, path {} points",
        plan.area_mm2,
        plan.perimeter_mm,
        plan.path_mm.len()
    );
    for p in plan.path_mm.iter().take(6) {
        println!("  ({:8.2}, {:8.2})", p.x, p.y);
    }
}
