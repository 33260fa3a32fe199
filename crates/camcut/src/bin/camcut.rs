//! Plan a cutting path from a JSON job description.
//!
//! The job carries the detected marker triple, the detected contour in pixel
//! coordinates, and optional tolerances:
//!
//! ```json
//! {
//!   "markers": {
//!     "origin": {"x": 0.0, "y": 0.0},
//!     "x_axis": {"x": 100.0, "y": 0.0},
//!     "scale": {"x": 0.0, "y": 100.0},
//!     "distance_mm": 50.0
//!   },
//!   "contour_px": [{"x": 0.0, "y": 0.0}, {"x": 20.0, "y": 0.0}],
//!   "params": {"simplify_epsilon_mm": 0.1, "tool_offset_mm": 1.5}
//! }
//! ```

use std::fs;
use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;
use serde::{Deserialize, Serialize};

use camcut::calib::{Calibration, MarkerTriple};
use camcut::core::PixelPoint;
use camcut::plan::{plan_cutting_path, CuttingPath, PathParams};

#[derive(Parser, Debug)]
#[command(name = "camcut", about = "Plan a machine-space cutting path from markers and a contour")]
struct Cli {
    /// Path to the JSON job file.
    job: PathBuf,

    /// Write the plan to this file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Deserialize)]
struct Job {
    markers: MarkerTriple,
    contour_px: Vec<PixelPoint>,
    #[serde(default)]
    params: Option<PathParams>,
}

#[derive(Debug, Serialize)]
struct JobOutput {
    calibration: Calibration,
    plan: CuttingPath,
}

#[derive(thiserror::Error, Debug)]
enum JobError {
    #[error("failed to read job file: {0}")]
    Read(#[source] std::io::Error),
    #[error("invalid job JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("failed to write output: {0}")]
    Write(#[source] std::io::Error),
}

fn run(cli: &Cli) -> Result<(), JobError> {
    let text = fs::read_to_string(&cli.job).map_err(JobError::Read)?;
    let job: Job = serde_json::from_str(&text)?;

    let calibration = Calibration::from_markers(&job.markers);
    if calibration.is_fallback() {
        log::warn!("job markers rejected; plan uses the fallback frame");
    }

    let params = job.params.unwrap_or_default();
    let plan = plan_cutting_path(&job.contour_px, &calibration, &params);
    log::info!(
        "plan: {} points, area {:.3} mm2, perimeter {:.3} mm",
        plan.path_mm.len(),
        plan.area_mm2,
        plan.perimeter_mm
    );

    let out = JobOutput { calibration, plan };
    let json = serde_json::to_string_pretty(&out)?;
    match &cli.output {
        Some(path) => fs::write(path, json).map_err(JobError::Write)?,
        None => println!("{json}"),
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    let level = match cli.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .init();

    if let Err(err) = run(&cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
