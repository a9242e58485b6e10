use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use serde_json::json;

use pointbrowse::{run_browser, BrowserConfig, ColumnConfig, DataPoint, PointSet};

/// Browse a scatter plot: lasso-select points, click or arrow through rows.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// JSON file holding an array of row objects.
    #[arg(long, value_name = "FILE")]
    points: Option<PathBuf>,

    /// Generate N demo points instead of loading a file.
    #[arg(long, value_name = "N", default_value_t = 25)]
    demo: usize,

    /// Column holding the x coordinate.
    #[arg(long)]
    x_col: Option<String>,

    /// Column holding the y coordinate.
    #[arg(long)]
    y_col: Option<String>,

    /// Column holding the row key (defaults to the row position).
    #[arg(long)]
    key_col: Option<String>,

    /// Config file (defaults to ~/.pointbrowse/config.yaml).
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Write the effective config to the default path and exit.
    #[arg(long)]
    save_config: bool,
}

/// Points on a sunflower spiral, each carrying a small payload series.
fn demo_points(n: usize) -> Vec<DataPoint> {
    let golden = std::f64::consts::PI * (3.0 - 5f64.sqrt());
    (0..n)
        .map(|i| {
            let r = ((i as f64 + 0.5) / n.max(1) as f64).sqrt();
            let theta = i as f64 * golden;
            let x = r * theta.cos();
            let payload: Vec<f64> = (0..100).map(|k| x * (k as f64 * 0.1).sin()).collect();
            DataPoint::new(format!("{i}th"), x, r * theta.sin())
                .with_field("size", json!(3.0 + 7.0 * r))
                .with_field("payload", json!(payload))
        })
        .collect()
}

fn load_config(args: &Args) -> Result<BrowserConfig, pointbrowse::ConfigError> {
    let mut cfg = match &args.config {
        Some(path) => BrowserConfig::load_from(path)?,
        None => BrowserConfig::load_or_default(),
    };
    let columns: &mut ColumnConfig = &mut cfg.columns;
    if let Some(x) = &args.x_col {
        columns.x = x.clone();
    }
    if let Some(y) = &args.y_col {
        columns.y = y.clone();
    }
    if args.key_col.is_some() {
        columns.key = args.key_col.clone();
    }
    Ok(cfg)
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let cfg = match load_config(&args) {
        Ok(cfg) => cfg,
        Err(e) => {
            log::error!("Failed to load config: {e}");
            return ExitCode::FAILURE;
        }
    };

    if args.save_config {
        return match cfg.save_to_default_path() {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                log::error!("Failed to save config: {e}");
                ExitCode::FAILURE
            }
        };
    }

    let points = match &args.points {
        Some(path) => PointSet::load_json_file(path, &cfg.columns),
        None => PointSet::new(demo_points(args.demo)),
    };
    let points = match points {
        Ok(points) => points,
        Err(e) => {
            log::error!("Failed to load points: {e}");
            return ExitCode::FAILURE;
        }
    };
    log::info!("browsing {} points", points.len());

    if let Err(e) = run_browser(points, cfg) {
        log::error!("UI error: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
