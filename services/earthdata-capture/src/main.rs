//! Earthdata screenshot capture for the farmland-mapping project.
//!
//! Builds a granule-search URL around a farm parcel, loads it in a
//! headless browser via WebDriver, and saves a screenshot cropped to the
//! map pane.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use map_capture::{capture_to_file, zoom_for_area, CaptureConfig, CropMargins, EarthdataSearch};

#[derive(Parser, Debug)]
#[command(name = "earthdata-capture")]
#[command(about = "Captures cropped Earthdata map screenshots")]
struct Args {
    /// Center latitude of the farm parcel
    #[arg(long, default_value_t = 20.1452006314719)]
    lat: f64,

    /// Center longitude of the farm parcel
    #[arg(long, default_value_t = -99.0546790285769)]
    lon: f64,

    /// Temporal range start (YYYY-MM-DD)
    #[arg(long, default_value = "2025-07-05")]
    start_date: NaiveDate,

    /// Temporal range end (YYYY-MM-DD)
    #[arg(long, default_value = "2025-07-06")]
    end_date: NaiveDate,

    /// Ground area in square meters used to derive the zoom level
    #[arg(long, default_value_t = 11148.6419323683)]
    area_m2: f64,

    /// Explicit zoom override (skips the area heuristic)
    #[arg(long)]
    zoom: Option<f64>,

    /// Earthdata collection identifier
    #[arg(long, default_value = "C2021957657-LPCLOUD")]
    collection: String,

    /// WebDriver endpoint (chromedriver)
    #[arg(long, env = "WEBDRIVER_URL", default_value = "http://localhost:9515")]
    webdriver_url: String,

    /// Seconds to wait for the page to fully load
    #[arg(long, default_value_t = 7)]
    wait_secs: u64,

    /// Keep the full page instead of cropping to the map pane
    #[arg(long)]
    no_crop: bool,

    /// Output path (default embeds coordinates and a timestamp)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

/// Round a coordinate to five decimals, the precision the portal URL
/// carries.
fn round5(value: f64) -> f64 {
    (value * 1e5).round() / 1e5
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment from .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();

    let level = match args.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting Earthdata screenshot capture");

    let zoom = match args.zoom {
        Some(zoom) => zoom,
        None => zoom_for_area(args.area_m2).context("Cannot derive zoom level")?,
    };

    let search = EarthdataSearch {
        collection: args.collection.clone(),
        lat: round5(args.lat),
        lon: round5(args.lon),
        start_date: args.start_date,
        end_date: args.end_date,
        zoom,
    };

    let config = CaptureConfig {
        webdriver_url: args.webdriver_url.clone(),
        page_load_wait: Duration::from_secs(args.wait_secs),
        ..Default::default()
    };

    let crop = (!args.no_crop).then(CropMargins::default);

    let path = capture_to_file(&config, &search, args.output.clone(), crop.as_ref())
        .await
        .context("Screenshot capture failed")?;

    info!(path = %path.display(), zoom, "capture complete");

    Ok(())
}
