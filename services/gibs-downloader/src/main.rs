//! Satellite imagery downloader for the farmland-mapping project.
//!
//! Fetches the best available high-resolution imagery around a farm
//! parcel from NASA GIBS:
//! - Probes recent acquisition dates per layer cadence
//! - Requests the full extent with 4x oversampling
//! - Escalates to a tiled mosaic, then to the daily VIIRS layer

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Parser;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use geo_common::FALLBACK_LAYER;
use gibs_client::{ClientConfig, FetchRequest, GibsClient};

#[derive(Parser, Debug)]
#[command(name = "gibs-downloader")]
#[command(about = "High-resolution Landsat farm imagery downloader")]
struct Args {
    /// Center latitude of the farm parcel
    #[arg(long, default_value_t = 20.1381967836148)]
    lat: f64,

    /// Center longitude of the farm parcel
    #[arg(long, default_value_t = -99.056869712403)]
    lon: f64,

    /// Side length of the square area in meters (smaller = more detail)
    #[arg(long, default_value_t = 300.0)]
    area_m: f64,

    /// Layer catalog key
    #[arg(long, default_value = "landsat_weld")]
    layer: String,

    /// Force a specific acquisition date (YYYY-MM-DD) instead of probing
    #[arg(long)]
    date: Option<NaiveDate>,

    /// Output path (default embeds coordinates and a timestamp)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Probe all Landsat/HLS layers first and download from the best one
    #[arg(long)]
    survey: bool,

    /// WMS endpoint override
    #[arg(long, env = "GIBS_WMS_URL")]
    wms_url: Option<String>,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
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

    info!("Starting GIBS imagery downloader");

    let mut config = ClientConfig::default();
    if let Some(url) = &args.wms_url {
        config.base_url = url.clone();
    }
    let client = GibsClient::new(config).context("Failed to create GIBS client")?;

    // With --survey, check which Landsat/HLS layers actually have data for
    // this point before committing to a download.
    let (layer_key, force_date) = if args.survey {
        let working = client.survey_layers(args.lat, args.lon).await?;

        match working.first() {
            Some((layer, date)) => {
                info!(
                    layer = layer.key,
                    date = %date,
                    working = working.len(),
                    "survey selected best layer"
                );
                (layer.key.to_string(), Some(*date))
            }
            None => {
                warn!("no Landsat/HLS layer has usable imagery, using daily fallback");
                (FALLBACK_LAYER.to_string(), None)
            }
        }
    } else {
        (args.layer.clone(), args.date)
    };

    let request = FetchRequest {
        lat: args.lat,
        lon: args.lon,
        width_m: args.area_m,
        height_m: args.area_m,
        layer_key,
        force_date,
        output: args.output.clone(),
    };

    let fetched = client
        .fetch_closeup(&request)
        .await
        .context("All download strategies failed")?;

    info!(
        path = %fetched.path.display(),
        width = fetched.width,
        height = fetched.height,
        layer = fetched.layer_key,
        date = %fetched.date,
        effective_resolution_m = fetched.effective_resolution_m,
        coverage_m = args.area_m,
        "download complete"
    );

    Ok(())
}
