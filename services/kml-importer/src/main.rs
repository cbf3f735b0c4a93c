//! KML importer for the farmland-mapping project.
//!
//! Reads every layer of a KML file, flattens 3D geometry to 2D, tags
//! features with their source layer, and replaces the farm-boundaries
//! table in PostGIS.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use kml_import::import_kml;

#[derive(Parser, Debug)]
#[command(name = "kml-importer")]
#[command(about = "Imports KML farm boundaries into PostGIS")]
struct Args {
    /// Path to the KML file
    kml_path: PathBuf,

    /// PostgreSQL connection URL (requires the PostGIS extension)
    #[arg(long, env = "DATABASE_URL")]
    database_url: String,

    /// Destination table, replaced destructively
    #[arg(long, default_value = "farm_boundaries")]
    table: String,

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

    info!(path = %args.kml_path.display(), "Starting KML import");

    let imported = import_kml(&args.kml_path, &args.database_url, &args.table)
        .await
        .context("KML import failed")?;

    info!(
        table = %args.table,
        features = imported,
        "import complete"
    );

    Ok(())
}
