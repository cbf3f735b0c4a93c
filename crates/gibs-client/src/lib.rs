//! NASA GIBS WMS client for farmland imagery downloads.
//!
//! Fetches satellite raster imagery around a geographic point:
//! - Probe-based acquisition-date selection per layer cadence
//! - Blankness validation via pixel mean/std thresholds
//! - High-resolution requests with 4x oversampling, clamped to the
//!   service's maximum raster size
//! - Escalating fallback chain: full extent -> tiled mosaic -> coarser
//!   daily layer

pub mod client;
pub mod config;
pub mod download;
pub mod error;
pub mod mosaic;
pub mod request;
pub mod stats;

pub use client::GibsClient;
pub use config::{BlanknessThresholds, ClientConfig, ValidationConfig};
pub use download::{FetchRequest, FetchedImage};
pub use error::{FetchError, FetchResult};
pub use mosaic::TileGrid;
pub use request::GetMapRequest;
pub use stats::ImageStats;
