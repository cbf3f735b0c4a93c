//! Configuration for the GIBS WMS client.

use std::time::Duration;

/// GIBS WMS endpoint serving EPSG:4326 best-available composites.
pub const DEFAULT_WMS_URL: &str = "https://gibs.earthdata.nasa.gov/wms/epsg4326/best/wms.cgi";

/// Configuration for the GIBS client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// WMS base URL.
    pub base_url: String,
    /// User-Agent header sent with every request.
    pub user_agent: String,
    /// Timeout for small probe tiles.
    pub probe_timeout: Duration,
    /// Timeout for full-extent downloads.
    pub download_timeout: Duration,
    /// Timeout for individual mosaic tiles.
    pub tile_timeout: Duration,
    /// Blankness validation thresholds.
    pub validation: ValidationConfig,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_WMS_URL.to_string(),
            user_agent: "gibs-farm-downloader/0.1".to_string(),
            probe_timeout: Duration::from_secs(10),
            download_timeout: Duration::from_secs(60),
            tile_timeout: Duration::from_secs(30),
            validation: ValidationConfig::default(),
        }
    }
}

/// Minimum pixel mean and standard deviation for an image to count as
/// usable. Rejects all-black (no-data) and flat/cloud-washed tiles.
#[derive(Debug, Clone, Copy)]
pub struct BlanknessThresholds {
    pub min_mean: f64,
    pub min_std: f64,
}

/// Threshold pairs for the two validation points.
///
/// The probe and the post-download re-check intentionally use different
/// magnitudes; both are parameters rather than derived from one rule.
#[derive(Debug, Clone, Copy)]
pub struct ValidationConfig {
    /// Applied to 256x256 probe tiles during date selection.
    pub probe: BlanknessThresholds,
    /// Applied to the full-extent image after download.
    pub full: BlanknessThresholds,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            probe: BlanknessThresholds {
                min_mean: 10.0,
                min_std: 5.0,
            },
            full: BlanknessThresholds {
                min_mean: 5.0,
                min_std: 2.0,
            },
        }
    }
}
