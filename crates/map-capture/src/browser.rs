//! WebDriver capture sequence.
//!
//! The portal gives no reliable load event for its map pane, so the
//! sequence is sleep-based like the interface it automates: navigate,
//! wait, dismiss the tour popup with Escape, toggle the results panel
//! with `]`, wait for the transition, screenshot.

use std::path::PathBuf;
use std::time::Duration;

use chrono::Utc;
use fantoccini::actions::{InputSource, KeyAction, KeyActions};
use fantoccini::{Client, ClientBuilder};
use tokio::time::sleep;
use tracing::{info, warn};

use crate::crop::{crop_to_map, CropMargins};
use crate::error::CaptureResult;
use crate::url::EarthdataSearch;

/// WebDriver Escape key codepoint.
const ESCAPE_KEY: char = '\u{e00c}';

/// Keystroke the portal binds to the results-panel toggle.
const PANEL_TOGGLE_KEY: char = ']';

/// Configuration for the browser session.
#[derive(Debug, Clone)]
pub struct CaptureConfig {
    /// WebDriver endpoint (chromedriver).
    pub webdriver_url: String,
    /// Wait after navigation for the page to fully load.
    pub page_load_wait: Duration,
    /// Browser window size. The crop margins assume 1920x1080.
    pub window_width: u32,
    pub window_height: u32,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            webdriver_url: "http://localhost:9515".to_string(),
            page_load_wait: Duration::from_secs(10),
            window_width: 1920,
            window_height: 1080,
        }
    }
}

fn chrome_capabilities(config: &CaptureConfig) -> serde_json::Map<String, serde_json::Value> {
    let mut caps = serde_json::Map::new();
    caps.insert(
        "goog:chromeOptions".to_string(),
        serde_json::json!({
            "args": [
                "--headless",
                "--no-sandbox",
                "--disable-dev-shm-usage",
                format!("--window-size={},{}", config.window_width, config.window_height),
                "--disable-gpu",
            ]
        }),
    );
    caps
}

/// Load a URL in a headless browser and return a full-page PNG
/// screenshot.
///
/// The browser session is released unconditionally, including when the
/// drive sequence fails; the first error is propagated after cleanup.
pub async fn capture_page(config: &CaptureConfig, url: &str) -> CaptureResult<Vec<u8>> {
    let client = ClientBuilder::native()
        .capabilities(chrome_capabilities(config))
        .connect(&config.webdriver_url)
        .await?;

    let result = drive(&client, config, url).await;

    if let Err(e) = client.close().await {
        warn!(error = %e, "failed to close WebDriver session");
    }

    result
}

async fn drive(client: &Client, config: &CaptureConfig, url: &str) -> CaptureResult<Vec<u8>> {
    client
        .set_window_size(config.window_width, config.window_height)
        .await?;

    info!(url, "loading page");
    client.goto(url).await?;

    info!(wait_secs = config.page_load_wait.as_secs(), "waiting for page load");
    sleep(config.page_load_wait).await;

    info!("dismissing popup with Escape");
    send_key(client, ESCAPE_KEY).await?;
    sleep(Duration::from_secs(1)).await;

    info!("toggling results panel for full map view");
    send_key(client, PANEL_TOGGLE_KEY).await?;
    sleep(Duration::from_secs(2)).await;

    info!("capturing screenshot");
    Ok(client.screenshot().await?)
}

async fn send_key(client: &Client, key: char) -> CaptureResult<()> {
    let actions = KeyActions::new("keyboard".to_string())
        .then(KeyAction::Down { value: key })
        .then(KeyAction::Up { value: key });
    client.perform_actions(actions).await?;
    Ok(())
}

/// Capture a search-portal screenshot to a PNG file, optionally cropped
/// to the map pane.
pub async fn capture_to_file(
    config: &CaptureConfig,
    search: &EarthdataSearch,
    output: Option<PathBuf>,
    crop: Option<&CropMargins>,
) -> CaptureResult<PathBuf> {
    let url = search.url();
    info!(url = %url, "generated search URL");

    let png = capture_page(config, &url).await?;
    let mut img = image::load_from_memory(&png)?;

    if let Some(margins) = crop {
        img = crop_to_map(&img, margins)?;
        info!(
            width = img.width(),
            height = img.height(),
            "cropped to map area"
        );
    }

    let path = output.unwrap_or_else(|| default_output_name(search.lat, search.lon));
    img.save(&path)?;
    info!(path = %path.display(), "screenshot saved");

    Ok(path)
}

fn default_output_name(lat: f64, lon: f64) -> PathBuf {
    let timestamp = Utc::now().format("%Y%m%d_%H%M%S");
    PathBuf::from(format!("earthdata_{lat}_{lon}_{timestamp}.png"))
}
