//! GIBS WMS client: GetMap requests and probe-based date selection.

use std::time::Duration;

use chrono::{NaiveDate, Utc};
use reqwest::{header, StatusCode};
use tracing::{debug, info};

use geo_common::{candidate_dates, BoundingBox, ImageryLayer, LAYERS};

use crate::config::ClientConfig;
use crate::error::{FetchError, FetchResult};
use crate::request::GetMapRequest;
use crate::stats::ImageStats;

/// Ground extent of the probe box around the point, in meters.
const PROBE_EXTENT_M: f64 = 500.0;

/// Pixel size of the low-cost probe tile.
const PROBE_SIZE_PX: u32 = 256;

/// Client for the NASA GIBS WMS endpoint.
pub struct GibsClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl GibsClient {
    /// Create a client with the given configuration.
    pub fn new(config: ClientConfig) -> FetchResult<Self> {
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .connect_timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self { http, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Issue one GetMap request and return the raw image bytes.
    ///
    /// Non-200 status or a response without an image content-type is an
    /// error.
    pub async fn get_map(&self, request: &GetMapRequest, timeout: Duration) -> FetchResult<Vec<u8>> {
        let response = self
            .http
            .get(&self.config.base_url)
            .query(&request.query_params())
            .timeout(timeout)
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(FetchError::UnexpectedStatus(status));
        }

        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_string();
        if !content_type.contains("image") {
            return Err(FetchError::NotAnImage(content_type));
        }

        Ok(response.bytes().await?.to_vec())
    }

    /// Request a small probe tile and compute its pixel statistics.
    async fn probe(
        &self,
        layer: &ImageryLayer,
        bbox: &BoundingBox,
        date: NaiveDate,
    ) -> FetchResult<ImageStats> {
        let request = GetMapRequest {
            layer: layer.name.to_string(),
            bbox: *bbox,
            width: PROBE_SIZE_PX,
            height: PROBE_SIZE_PX,
            time: date,
        };

        let bytes = self.get_map(&request, self.config.probe_timeout).await?;
        let img = image::load_from_memory(&bytes)?;
        Ok(ImageStats::from_image(&img))
    }

    /// Find the most recent acquisition date with usable imagery at a point.
    ///
    /// Candidates follow the layer's cadence, most recent first; the first
    /// probe that clears the probe thresholds wins. Network, HTTP, and
    /// decode failures reject that date and iteration continues. `None`
    /// means no candidate produced usable imagery.
    pub async fn find_best_date(
        &self,
        layer: &ImageryLayer,
        lat: f64,
        lon: f64,
    ) -> FetchResult<Option<NaiveDate>> {
        let bbox = BoundingBox::from_center(lat, lon, PROBE_EXTENT_M, PROBE_EXTENT_M)?;
        let today = Utc::now().date_naive();

        for date in candidate_dates(layer.cadence, today) {
            match self.probe(layer, &bbox, date).await {
                Ok(stats) if stats.is_usable(&self.config.validation.probe) => {
                    info!(
                        layer = layer.key,
                        date = %date,
                        mean = stats.mean,
                        std = stats.std_dev,
                        "found usable acquisition date"
                    );
                    return Ok(Some(date));
                }
                Ok(stats) => {
                    debug!(
                        layer = layer.key,
                        date = %date,
                        mean = stats.mean,
                        std = stats.std_dev,
                        "probe tile blank or uniform"
                    );
                }
                Err(e) => {
                    debug!(layer = layer.key, date = %date, error = %e, "probe failed");
                }
            }
        }

        Ok(None)
    }

    /// Probe every Landsat/HLS layer for this point and return the ones
    /// that produced usable imagery, with their best date, in catalog
    /// order.
    pub async fn survey_layers(
        &self,
        lat: f64,
        lon: f64,
    ) -> FetchResult<Vec<(&'static ImageryLayer, NaiveDate)>> {
        let mut working = Vec::new();

        for layer in LAYERS.iter().filter(|l| l.is_high_resolution()) {
            info!(
                layer = layer.key,
                resolution_m = layer.resolution_m,
                "testing layer availability"
            );

            match self.find_best_date(layer, lat, lon).await? {
                Some(date) => {
                    info!(layer = layer.key, date = %date, "layer has usable imagery");
                    working.push((layer, date));
                }
                None => {
                    info!(layer = layer.key, "no usable imagery found");
                }
            }
        }

        Ok(working)
    }
}
