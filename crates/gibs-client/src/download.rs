//! High-resolution download orchestration with an escalating fallback
//! chain: full extent -> tiled mosaic -> coarser daily layer.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use chrono::{Duration, NaiveDate, Utc};
use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, RgbImage};
use tracing::{debug, error, info, warn};

use geo_common::{BoundingBox, ImageryLayer, DEFAULT_LAYER, FALLBACK_LAYER};

use crate::client::GibsClient;
use crate::error::{FetchError, FetchResult};
use crate::mosaic::{self, TileGrid};
use crate::request::GetMapRequest;
use crate::stats::ImageStats;

/// Oversampling multiplier applied on top of the layer's native
/// resolution, for smoother zoomed display.
const OVERSAMPLE_FACTOR: u32 = 4;

/// Maximum raster side length the WMS service will render.
const MAX_DIMENSION_PX: u32 = 8192;

/// Fallback layer pixel planning: ~3m/pixel oversampled, capped lower
/// than the primary request.
const FALLBACK_M_PER_PX: f64 = 3.0;
const FALLBACK_MAX_DIMENSION_PX: u32 = 4096;

/// JPEG quality for all saved imagery.
const JPEG_QUALITY: u8 = 95;

/// A request to download imagery around a point.
#[derive(Debug, Clone)]
pub struct FetchRequest {
    /// Center latitude.
    pub lat: f64,
    /// Center longitude.
    pub lon: f64,
    /// Physical width of the area in meters.
    pub width_m: f64,
    /// Physical height of the area in meters.
    pub height_m: f64,
    /// Layer catalog key. Unknown keys fall back to the default layer.
    pub layer_key: String,
    /// Force a specific acquisition date instead of probing.
    pub force_date: Option<NaiveDate>,
    /// Output path. Defaults to a name embedding coordinates and a
    /// timestamp.
    pub output: Option<PathBuf>,
}

/// A successfully downloaded image.
#[derive(Debug, Clone)]
pub struct FetchedImage {
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
    pub layer_key: &'static str,
    pub date: NaiveDate,
    /// Ground meters covered per output pixel.
    pub effective_resolution_m: f64,
}

/// Pixel side length for a physical extent: native pixels, oversampled,
/// clamped to the service maximum (and never zero).
fn plan_pixels(extent_m: f64, resolution_m: f64) -> u32 {
    let ideal = (extent_m / resolution_m) as u32;
    (ideal * OVERSAMPLE_FACTOR).clamp(1, MAX_DIMENSION_PX)
}

fn default_output_name(strategy: &str, layer_key: &str, lat: f64, lon: f64) -> PathBuf {
    let timestamp = Utc::now().format("%Y%m%d_%H%M%S");
    PathBuf::from(format!(
        "{layer_key}_{strategy}_{lat:.4}_{lon:.4}_{timestamp}.jpg"
    ))
}

fn save_jpeg(img: &DynamicImage, path: &Path) -> FetchResult<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    let mut encoder = JpegEncoder::new_with_quality(&mut writer, JPEG_QUALITY);
    // JPEG carries no alpha channel, so encode from the RGB view.
    encoder.encode_image(&img.to_rgb8())?;
    Ok(())
}

impl GibsClient {
    /// Download a close-up image with maximum possible resolution.
    ///
    /// Resolves the layer, picks an acquisition date (probing unless
    /// forced), then walks the strategy chain until one produces a
    /// non-blank image. Only exhaustion of every strategy is fatal.
    pub async fn fetch_closeup(&self, req: &FetchRequest) -> FetchResult<FetchedImage> {
        let layer = match ImageryLayer::get(&req.layer_key) {
            Some(layer) => layer,
            None => {
                warn!(
                    layer = %req.layer_key,
                    default = DEFAULT_LAYER,
                    "unknown layer key, using default"
                );
                ImageryLayer::get(DEFAULT_LAYER).expect("default layer in catalog")
            }
        };

        info!(
            lat = req.lat,
            lon = req.lon,
            width_m = req.width_m,
            height_m = req.height_m,
            layer = layer.key,
            resolution_m = layer.resolution_m,
            description = layer.description,
            "starting imagery download"
        );

        let date = match req.force_date {
            Some(date) => {
                info!(date = %date, "using forced acquisition date");
                Some(date)
            }
            None => self.find_best_date(layer, req.lat, req.lon).await?,
        };

        let Some(date) = date else {
            warn!(layer = layer.key, "no usable acquisition date, falling back");
            return self.fetch_fallback(req).await.map_err(|e| {
                error!(error = %e, "fallback layer failed");
                FetchError::AllStrategiesFailed
            });
        };

        match self.fetch_full_extent(req, layer, date).await {
            Ok(done) => return Ok(done),
            Err(e) => warn!(error = %e, "full-extent download failed, trying tiled mosaic"),
        }

        match self.fetch_tiled(req, layer, date).await {
            Ok(done) => return Ok(done),
            Err(e) => warn!(error = %e, "tiled mosaic failed, falling back to daily layer"),
        }

        self.fetch_fallback(req).await.map_err(|e| {
            error!(error = %e, "fallback layer failed");
            FetchError::AllStrategiesFailed
        })
    }

    /// One request for the whole extent at planned resolution, re-checked
    /// for blankness after download.
    async fn fetch_full_extent(
        &self,
        req: &FetchRequest,
        layer: &'static ImageryLayer,
        date: NaiveDate,
    ) -> FetchResult<FetchedImage> {
        let bbox = BoundingBox::from_center(req.lat, req.lon, req.width_m, req.height_m)?;

        let width_px = plan_pixels(req.width_m, layer.resolution_m);
        let height_px = plan_pixels(req.height_m, layer.resolution_m);
        let effective_resolution = req.width_m / width_px as f64;

        debug!(
            width_px,
            height_px,
            oversample = OVERSAMPLE_FACTOR,
            effective_resolution_m = effective_resolution,
            "planned full-extent request"
        );

        let request = GetMapRequest {
            layer: layer.name.to_string(),
            bbox,
            width: width_px,
            height: height_px,
            time: date,
        };

        let bytes = self
            .get_map(&request, self.config().download_timeout)
            .await?;
        let img = image::load_from_memory(&bytes)?;

        let stats = ImageStats::from_image(&img);
        if !stats.is_usable(&self.config().validation.full) {
            return Err(FetchError::BlankImage {
                mean: stats.mean,
                std_dev: stats.std_dev,
            });
        }

        let path = req
            .output
            .clone()
            .unwrap_or_else(|| default_output_name("closeup", layer.key, req.lat, req.lon));
        save_jpeg(&img, &path)?;

        info!(
            path = %path.display(),
            width = img.width(),
            height = img.height(),
            date = %date,
            effective_resolution_m = effective_resolution,
            "saved full-extent image"
        );

        Ok(FetchedImage {
            path,
            width: img.width(),
            height: img.height(),
            layer_key: layer.key,
            date,
            effective_resolution_m: effective_resolution,
        })
    }

    /// Tiled mosaic: partition the extent into ~150m tiles, fetch each
    /// sequentially, and composite into one canvas. Failed tiles stay
    /// black; zero successful tiles is an error.
    async fn fetch_tiled(
        &self,
        req: &FetchRequest,
        layer: &'static ImageryLayer,
        date: NaiveDate,
    ) -> FetchResult<FetchedImage> {
        let grid = TileGrid::for_extent(req.width_m, req.height_m);
        let full = BoundingBox::from_center(req.lat, req.lon, req.width_m, req.height_m)?;

        info!(
            tiles_x = grid.tiles_x,
            tiles_y = grid.tiles_y,
            pixels_per_tile = grid.pixels_per_tile,
            "downloading tile grid"
        );

        let (canvas_w, canvas_h) = grid.canvas_size();
        let mut canvas = RgbImage::new(canvas_w, canvas_h);
        let mut successful = 0u32;

        for row in 0..grid.tiles_y {
            for col in 0..grid.tiles_x {
                let request = GetMapRequest {
                    layer: layer.name.to_string(),
                    bbox: grid.tile_bbox(&full, col, row),
                    width: grid.pixels_per_tile,
                    height: grid.pixels_per_tile,
                    time: date,
                };

                let tile = match self.get_map(&request, self.config().tile_timeout).await {
                    Ok(bytes) => image::load_from_memory(&bytes),
                    Err(e) => {
                        warn!(row, col, error = %e, "tile request failed, leaving blank");
                        continue;
                    }
                };

                match tile {
                    Ok(img) => {
                        let (x, y) = grid.pixel_origin(col, row);
                        mosaic::composite(&mut canvas, &img, x, y);
                        successful += 1;
                        debug!(row, col, "tile composited");
                    }
                    Err(e) => {
                        warn!(row, col, error = %e, "tile decode failed, leaving blank");
                    }
                }
            }
        }

        if successful == 0 {
            return Err(FetchError::NoTiles);
        }

        let path = req
            .output
            .clone()
            .unwrap_or_else(|| default_output_name("tiled", layer.key, req.lat, req.lon));
        let img = DynamicImage::ImageRgb8(canvas);
        save_jpeg(&img, &path)?;

        info!(
            path = %path.display(),
            successful,
            total = grid.tiles_x * grid.tiles_y,
            "saved tiled mosaic"
        );

        Ok(FetchedImage {
            path,
            width: canvas_w,
            height: canvas_h,
            layer_key: layer.key,
            date,
            effective_resolution_m: req.width_m / canvas_w as f64,
        })
    }

    /// Last resort: the coarser daily VIIRS layer at yesterday's date.
    async fn fetch_fallback(&self, req: &FetchRequest) -> FetchResult<FetchedImage> {
        let layer = ImageryLayer::get(FALLBACK_LAYER).expect("fallback layer in catalog");
        let date = Utc::now().date_naive() - Duration::days(1);

        info!(layer = layer.key, date = %date, "falling back to daily coverage");

        let bbox = BoundingBox::from_center(req.lat, req.lon, req.width_m, req.height_m)?;
        let width_px =
            ((req.width_m / FALLBACK_M_PER_PX) as u32).clamp(1, FALLBACK_MAX_DIMENSION_PX);
        let height_px =
            ((req.height_m / FALLBACK_M_PER_PX) as u32).clamp(1, FALLBACK_MAX_DIMENSION_PX);

        let request = GetMapRequest {
            layer: layer.name.to_string(),
            bbox,
            width: width_px,
            height: height_px,
            time: date,
        };

        let bytes = self
            .get_map(&request, self.config().download_timeout)
            .await?;
        let img = image::load_from_memory(&bytes)?;

        let path = req
            .output
            .clone()
            .unwrap_or_else(|| default_output_name("fallback", layer.key, req.lat, req.lon));
        save_jpeg(&img, &path)?;

        info!(path = %path.display(), "saved fallback image");

        Ok(FetchedImage {
            path,
            width: img.width(),
            height: img.height(),
            layer_key: layer.key,
            date,
            effective_resolution_m: req.width_m / width_px as f64,
        })
    }
}
