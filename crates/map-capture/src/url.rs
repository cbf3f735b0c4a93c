//! Earthdata granule-search URL construction and the zoom heuristic.

use chrono::NaiveDate;

use crate::error::{CaptureError, CaptureResult};

/// Earthdata granule search portal.
pub const SEARCH_BASE_URL: &str = "https://search.earthdata.nasa.gov/search/granules";

/// HLS collection the farmland project browses.
pub const DEFAULT_COLLECTION: &str = "C2021957657-LPCLOUD";

/// Fixed timeline fragment the portal expects in the URL.
const TIMELINE_FRAGMENT: &str = "1562640103.056!5!!";

const MIN_ZOOM: f64 = 15.0;
const MAX_ZOOM: f64 = 20.0;
const ZOOM_OFFSET: f64 = 1.0;

/// Approximate zoom level for a ground area in square meters.
///
/// Empirical formula: `19 - sqrt(area)/100`, clamped to [15, 20], plus a
/// fixed +1 offset. Non-positive or non-finite areas are an error rather
/// than a degenerate zoom.
pub fn zoom_for_area(area_m2: f64) -> CaptureResult<f64> {
    if !area_m2.is_finite() || area_m2 <= 0.0 {
        return Err(CaptureError::InvalidArea(area_m2));
    }

    let zoom = 19.0 - area_m2.sqrt() / 100.0;
    Ok(zoom.clamp(MIN_ZOOM, MAX_ZOOM) + ZOOM_OFFSET)
}

/// Parameters embedded in the search URL.
#[derive(Debug, Clone)]
pub struct EarthdataSearch {
    /// Collection (dataset) identifier.
    pub collection: String,
    pub lat: f64,
    pub lon: f64,
    /// Inclusive temporal range start (expanded to 00:00:00.000Z).
    pub start_date: NaiveDate,
    /// Inclusive temporal range end (expanded to 23:59:59.999Z).
    pub end_date: NaiveDate,
    pub zoom: f64,
}

impl EarthdataSearch {
    /// Build the full portal URL. Reserved characters inside parameter
    /// values are pre-encoded the way the portal serializes them.
    pub fn url(&self) -> String {
        let start = format!("{}T00%3A00%3A00.000Z", self.start_date.format("%Y-%m-%d"));
        let end = format!("{}T23%3A59%3A59.999Z", self.end_date.format("%Y-%m-%d"));

        format!(
            "{base}?p={collection}\
             &pg[0][v]=f\
             &pg[0][gsk]=-start_date\
             &q={collection}\
             &sp[0]={lon}%2C{lat}\
             &qt={start}%2C{end}\
             &tl={timeline}\
             &lat={lat}\
             &long={lon}\
             &zoom={zoom}",
            base = SEARCH_BASE_URL,
            collection = self.collection,
            lon = self.lon,
            lat = self.lat,
            start = start,
            end = end,
            timeline = TIMELINE_FRAGMENT,
            zoom = self.zoom,
        )
    }
}
