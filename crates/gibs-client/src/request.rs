//! WMS GetMap request parameters.

use chrono::NaiveDate;
use geo_common::BoundingBox;

/// Parameters for one WMS 1.1.1 GetMap request.
#[derive(Debug, Clone)]
pub struct GetMapRequest {
    /// Service-side layer name.
    pub layer: String,
    /// Geographic extent (EPSG:4326).
    pub bbox: BoundingBox,
    /// Requested raster width in pixels.
    pub width: u32,
    /// Requested raster height in pixels.
    pub height: u32,
    /// Acquisition date for the TIME dimension.
    pub time: NaiveDate,
}

impl GetMapRequest {
    /// Serialize to WMS query parameters.
    pub fn query_params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("service", "WMS".to_string()),
            ("request", "GetMap".to_string()),
            ("version", "1.1.1".to_string()),
            ("layers", self.layer.clone()),
            ("styles", String::new()),
            ("format", "image/jpeg".to_string()),
            ("srs", "EPSG:4326".to_string()),
            ("bbox", self.bbox.to_wms_param()),
            ("width", self.width.to_string()),
            ("height", self.height.to_string()),
            ("time", self.time.format("%Y-%m-%d").to_string()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> GetMapRequest {
        GetMapRequest {
            layer: "VIIRS_NOAA20_CorrectedReflectance_TrueColor".to_string(),
            bbox: BoundingBox::new(-99.06, 20.13, -99.05, 20.14),
            width: 256,
            height: 256,
            time: NaiveDate::from_ymd_opt(2025, 7, 5).unwrap(),
        }
    }

    #[test]
    fn test_query_params_complete() {
        let params = request().query_params();
        let get = |k: &str| {
            params
                .iter()
                .find(|(key, _)| *key == k)
                .map(|(_, v)| v.as_str())
                .unwrap()
        };

        assert_eq!(get("service"), "WMS");
        assert_eq!(get("request"), "GetMap");
        assert_eq!(get("version"), "1.1.1");
        assert_eq!(get("format"), "image/jpeg");
        assert_eq!(get("srs"), "EPSG:4326");
        assert_eq!(get("bbox"), "-99.06,20.13,-99.05,20.14");
        assert_eq!(get("width"), "256");
        assert_eq!(get("height"), "256");
        assert_eq!(get("time"), "2025-07-05");
    }

    #[test]
    fn test_styles_present_but_empty() {
        let params = request().query_params();
        let styles = params.iter().find(|(k, _)| *k == "styles").unwrap();
        assert_eq!(styles.1, "");
    }
}
