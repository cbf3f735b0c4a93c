//! Geographic bounding box types and operations.

use serde::{Deserialize, Serialize};

use crate::error::{GeoError, GeoResult};

/// Mean Earth radius in meters.
const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// A geographic bounding box in degrees (EPSG:4326).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_lon: f64,
    pub min_lat: f64,
    pub max_lon: f64,
    pub max_lat: f64,
}

impl BoundingBox {
    /// Create a new bounding box from corner coordinates.
    pub fn new(min_lon: f64, min_lat: f64, max_lon: f64, max_lat: f64) -> Self {
        Self {
            min_lon,
            min_lat,
            max_lon,
            max_lat,
        }
    }

    /// Compute a bounding box around a center point from physical extents.
    ///
    /// Uses an equirectangular approximation: meters-per-degree longitude
    /// shrinks with cos(latitude). Only valid near the computed center;
    /// accuracy degrades at high latitude or very large extents.
    pub fn from_center(lat: f64, lon: f64, width_m: f64, height_m: f64) -> GeoResult<Self> {
        if !lat.is_finite() || !lon.is_finite() {
            return Err(GeoError::InvalidCoordinate { lat, lon });
        }
        if !width_m.is_finite() || !height_m.is_finite() || width_m <= 0.0 || height_m <= 0.0 {
            return Err(GeoError::InvalidExtent { width_m, height_m });
        }

        let meters_per_deg_lat = (2.0 * std::f64::consts::PI * EARTH_RADIUS_M) / 360.0;
        let meters_per_deg_lon = meters_per_deg_lat * lat.to_radians().cos();

        let half_width_deg = (width_m / 2.0) / meters_per_deg_lon;
        let half_height_deg = (height_m / 2.0) / meters_per_deg_lat;

        Ok(Self {
            min_lon: lon - half_width_deg,
            min_lat: lat - half_height_deg,
            max_lon: lon + half_width_deg,
            max_lat: lat + half_height_deg,
        })
    }

    /// Width of the bounding box in degrees.
    pub fn width_deg(&self) -> f64 {
        self.max_lon - self.min_lon
    }

    /// Height of the bounding box in degrees.
    pub fn height_deg(&self) -> f64 {
        self.max_lat - self.min_lat
    }

    /// Center point as (lat, lon).
    pub fn center(&self) -> (f64, f64) {
        (
            (self.min_lat + self.max_lat) / 2.0,
            (self.min_lon + self.max_lon) / 2.0,
        )
    }

    /// Format as a WMS BBOX parameter: "minLon,minLat,maxLon,maxLat".
    pub fn to_wms_param(&self) -> String {
        format!(
            "{},{},{},{}",
            self.min_lon, self.min_lat, self.max_lon, self.max_lat
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_center_symmetric() {
        let bbox = BoundingBox::from_center(20.0, -99.0, 500.0, 500.0).unwrap();
        let (lat, lon) = bbox.center();
        assert!((lat - 20.0).abs() < 1e-9);
        assert!((lon - (-99.0)).abs() < 1e-9);
    }

    #[test]
    fn test_from_center_rejects_nan() {
        assert!(BoundingBox::from_center(f64::NAN, 0.0, 100.0, 100.0).is_err());
        assert!(BoundingBox::from_center(0.0, f64::INFINITY, 100.0, 100.0).is_err());
    }

    #[test]
    fn test_from_center_rejects_nonpositive_extent() {
        assert!(BoundingBox::from_center(0.0, 0.0, 0.0, 100.0).is_err());
        assert!(BoundingBox::from_center(0.0, 0.0, 100.0, -5.0).is_err());
    }

    #[test]
    fn test_wms_param_format() {
        let bbox = BoundingBox::new(-99.1, 20.0, -99.0, 20.1);
        assert_eq!(bbox.to_wms_param(), "-99.1,20,-99,20.1");
    }
}
