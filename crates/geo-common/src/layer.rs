//! Static catalog of GIBS imagery layers.

/// Temporal cadence of an imagery layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cadence {
    Monthly,
    Annual,
    Daily,
}

/// Descriptor for one GIBS WMS layer.
#[derive(Debug, Clone, Copy)]
pub struct ImageryLayer {
    /// Short key used at call sites and in output filenames.
    pub key: &'static str,

    /// Service-side layer name passed in the WMS request.
    pub name: &'static str,

    /// Native resolution in meters per pixel.
    pub resolution_m: f64,

    /// Temporal cadence of the composite.
    pub cadence: Cadence,

    /// Human description.
    pub description: &'static str,
}

/// Default layer for close-up downloads. Landsat has the best native
/// resolution available from GIBS (30m).
pub const DEFAULT_LAYER: &str = "landsat_weld";

/// Coarser daily layer used when no Landsat date yields usable imagery.
pub const FALLBACK_LAYER: &str = "viirs_noaa20";

/// All known layers, defined once at process start.
pub const LAYERS: &[ImageryLayer] = &[
    ImageryLayer {
        key: "landsat_weld",
        name: "Landsat_WELD_CorrectedReflectance_TrueColor_Global_Monthly",
        resolution_m: 30.0,
        cadence: Cadence::Monthly,
        description: "Landsat WELD monthly composite - Best for consistent coverage",
    },
    ImageryLayer {
        key: "landsat_weld_annual",
        name: "Landsat_WELD_CorrectedReflectance_TrueColor_Global_Annual",
        resolution_m: 30.0,
        cadence: Cadence::Annual,
        description: "Landsat WELD annual composite - Most stable, less recent",
    },
    ImageryLayer {
        key: "hls_landsat",
        name: "HLS_False_Color_Landsat",
        resolution_m: 30.0,
        cadence: Cadence::Daily,
        description: "Harmonized Landsat - More recent data",
    },
    ImageryLayer {
        key: "hls_sentinel",
        name: "HLS_False_Color_Sentinel",
        resolution_m: 30.0,
        cadence: Cadence::Daily,
        description: "Harmonized Sentinel - More frequent updates",
    },
    ImageryLayer {
        key: "hls_s30",
        name: "HLS_S30_Nadir_BRDF_Adjusted_Reflectance",
        resolution_m: 30.0,
        cadence: Cadence::Daily,
        description: "HLS S30 - Adjusted for viewing angle",
    },
    ImageryLayer {
        key: "hls_l30",
        name: "HLS_L30_Nadir_BRDF_Adjusted_Reflectance",
        resolution_m: 30.0,
        cadence: Cadence::Daily,
        description: "HLS L30 - Landsat adjusted reflectance",
    },
    ImageryLayer {
        key: "viirs_noaa20",
        name: "VIIRS_NOAA20_CorrectedReflectance_TrueColor",
        resolution_m: 375.0,
        cadence: Cadence::Daily,
        description: "VIIRS - Daily updates, lower resolution fallback",
    },
    ImageryLayer {
        key: "modis_terra",
        name: "MODIS_Terra_CorrectedReflectance_TrueColor",
        resolution_m: 250.0,
        cadence: Cadence::Daily,
        description: "MODIS - Daily updates, moderate resolution",
    },
];

impl ImageryLayer {
    /// Look up a layer by its short key.
    pub fn get(key: &str) -> Option<&'static ImageryLayer> {
        LAYERS.iter().find(|l| l.key == key)
    }

    /// True for the high-resolution Landsat/HLS family.
    pub fn is_high_resolution(&self) -> bool {
        self.key.starts_with("landsat") || self.key.starts_with("hls")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_known_layer() {
        let layer = ImageryLayer::get("landsat_weld").unwrap();
        assert_eq!(layer.resolution_m, 30.0);
        assert_eq!(layer.cadence, Cadence::Monthly);
    }

    #[test]
    fn test_lookup_unknown_layer() {
        assert!(ImageryLayer::get("sentinel2").is_none());
    }

    #[test]
    fn test_default_and_fallback_exist() {
        assert!(ImageryLayer::get(DEFAULT_LAYER).is_some());
        let fallback = ImageryLayer::get(FALLBACK_LAYER).unwrap();
        assert_eq!(fallback.cadence, Cadence::Daily);
    }

    #[test]
    fn test_high_resolution_family() {
        assert!(ImageryLayer::get("hls_s30").unwrap().is_high_resolution());
        assert!(!ImageryLayer::get("modis_terra").unwrap().is_high_resolution());
    }
}
