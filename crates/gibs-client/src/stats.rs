//! Pixel statistics used by the blankness heuristic.

use image::DynamicImage;

use crate::config::BlanknessThresholds;

/// Mean and population standard deviation over all 8-bit channel samples
/// of a decoded image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImageStats {
    pub mean: f64,
    pub std_dev: f64,
}

impl ImageStats {
    /// Compute statistics for an image.
    pub fn from_image(img: &DynamicImage) -> Self {
        let rgb = img.to_rgb8();
        let samples = rgb.as_raw();
        if samples.is_empty() {
            return Self {
                mean: 0.0,
                std_dev: 0.0,
            };
        }

        let n = samples.len() as f64;
        let mean = samples.iter().map(|&v| v as f64).sum::<f64>() / n;
        let variance = samples
            .iter()
            .map(|&v| {
                let d = v as f64 - mean;
                d * d
            })
            .sum::<f64>()
            / n;

        Self {
            mean,
            std_dev: variance.sqrt(),
        }
    }

    /// True when the image clears both thresholds, i.e. is neither
    /// all-black nor flat.
    pub fn is_usable(&self, thresholds: &BlanknessThresholds) -> bool {
        self.mean > thresholds.min_mean && self.std_dev > thresholds.min_std
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::{checkerboard_image, gradient_image, uniform_image};

    const PROBE: BlanknessThresholds = BlanknessThresholds {
        min_mean: 10.0,
        min_std: 5.0,
    };

    #[test]
    fn test_uniform_image_rejected() {
        // Bright but flat: std is zero, so it must be rejected.
        let stats = ImageStats::from_image(&uniform_image(64, 64, 200));
        assert!((stats.mean - 200.0).abs() < 1e-9);
        assert!(stats.std_dev < 1e-9);
        assert!(!stats.is_usable(&PROBE));
    }

    #[test]
    fn test_black_image_rejected() {
        let stats = ImageStats::from_image(&uniform_image(64, 64, 0));
        assert_eq!(stats.mean, 0.0);
        assert!(!stats.is_usable(&PROBE));
    }

    #[test]
    fn test_gradient_image_accepted() {
        let stats = ImageStats::from_image(&gradient_image(64, 64));
        assert!(stats.mean > 10.0);
        assert!(stats.std_dev > 5.0);
        assert!(stats.is_usable(&PROBE));
    }

    #[test]
    fn test_checkerboard_accepted() {
        let stats = ImageStats::from_image(&checkerboard_image(64, 64, 8));
        // Half black, half white: mean ~127.5, std ~127.5.
        assert!((stats.mean - 127.5).abs() < 1.0);
        assert!(stats.is_usable(&PROBE));
    }

    #[test]
    fn test_stats_survive_jpeg_round_trip() {
        // The probe path decodes JPEG bytes off the wire; lossy encoding
        // must not move a clearly-usable image under the thresholds.
        let bytes = test_utils::jpeg_bytes(&gradient_image(128, 128));
        let decoded = image::load_from_memory(&bytes).unwrap();
        assert!(ImageStats::from_image(&decoded).is_usable(&PROBE));
    }

    #[test]
    fn test_thresholds_are_strict() {
        let stats = ImageStats {
            mean: 10.0,
            std_dev: 5.0,
        };
        // Exactly at the thresholds does not pass.
        assert!(!stats.is_usable(&PROBE));
    }
}
