//! Synthetic raster generators for blankness and compositing tests.

use image::{DynamicImage, Rgb, RgbImage};

/// Create an image where every pixel has the same value.
///
/// A uniform image has zero standard deviation, so it must always be
/// rejected by the blankness heuristic regardless of brightness.
pub fn uniform_image(width: u32, height: u32, value: u8) -> DynamicImage {
    let img = RgbImage::from_pixel(width, height, Rgb([value, value, value]));
    DynamicImage::ImageRgb8(img)
}

/// Create an image with a horizontal brightness gradient from 0 to 255.
///
/// Gradient images have both high mean and high variance, resembling
/// usable satellite imagery to the blankness heuristic.
pub fn gradient_image(width: u32, height: u32) -> DynamicImage {
    let img = RgbImage::from_fn(width, height, |x, _y| {
        let v = ((x as f64 / width.max(1) as f64) * 255.0) as u8;
        Rgb([v, v, v])
    });
    DynamicImage::ImageRgb8(img)
}

/// Create a black/white checkerboard with the given cell size.
pub fn checkerboard_image(width: u32, height: u32, cell: u32) -> DynamicImage {
    let img = RgbImage::from_fn(width, height, |x, y| {
        if ((x / cell.max(1)) + (y / cell.max(1))) % 2 == 0 {
            Rgb([255, 255, 255])
        } else {
            Rgb([0, 0, 0])
        }
    });
    DynamicImage::ImageRgb8(img)
}

/// Encode an image as JPEG bytes (quality 95), as a WMS response would be.
pub fn jpeg_bytes(img: &DynamicImage) -> Vec<u8> {
    let mut out = Vec::new();
    let mut encoder = image::codecs::jpeg::JpegEncoder::new_with_quality(&mut out, 95);
    encoder
        .encode_image(&img.to_rgb8())
        .expect("JPEG encoding of test image failed");
    out
}
