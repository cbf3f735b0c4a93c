//! Fixed-margin cropping of portal screenshots.

use image::DynamicImage;

use crate::error::{CaptureError, CaptureResult};

/// Pixel margins removed from a screenshot to isolate the map pane.
///
/// Hard-coded for the Earthdata interface at a 1920x1080 window: red top
/// header (~120px), left search sidebar (~480px incl. results), bottom
/// timeline (~100px).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropMargins {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl Default for CropMargins {
    fn default() -> Self {
        Self {
            left: 480,
            top: 120,
            right: 0,
            bottom: 100,
        }
    }
}

/// Remove the interface margins from a screenshot.
///
/// Errors when the margins meet or exceed the image dimensions instead of
/// producing an empty raster.
pub fn crop_to_map(img: &DynamicImage, margins: &CropMargins) -> CaptureResult<DynamicImage> {
    let (width, height) = (img.width(), img.height());

    if margins.left + margins.right >= width || margins.top + margins.bottom >= height {
        return Err(CaptureError::CropLargerThanImage { width, height });
    }

    Ok(img.crop_imm(
        margins.left,
        margins.top,
        width - margins.left - margins.right,
        height - margins.top - margins.bottom,
    ))
}
