//! Error types for screenshot capture.

use thiserror::Error;

/// Result type alias using CaptureError.
pub type CaptureResult<T> = Result<T, CaptureError>;

#[derive(Debug, Error)]
pub enum CaptureError {
    #[error("Area must be a positive number, got {0}")]
    InvalidArea(f64),

    #[error("Failed to start WebDriver session: {0}")]
    Session(#[from] fantoccini::error::NewSessionError),

    #[error("WebDriver command failed: {0}")]
    WebDriver(#[from] fantoccini::error::CmdError),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Crop margins exceed the {width}x{height} screenshot")]
    CropLargerThanImage { width: u32, height: u32 },
}
