//! Error types for imagery fetching.

use thiserror::Error;

/// Result type alias using FetchError.
pub type FetchResult<T> = Result<T, FetchError>;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected HTTP status: {0}")]
    UnexpectedStatus(reqwest::StatusCode),

    #[error("Response is not an image (content-type: {0})")]
    NotAnImage(String),

    #[error("Failed to decode image: {0}")]
    Decode(#[from] image::ImageError),

    #[error("Image is blank or uniform (mean {mean:.1}, std {std_dev:.1})")]
    BlankImage { mean: f64, std_dev: f64 },

    #[error("Failed to download any tiles")]
    NoTiles,

    #[error("All download strategies failed")]
    AllStrategiesFailed,

    #[error(transparent)]
    Geo(#[from] geo_common::GeoError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
