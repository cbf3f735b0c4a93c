//! Error types for the KML import pipeline.

use thiserror::Error;

/// Result type alias using ImportError.
pub type ImportResult<T> = Result<T, ImportError>;

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("Failed to parse KML: {0}")]
    Parse(#[from] kml::Error),

    #[error("Unsupported geometry: {0}")]
    UnsupportedGeometry(String),

    #[error("No layers with readable features found")]
    NoLayers,

    #[error("Invalid table name: {0}")]
    InvalidTableName(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
