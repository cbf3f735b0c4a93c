//! Headless-browser capture of the NASA Earthdata map viewer.
//!
//! Builds a granule-search URL from coordinates and a date range, drives
//! a WebDriver session through the fixed load/dismiss/toggle sequence,
//! screenshots the page, and crops the interface chrome away.

pub mod browser;
pub mod crop;
pub mod error;
pub mod url;

pub use browser::{capture_page, capture_to_file, CaptureConfig};
pub use crop::{crop_to_map, CropMargins};
pub use error::{CaptureError, CaptureResult};
pub use url::{zoom_for_area, EarthdataSearch};
