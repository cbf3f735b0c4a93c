//! Common geographic types shared across the farmland-mapping tools.

pub mod bbox;
pub mod error;
pub mod layer;
pub mod time;

pub use bbox::BoundingBox;
pub use error::{GeoError, GeoResult};
pub use layer::{Cadence, ImageryLayer, DEFAULT_LAYER, FALLBACK_LAYER, LAYERS};
pub use time::candidate_dates;
