//! KML vector import pipeline.
//!
//! Normalizes a multi-layer KML file into one flat PostGIS table:
//! enumerate layers, flatten 3D geometry to 2D, tag features with their
//! source-layer name, concatenate, and destructively replace the target
//! table.

pub mod error;
pub mod geometry;
pub mod import;
pub mod postgis;
pub mod read;

pub use error::{ImportError, ImportResult};
pub use import::{combine_layers, import_kml, Feature};
pub use postgis::PostgisWriter;
pub use read::{read_layers, read_layers_from_str, VectorLayer};
