//! Shared test utilities for the farmland-mapping workspace.
//!
//! Provides synthetic raster generators (for blankness/mosaic tests) and
//! KML document fixtures (for import tests).
//!
//! Add to your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! test-utils = { path = "../test-utils" }
//! ```

pub mod fixtures;
pub mod generators;

pub use fixtures::*;
pub use generators::*;
