//! Raster module
//!
//! The concrete RGBA raster the pipeline works on and the rectangular region
//! primitives every normalizer and the classifier are built from.

pub mod ops;
pub mod types;

pub use ops::{clear_region, copy_region, has_transparency, is_uniform};
pub use types::{OPAQUE_BLACK, OPAQUE_WHITE, Raster, TRANSPARENT, TextureKind};
