//! Image acquisition module
//!
//! Resolves a source descriptor (file, URL or in-memory bytes) into a decoded
//! RGBA raster. Normalization never sees anything but the decoded raster.

mod loader;
mod standard_loader;
pub mod types;

pub use loader::ImageLoader;
pub use standard_loader::{StandardImageLoader, decode_raster};
pub use types::ImageSource;
