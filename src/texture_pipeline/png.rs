//! PNG output module
//!
//! Encodes canonical canvases for consumers that load textures from disk.

mod writer;
mod png_raster_writer;

pub use writer::RasterWriter;
pub use png_raster_writer::PngRasterWriter;
