use std::io::Write;

use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{ExtendedColorType, ImageEncoder};
use tracing::debug;

use crate::texture_pipeline::common::error::{Result, TextureError};
use crate::texture_pipeline::png::writer::RasterWriter;
use crate::texture_pipeline::raster::Raster;

/// RGBA8 PNG encoder. The whole file is encoded before anything reaches
/// `output`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PngRasterWriter;

impl RasterWriter for PngRasterWriter {
    fn write_raster(&self, raster: &Raster, output: &mut dyn Write) -> Result<()> {
        let (width, height) = raster.dimensions();
        debug!("Encoding PNG image: {}x{}", width, height);

        let mut buffer: Vec<u8> = Vec::new();
        PngEncoder::new_with_quality(&mut buffer, CompressionType::Best, FilterType::Adaptive)
            .write_image(raster.as_raw(), width, height, ExtendedColorType::Rgba8)
            .map_err(|e| TextureError::EncodeError(e.to_string()))?;

        output.write_all(&buffer)?;

        debug!("PNG encoding complete, {} bytes", buffer.len());
        Ok(())
    }
}
