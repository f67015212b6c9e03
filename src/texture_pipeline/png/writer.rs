use std::io::Write;
use crate::texture_pipeline::common::error::Result;
use crate::texture_pipeline::raster::Raster;

pub trait RasterWriter {
    fn write_raster(&self, raster: &Raster, output: &mut dyn Write) -> Result<()>;
}
