use crate::texture_pipeline::common::error::Result;
use crate::texture_pipeline::raster::Raster;
use crate::texture_pipeline::source::types::ImageSource;

pub trait ImageLoader {
    fn load(&self, source: &ImageSource) -> Result<Raster>;
}
