use image::{GenericImageView, imageops};
use tracing::{debug, warn};

use crate::texture_pipeline::common::{Result, Scale, TextureError};
use crate::texture_pipeline::normalize::layout::{
    EARS_IN_SKIN, EARS_REFERENCE_HEIGHT, EARS_REFERENCE_WIDTH, skin_scale,
};
use crate::texture_pipeline::normalize::skin::SkinFormat;
use crate::texture_pipeline::raster::{Raster, TextureKind};

pub fn ears_scale(width: u32, height: u32) -> Result<Scale> {
    if height > 0
        && u64::from(width) == 2 * u64::from(height)
        && height % EARS_REFERENCE_HEIGHT == 0
    {
        Ok(Scale::new(height, EARS_REFERENCE_HEIGHT))
    } else {
        warn!("Rejecting ears of size {}x{}", width, height);
        Err(TextureError::bad_size(TextureKind::Ears, width, height))
    }
}

/// Copies a dedicated 14x7-grid ears image onto the ears canvas.
pub fn normalize_ears(destination: &mut Raster, source: &Raster) -> Result<()> {
    let scale = ears_scale(source.width(), source.height())?;
    let width = scale.apply(EARS_REFERENCE_WIDTH);
    let height = scale.apply(EARS_REFERENCE_HEIGHT);
    debug!("Normalizing ears {}x{}", source.width(), source.height());

    let mut canvas = Raster::new(width, height);
    imageops::replace(&mut canvas, source, 0, 0);

    *destination = canvas;
    Ok(())
}

/// Extracts the ears block stored at (24, 0) of a skin image, legacy or
/// modern, onto the ears canvas.
pub fn normalize_ears_from_skin(destination: &mut Raster, source: &Raster) -> Result<()> {
    SkinFormat::detect(source.width(), source.height())?;
    let scale = skin_scale(source.width());
    let x = scale.apply(EARS_IN_SKIN.x);
    let y = scale.apply(EARS_IN_SKIN.y);
    let width = scale.apply(EARS_REFERENCE_WIDTH);
    let height = scale.apply(EARS_REFERENCE_HEIGHT);
    debug!(
        "Extracting {}x{} ears at ({}, {}) from skin {}x{}",
        width, height, x, y, source.width(), source.height()
    );

    let canvas = source.view(x, y, width, height).to_image();

    *destination = canvas;
    Ok(())
}
