use image::imageops;
use tracing::{debug, warn};

use crate::texture_pipeline::common::{Result, Scale, TextureError};
use crate::texture_pipeline::normalize::layout::{CAPE_REFERENCE_HEIGHT, CAPE_REFERENCE_WIDTH};
use crate::texture_pipeline::raster::{Raster, TextureKind};

/// Scale of a cape image relative to the 64x32 canvas.
///
/// Besides the 2:1 layout, capes drawn on 22x17 and 46x22 grids are accepted
/// and keep their own reference width.
pub fn cape_scale(width: u32, height: u32) -> Result<Scale> {
    let (w, h) = (u64::from(width), u64::from(height));
    if width == 0 || height == 0 {
        return Err(TextureError::bad_size(TextureKind::Cape, width, height));
    }

    if w == 2 * h {
        Ok(Scale::new(width, 64))
    } else if w * 17 == h * 22 {
        Ok(Scale::new(width, 22))
    } else if w * 11 == h * 23 {
        Ok(Scale::new(width, 46))
    } else {
        warn!("Rejecting cape of size {}x{}", width, height);
        Err(TextureError::bad_size(TextureKind::Cape, width, height))
    }
}

/// Copies `source` unchanged onto a cape canvas of `64x32 * scale`.
pub fn normalize_cape(destination: &mut Raster, source: &Raster) -> Result<()> {
    let scale = cape_scale(source.width(), source.height())?;
    let width = scale.apply(CAPE_REFERENCE_WIDTH);
    let height = scale.apply(CAPE_REFERENCE_HEIGHT);
    debug!(
        "Normalizing cape {}x{} onto {}x{} canvas (scale {})",
        source.width(), source.height(), width, height, scale.as_f64()
    );

    let mut canvas = Raster::new(width, height);
    imageops::replace(&mut canvas, source, 0, 0);

    *destination = canvas;
    Ok(())
}
