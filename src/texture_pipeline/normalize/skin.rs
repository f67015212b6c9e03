use image::imageops;
use tracing::{debug, warn};

use crate::texture_pipeline::common::{Region, Result, Scale, TextureError};
use crate::texture_pipeline::normalize::layout::{
    HAT_REGIONS, LEGACY_LIMB_REMAP, LEGACY_OPACITY_PROBE, MODERN_OPACITY_PROBE,
    SECOND_LAYER_REGIONS, skin_scale,
};
use crate::texture_pipeline::raster::{Raster, TextureKind, clear_region, copy_region, has_transparency};

/// Pixel layout of a skin image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkinFormat {
    /// Pre-1.8 layout, twice as wide as it is high.
    Legacy,
    /// Square layout with the second clothing layer.
    Modern,
}

impl SkinFormat {
    pub fn detect(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(TextureError::bad_size(TextureKind::Skin, width, height));
        }

        if width == height {
            Ok(SkinFormat::Modern)
        } else if u64::from(width) == 2 * u64::from(height) {
            Ok(SkinFormat::Legacy)
        } else {
            warn!("Rejecting skin of size {}x{}", width, height);
            Err(TextureError::bad_size(TextureKind::Skin, width, height))
        }
    }

    fn opacity_probe(self) -> Region {
        match self {
            SkinFormat::Legacy => LEGACY_OPACITY_PROBE,
            SkinFormat::Modern => MODERN_OPACITY_PROBE,
        }
    }
}

/// Writes the canonical square layout of `source` into `destination`.
///
/// Legacy skins get their missing left limbs mirrored from the right ones.
/// Skins without any transparency have the regions that must be transparent
/// cleared. On error `destination` is left as it was.
pub fn normalize_skin(destination: &mut Raster, source: &Raster) -> Result<()> {
    let format = SkinFormat::detect(source.width(), source.height())?;
    let side = source.width();
    let scale = skin_scale(side);
    debug!("Normalizing {:?} skin {}x{}", format, source.width(), source.height());

    let mut canvas = Raster::new(side, side);
    imageops::replace(&mut canvas, source, 0, 0);

    if format == SkinFormat::Legacy {
        convert_legacy_limbs(&mut canvas, scale);
    }
    fix_opaque_skin(&mut canvas, scale, format);

    *destination = canvas;
    Ok(())
}

fn convert_legacy_limbs(canvas: &mut Raster, scale: Scale) {
    for entry in &LEGACY_LIMB_REMAP {
        let from = entry.from.scaled(scale);
        let to = entry.to().scaled(scale);
        copy_region(canvas, from, to.x, to.y, true);
    }
}

/// Clears hat (and, for modern skins, second layer) regions of skins drawn
/// by tools that filled unused space with an opaque background.
fn fix_opaque_skin(canvas: &mut Raster, scale: Scale, format: SkinFormat) {
    if has_transparency(canvas, format.opacity_probe().scaled(scale)) {
        return;
    }

    debug!("Skin has an opaque background, clearing overlay regions");
    for named in &HAT_REGIONS {
        clear_region(canvas, named.region.scaled(scale));
    }

    if format == SkinFormat::Modern {
        for named in &SECOND_LAYER_REGIONS {
            clear_region(canvas, named.region.scaled(scale));
        }
    }
}
