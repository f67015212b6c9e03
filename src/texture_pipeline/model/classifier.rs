use tracing::debug;

use crate::texture_pipeline::common::{Result, TextureError};
use crate::texture_pipeline::model::types::ModelType;
use crate::texture_pipeline::normalize::layout::{SLIM_DEAD_SPACE, skin_scale};
use crate::texture_pipeline::raster::{
    OPAQUE_BLACK, OPAQUE_WHITE, Raster, has_transparency, is_uniform,
};

/// Infers the arm model of a canonical (square) skin.
///
/// The slim arm leaves four small arm areas unused. A skin is slim when any
/// of them contains a transparent pixel, or when all of them are solid black,
/// or all solid white. Everything else is default.
pub fn classify_model(skin: &Raster) -> Result<ModelType> {
    let (width, height) = skin.dimensions();
    if width == 0 || width != height {
        return Err(TextureError::InvalidInput(format!(
            "model inference needs a square skin, got {width}x{height}"
        )));
    }

    let scale = skin_scale(width);
    let regions = SLIM_DEAD_SPACE.map(|named| named.region.scaled(scale));
    if regions.iter().all(|region| region.is_empty()) {
        return Err(TextureError::InvalidInput(format!(
            "skin {width}x{height} is too small to hold the arm areas"
        )));
    }

    let model = if regions.iter().any(|&region| has_transparency(skin, region)) {
        debug!("Transparent pixels in arm dead space");
        ModelType::Slim
    } else if regions.iter().all(|&region| is_uniform(skin, region, OPAQUE_BLACK)) {
        debug!("Arm dead space is filled black");
        ModelType::Slim
    } else if regions.iter().all(|&region| is_uniform(skin, region, OPAQUE_WHITE)) {
        debug!("Arm dead space is filled white");
        ModelType::Slim
    } else {
        ModelType::Default
    };

    debug!("Classified {}x{} skin as {}", width, height, model);
    Ok(model)
}
