//! Pipeline configuration and result types

use std::fmt;
use std::str::FromStr;

use crate::texture_pipeline::common::TextureError;
use crate::texture_pipeline::model::{ModelSelection, ModelType};
use crate::texture_pipeline::raster::Raster;

/// Which normalizer a texture goes through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextureTarget {
    Skin,
    Cape,
    Ears,
    /// Ears cut out of a skin image.
    EarsFromSkin,
}

impl fmt::Display for TextureTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TextureTarget::Skin => "skin",
            TextureTarget::Cape => "cape",
            TextureTarget::Ears => "ears",
            TextureTarget::EarsFromSkin => "ears-from-skin",
        })
    }
}

impl FromStr for TextureTarget {
    type Err = TextureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "skin" => Ok(TextureTarget::Skin),
            "cape" => Ok(TextureTarget::Cape),
            "ears" => Ok(TextureTarget::Ears),
            "ears-from-skin" => Ok(TextureTarget::EarsFromSkin),
            other => Err(TextureError::InvalidInput(format!("unknown texture target: {other}"))),
        }
    }
}

/// A canonical skin canvas and the model it is rendered with.
#[derive(Debug, Clone)]
pub struct SkinTexture {
    pub canvas: Raster,
    pub model: ModelType,
}

/// Summary of a processed texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessedTexture {
    pub target: TextureTarget,
    pub width: u32,
    pub height: u32,
    /// Only set for skins.
    pub model: Option<ModelType>,
}

/// Configuration for texture loading
#[derive(Debug, Clone)]
pub struct TextureConfig {
    /// Model tag given to loaded skins
    pub model: ModelSelection,
    /// Whether to check decoded image dimensions before normalization
    pub validate_dimensions: bool,
    /// Largest accepted width or height of a decoded image
    pub max_dimension: Option<u32>,
}

impl Default for TextureConfig {
    fn default() -> Self {
        Self {
            model: ModelSelection::AutoDetect,
            validate_dimensions: true,
            max_dimension: Some(8192),
        }
    }
}

impl TextureConfig {
    pub fn builder() -> TextureConfigBuilder {
        TextureConfigBuilder::default()
    }
}

/// Builder for TextureConfig
#[derive(Default)]
pub struct TextureConfigBuilder {
    model: Option<ModelSelection>,
    validate_dimensions: Option<bool>,
    max_dimension: Option<Option<u32>>,
}

impl TextureConfigBuilder {
    pub fn model(mut self, model: ModelSelection) -> Self {
        self.model = Some(model);
        self
    }

    pub fn validate_dimensions(mut self, validate: bool) -> Self {
        self.validate_dimensions = Some(validate);
        self
    }

    pub fn max_dimension(mut self, max: Option<u32>) -> Self {
        self.max_dimension = Some(max);
        self
    }

    pub fn build(self) -> TextureConfig {
        let default = TextureConfig::default();
        TextureConfig {
            model: self.model.unwrap_or(default.model),
            validate_dimensions: self.validate_dimensions.unwrap_or(default.validate_dimensions),
            max_dimension: self.max_dimension.unwrap_or(default.max_dimension),
        }
    }
}
