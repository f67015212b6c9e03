//! Texture processing pipeline module
//!
//! This module turns decoded player textures into the canonical canvas
//! layout, with separate modules for region geometry, raster primitives,
//! layout normalization, model inference, image acquisition and PNG output.

pub mod common;
pub mod raster;
pub mod normalize;
pub mod model;
pub mod source;
pub mod png;
pub mod conversions;

pub use common::{
    Region,
    Result,
    Scale,
    TextureError,
};

pub use raster::{
    Raster,
    TextureKind,
};

pub use normalize::{
    normalize_cape,
    normalize_ears,
    normalize_ears_from_skin,
    normalize_skin,
};

pub use model::{
    ModelSelection,
    ModelType,
    classify_model,
};

pub use source::{
    ImageLoader,
    ImageSource,
    StandardImageLoader,
};

pub use png::{
    PngRasterWriter,
    RasterWriter,
};

pub use conversions::{
    ProcessedTexture,
    SkinTexture,
    TextureConfig,
    TextureConfigBuilder,
    TexturePipeline,
    TextureTarget,
};
