//! Pipeline conversions module
//!
//! Orchestrates acquisition, normalization, model inference and encoding.

mod types;
mod texture_to_canvas;


pub use types::{
    ProcessedTexture, SkinTexture, TextureConfig, TextureConfigBuilder, TextureTarget,
};
pub use texture_to_canvas::TexturePipeline;
