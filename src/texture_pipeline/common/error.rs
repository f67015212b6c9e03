use thiserror::Error;

use crate::texture_pipeline::raster::TextureKind;

#[derive(Error, Debug)]
pub enum TextureError {
    #[error("Bad {kind} size: {width}x{height}")]
    BadTextureSize {
        kind: TextureKind,
        width: u32,
        height: u32,
    },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid image dimensions: width={0}, height={1}")]
    InvalidDimensions(u32, u32),

    #[error("Failed to read input file: {0}")]
    InputReadError(String),

    #[error("Failed to fetch remote image: {0}")]
    FetchError(String),

    #[error("Failed to decode image: {0}")]
    DecodeError(String),

    #[error("Failed to encode PNG image: {0}")]
    EncodeError(String),

    #[error("Failed to write output file: {0}")]
    OutputWriteError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl TextureError {
    pub(crate) fn bad_size(kind: TextureKind, width: u32, height: u32) -> Self {
        TextureError::BadTextureSize { kind, width, height }
    }
}

pub type Result<T> = std::result::Result<T, TextureError>;
