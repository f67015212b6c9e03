//! Raster data types

use std::fmt;

use image::{Rgba, RgbaImage};

/// Dense row-major RGBA raster, 8 bits per channel.
pub type Raster = RgbaImage;

pub const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);
pub const OPAQUE_BLACK: Rgba<u8> = Rgba([0, 0, 0, 0xff]);
pub const OPAQUE_WHITE: Rgba<u8> = Rgba([0xff, 0xff, 0xff, 0xff]);

/// Kind of player texture, selects dimension rules and region tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextureKind {
    Skin,
    Cape,
    Ears,
}

impl fmt::Display for TextureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TextureKind::Skin => "skin",
            TextureKind::Cape => "cape",
            TextureKind::Ears => "ears",
        })
    }
}
