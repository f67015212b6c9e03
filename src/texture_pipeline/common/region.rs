//! Reference-resolution rectangles and the scale that maps them onto a raster.

use image::math::Rect;

/// Ratio between a raster's actual resolution and the reference grid its
/// layout is described in (64 px wide for skins, for example).
///
/// Kept as a fraction so non-integer scales such as 44/64 stay exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scale {
    numerator: u32,
    denominator: u32,
}

impl Scale {
    /// `denominator` must be non-zero.
    pub const fn new(numerator: u32, denominator: u32) -> Self {
        Self { numerator, denominator }
    }

    /// Maps a reference-grid coordinate onto the raster grid, rounding down.
    pub fn apply(self, value: u32) -> u32 {
        (u64::from(value) * u64::from(self.numerator) / u64::from(self.denominator)) as u32
    }

    pub fn as_f64(self) -> f64 {
        f64::from(self.numerator) / f64::from(self.denominator)
    }
}

/// A rectangle on a reference grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Region {
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    /// Scales both edges rather than origin and size, so adjacent regions
    /// stay adjacent at fractional scales.
    pub fn scaled(self, scale: Scale) -> Region {
        let x = scale.apply(self.x);
        let y = scale.apply(self.y);
        Region {
            x,
            y,
            width: scale.apply(self.x + self.width) - x,
            height: scale.apply(self.y + self.height) - y,
        }
    }

    pub fn right(self) -> u32 {
        self.x + self.width
    }

    pub fn bottom(self) -> u32 {
        self.y + self.height
    }

    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn fits_within(self, width: u32, height: u32) -> bool {
        self.right() <= width && self.bottom() <= height
    }
}

impl From<Region> for Rect {
    fn from(region: Region) -> Self {
        Rect {
            x: region.x,
            y: region.y,
            width: region.width,
            height: region.height,
        }
    }
}
