//! Rectangular region primitives over a [`Raster`].
//!
//! Regions handed to these functions are already scaled to the raster's
//! resolution and must lie inside it.

use image::{GenericImage, Rgba, imageops};

use crate::texture_pipeline::common::Region;
use crate::texture_pipeline::raster::types::{Raster, TRANSPARENT};

fn region_pixels<'a>(raster: &'a Raster, region: Region) -> impl Iterator<Item = &'a Rgba<u8>> + 'a {
    debug_assert!(region.fits_within(raster.width(), raster.height()));
    (region.y..region.bottom())
        .flat_map(move |y| (region.x..region.right()).map(move |x| raster.get_pixel(x, y)))
}

/// Copies `from` so its top-left corner lands on `(to_x, to_y)`, optionally
/// mirroring the copied block left to right.
///
/// Source and destination may not overlap when mirroring.
pub fn copy_region(raster: &mut Raster, from: Region, to_x: u32, to_y: u32, flip_horizontal: bool) {
    if from.is_empty() {
        return;
    }

    let copied = raster.copy_within(from.into(), to_x, to_y);
    debug_assert!(copied, "region copy out of bounds: {from:?} -> ({to_x}, {to_y})");

    if flip_horizontal {
        imageops::flip_horizontal_in_place(&mut *raster.sub_image(to_x, to_y, from.width, from.height));
    }
}

/// Zeroes every channel inside `region`.
pub fn clear_region(raster: &mut Raster, region: Region) {
    debug_assert!(region.fits_within(raster.width(), raster.height()));
    for y in region.y..region.bottom() {
        for x in region.x..region.right() {
            raster.put_pixel(x, y, TRANSPARENT);
        }
    }
}

/// True if any pixel in `region` is not fully opaque.
pub fn has_transparency(raster: &Raster, region: Region) -> bool {
    region_pixels(raster, region).any(|pixel| pixel[3] != u8::MAX)
}

/// True if every pixel in `region` equals `color` exactly.
pub fn is_uniform(raster: &Raster, region: Region, color: Rgba<u8>) -> bool {
    region_pixels(raster, region).all(|pixel| *pixel == color)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::texture_pipeline::raster::types::{OPAQUE_BLACK, OPAQUE_WHITE};

    fn column_gradient(width: u32, height: u32) -> Raster {
        Raster::from_fn(width, height, |x, _| Rgba([x as u8, 0, 0, 0xff]))
    }

    #[test]
    fn test_copy_region_mirrors_columns() {
        let mut raster = column_gradient(8, 4);
        copy_region(&mut raster, Region::new(0, 0, 4, 2), 4, 2, true);

        for y in 2..4 {
            assert_eq!(raster.get_pixel(4, y)[0], 3);
            assert_eq!(raster.get_pixel(7, y)[0], 0);
        }
        // untouched rows keep the gradient
        assert_eq!(raster.get_pixel(4, 0)[0], 4);
    }

    #[test]
    fn test_copy_region_without_flip() {
        let mut raster = column_gradient(8, 4);
        copy_region(&mut raster, Region::new(0, 0, 4, 2), 4, 2, false);
        assert_eq!(raster.get_pixel(4, 3)[0], 0);
        assert_eq!(raster.get_pixel(7, 3)[0], 3);
    }

    #[test]
    fn test_clear_and_transparency() {
        let mut raster = Raster::from_pixel(4, 4, OPAQUE_WHITE);
        assert!(!has_transparency(&raster, Region::new(0, 0, 4, 4)));

        clear_region(&mut raster, Region::new(1, 1, 1, 1));
        assert_eq!(*raster.get_pixel(1, 1), TRANSPARENT);
        assert!(has_transparency(&raster, Region::new(0, 0, 2, 2)));
        assert!(!has_transparency(&raster, Region::new(2, 2, 2, 2)));
    }

    #[test]
    fn test_is_uniform() {
        let mut raster = Raster::from_pixel(4, 4, OPAQUE_BLACK);
        assert!(is_uniform(&raster, Region::new(0, 0, 4, 4), OPAQUE_BLACK));
        assert!(!is_uniform(&raster, Region::new(0, 0, 4, 4), OPAQUE_WHITE));

        raster.put_pixel(3, 3, Rgba([0, 0, 0, 0x80]));
        assert!(!is_uniform(&raster, Region::new(0, 0, 4, 4), OPAQUE_BLACK));
        assert!(is_uniform(&raster, Region::new(0, 0, 3, 3), OPAQUE_BLACK));
    }
}
