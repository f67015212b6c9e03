#[cfg(test)]
mod tests {
    use image::Rgba;

    use crate::texture_pipeline::common::{Region, Scale, TextureError};
    use crate::texture_pipeline::model::{ModelSelection, ModelType, classify_model};
    use crate::texture_pipeline::normalize::layout::SLIM_DEAD_SPACE;
    use crate::texture_pipeline::normalize::normalize_skin;
    use crate::texture_pipeline::raster::{OPAQUE_BLACK, OPAQUE_WHITE, Raster, TRANSPARENT};

    /// Opaque skin whose pixels are never pure black or white.
    fn opaque_skin(side: u32) -> Raster {
        Raster::from_fn(side, side, |x, y| Rgba([(x % 200) as u8 + 20, (y % 200) as u8 + 20, 0x80, 0xff]))
    }

    fn fill(raster: &mut Raster, region: Region, color: Rgba<u8>) {
        for y in region.y..region.bottom() {
            for x in region.x..region.right() {
                raster.put_pixel(x, y, color);
            }
        }
    }

    fn fill_dead_space(raster: &mut Raster, colors: [Rgba<u8>; 4]) {
        let scale = Scale::new(raster.width(), 64);
        for (named, color) in SLIM_DEAD_SPACE.iter().zip(colors) {
            fill(raster, named.region.scaled(scale), color);
        }
    }

    #[test]
    fn test_opaque_colored_arms_are_default() {
        assert_eq!(classify_model(&opaque_skin(64)).unwrap(), ModelType::Default);
        assert_eq!(classify_model(&opaque_skin(128)).unwrap(), ModelType::Default);
    }

    #[test]
    fn test_partially_transparent_dead_space_is_slim() {
        let mut skin = opaque_skin(64);
        for named in &SLIM_DEAD_SPACE {
            let region = named.region;
            skin.put_pixel(region.x, region.y, Rgba([10, 20, 30, 0x7f]));
        }
        assert_eq!(classify_model(&skin).unwrap(), ModelType::Slim);
    }

    #[test]
    fn test_single_transparent_pixel_is_enough() {
        let mut skin = opaque_skin(64);
        skin.put_pixel(47, 63, TRANSPARENT);
        assert_eq!(classify_model(&skin).unwrap(), ModelType::Slim);
    }

    #[test]
    fn test_transparent_pixel_outside_dead_space_is_ignored() {
        let mut skin = opaque_skin(64);
        skin.put_pixel(52, 16, TRANSPARENT);
        skin.put_pixel(0, 0, TRANSPARENT);
        assert_eq!(classify_model(&skin).unwrap(), ModelType::Default);
    }

    #[test]
    fn test_fully_transparent_dead_space_is_slim() {
        let mut skin = opaque_skin(64);
        fill_dead_space(&mut skin, [TRANSPARENT; 4]);
        assert_eq!(classify_model(&skin).unwrap(), ModelType::Slim);
    }

    #[test]
    fn test_black_dead_space() {
        let mut skin = opaque_skin(64);
        fill_dead_space(&mut skin, [OPAQUE_BLACK; 4]);
        assert_eq!(classify_model(&skin).unwrap(), ModelType::Slim);

        let mut skin = opaque_skin(128);
        fill_dead_space(&mut skin, [OPAQUE_BLACK; 4]);
        assert_eq!(classify_model(&skin).unwrap(), ModelType::Slim);

        let mut skin = opaque_skin(64);
        fill_dead_space(&mut skin, [OPAQUE_BLACK, OPAQUE_BLACK, OPAQUE_BLACK, Rgba([1, 0, 0, 0xff])]);
        assert_eq!(classify_model(&skin).unwrap(), ModelType::Default);
    }

    #[test]
    fn test_white_dead_space() {
        let mut skin = opaque_skin(64);
        fill_dead_space(&mut skin, [OPAQUE_WHITE; 4]);
        assert_eq!(classify_model(&skin).unwrap(), ModelType::Slim);
    }

    #[test]
    fn test_mixed_black_and_white_is_default() {
        let mut skin = opaque_skin(64);
        fill_dead_space(&mut skin, [OPAQUE_BLACK, OPAQUE_WHITE, OPAQUE_BLACK, OPAQUE_WHITE]);
        assert_eq!(classify_model(&skin).unwrap(), ModelType::Default);
    }

    #[test]
    fn test_normalized_legacy_skin_is_default() {
        let legacy = Raster::from_fn(64, 32, |x, y| Rgba([x as u8 + 40, y as u8 + 40, 0x80, 0xff]));
        let mut canvas = Raster::new(1, 1);
        normalize_skin(&mut canvas, &legacy).unwrap();
        assert_eq!(classify_model(&canvas).unwrap(), ModelType::Default);
    }

    #[test]
    fn test_non_square_input_is_rejected() {
        for (width, height) in [(64, 32), (0, 0)] {
            let err = classify_model(&Raster::new(width, height)).unwrap_err();
            assert!(matches!(err, TextureError::InvalidInput(_)));
        }
    }

    #[test]
    fn test_tiny_skin_is_rejected() {
        let red = Rgba([0xff, 0, 0, 0xff]);
        for side in [1, 2] {
            let err = classify_model(&Raster::from_pixel(side, side, red)).unwrap_err();
            assert!(matches!(err, TextureError::InvalidInput(_)));
        }
        for side in [4, 8] {
            assert_eq!(classify_model(&Raster::from_pixel(side, side, red)).unwrap(), ModelType::Default);
        }
    }

    #[test]
    fn test_model_strings() {
        assert_eq!("slim".parse::<ModelType>().unwrap(), ModelType::Slim);
        assert_eq!(ModelType::Default.to_string(), "default");
        assert!("alex".parse::<ModelType>().is_err());

        assert_eq!("auto-detect".parse::<ModelSelection>().unwrap(), ModelSelection::AutoDetect);
        assert_eq!(
            "default".parse::<ModelSelection>().unwrap(),
            ModelSelection::Fixed(ModelType::Default)
        );
        assert_eq!(ModelSelection::Fixed(ModelType::Slim).to_string(), "slim");
        assert_eq!(ModelSelection::default().to_string(), "auto-detect");
    }
}
