use tracing::{info, instrument, warn};
use std::io::Write;
use std::path::Path;

use crate::texture_pipeline::{
    common::error::{Result, TextureError},
    conversions::types::{ProcessedTexture, SkinTexture, TextureConfig, TextureTarget},
    model::{ModelSelection, classify_model},
    normalize::{normalize_cape, normalize_ears, normalize_ears_from_skin, normalize_skin},
    png::{PngRasterWriter, RasterWriter},
    raster::Raster,
    source::{ImageLoader, ImageSource, StandardImageLoader},
};

pub struct TexturePipeline<L: ImageLoader, W: RasterWriter> {
    loader: L,
    writer: W,
    config: TextureConfig,
}

impl TexturePipeline<StandardImageLoader, PngRasterWriter> {
    pub fn new(config: TextureConfig) -> Result<Self> {
        Ok(Self {
            loader: StandardImageLoader::new()?,
            writer: PngRasterWriter::default(),
            config,
        })
    }
}

impl<L: ImageLoader, W: RasterWriter> TexturePipeline<L, W> {
    pub fn with_custom(loader: L, writer: W, config: TextureConfig) -> Self {
        Self {
            loader,
            writer,
            config,
        }
    }

    fn validate_dimensions(&self, width: u32, height: u32) -> Result<()> {
        if !self.config.validate_dimensions {
            return Ok(());
        }

        if width == 0 || height == 0 {
            return Err(TextureError::InvalidDimensions(width, height));
        }

        if let Some(max) = self.config.max_dimension {
            if width > max || height > max {
                warn!(
                    "Image dimensions {}x{} exceed maximum {}",
                    width, height, max
                );
                return Err(TextureError::InvalidDimensions(width, height));
            }
        }

        Ok(())
    }

    fn acquire(&self, source: &ImageSource) -> Result<Raster> {
        let raster = {
            let _span = tracing::info_span!("load_image", remote = source.is_remote()).entered();
            self.loader.load(source)?
        };

        {
            let _span = tracing::info_span!("validate_dimensions",
                width = raster.width(),
                height = raster.height()
            ).entered();
            self.validate_dimensions(raster.width(), raster.height())?;
        }

        Ok(raster)
    }

    fn normalize_with(
        &self,
        source: &ImageSource,
        normalize: fn(&mut Raster, &Raster) -> Result<()>,
    ) -> Result<Raster> {
        let image = self.acquire(source)?;
        let mut canvas = Raster::new(0, 0);
        {
            let _span = tracing::info_span!("normalize").entered();
            normalize(&mut canvas, &image)?;
        }
        Ok(canvas)
    }

    /// Loads a skin into the canonical square layout and tags it with the
    /// configured model, inferring it when set to auto-detect.
    #[instrument(skip(self, source), fields(source = %source))]
    pub fn load_skin(&self, source: &ImageSource) -> Result<SkinTexture> {
        let canvas = self.normalize_with(source, normalize_skin)?;

        let model = match self.config.model {
            ModelSelection::Fixed(model) => model,
            ModelSelection::AutoDetect => {
                let _span = tracing::info_span!("classify_model").entered();
                classify_model(&canvas)?
            }
        };

        info!(width = canvas.width(), model = %model, "Skin loaded");
        Ok(SkinTexture { canvas, model })
    }

    #[instrument(skip(self, source), fields(source = %source))]
    pub fn load_cape(&self, source: &ImageSource) -> Result<Raster> {
        self.normalize_with(source, normalize_cape)
    }

    #[instrument(skip(self, source), fields(source = %source))]
    pub fn load_ears(&self, source: &ImageSource) -> Result<Raster> {
        self.normalize_with(source, normalize_ears)
    }

    #[instrument(skip(self, source), fields(source = %source))]
    pub fn load_ears_from_skin(&self, source: &ImageSource) -> Result<Raster> {
        self.normalize_with(source, normalize_ears_from_skin)
    }

    /// Normalizes `source` as `target` and writes the canvas to `output`.
    pub fn process(
        &self,
        target: TextureTarget,
        source: &ImageSource,
        output: &mut dyn Write,
    ) -> Result<ProcessedTexture> {
        info!(texture = %target, "Starting texture normalization");

        let (canvas, model) = match target {
            TextureTarget::Skin => {
                let skin = self.load_skin(source)?;
                (skin.canvas, Some(skin.model))
            }
            TextureTarget::Cape => (self.load_cape(source)?, None),
            TextureTarget::Ears => (self.load_ears(source)?, None),
            TextureTarget::EarsFromSkin => (self.load_ears_from_skin(source)?, None),
        };

        {
            let _span = tracing::info_span!("encode_png").entered();
            self.writer.write_raster(&canvas, output)?;
        }

        info!(
            width = canvas.width(),
            height = canvas.height(),
            "Normalization complete"
        );
        Ok(ProcessedTexture {
            target,
            width: canvas.width(),
            height: canvas.height(),
            model,
        })
    }

    /// Like [`process`](Self::process), writing to a file. The file is only
    /// created once the texture has been normalized and encoded.
    #[instrument(skip_all, fields(texture = %target))]
    pub fn convert_file<P: AsRef<Path>>(
        &self,
        target: TextureTarget,
        source: &ImageSource,
        output_path: P,
    ) -> Result<ProcessedTexture> {
        let output_path = output_path.as_ref();

        info!(
            input = %source,
            output = %output_path.display(),
            "Converting texture"
        );

        let mut encoded = Vec::<u8>::new();
        let processed = self.process(target, source, &mut encoded)?;

        {
            let _span = tracing::info_span!("write_output_file").entered();
            std::fs::write(output_path, &encoded).map_err(|e| {
                TextureError::OutputWriteError(format!("{}: {}", output_path.display(), e))
            })?;
        }

        Ok(processed)
    }

    pub fn config(&self) -> &TextureConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: TextureConfig) {
        self.config = config;
    }
}
