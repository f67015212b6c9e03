//! Image loader backed by the `image` crate and a blocking HTTP client.

use std::path::Path;

use reqwest::blocking::Client;
use tracing::debug;

use crate::texture_pipeline::common::error::{Result, TextureError};
use crate::texture_pipeline::raster::Raster;
use crate::texture_pipeline::source::loader::ImageLoader;
use crate::texture_pipeline::source::types::ImageSource;

const USER_AGENT: &str = concat!("skin_canvas_rs/", env!("CARGO_PKG_VERSION"));

/// Loads files and URLs and decodes them to RGBA8.
///
/// Remote fetches are plain blocking GETs: no retry, no cache. Run the loader
/// on a worker thread when the caller must not block.
pub struct StandardImageLoader {
    client: Client,
}

impl StandardImageLoader {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| TextureError::FetchError(e.to_string()))?;
        Ok(Self::with_client(client))
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    fn read_file(&self, path: &Path) -> Result<Vec<u8>> {
        std::fs::read(path)
            .map_err(|e| TextureError::InputReadError(format!("{}: {}", path.display(), e)))
    }

    fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        debug!("Fetching {}", url);
        let response = self
            .client
            .get(url)
            .send()
            .and_then(|response| response.error_for_status())
            .map_err(|e| TextureError::FetchError(format!("{url}: {e}")))?;

        let bytes = response
            .bytes()
            .map_err(|e| TextureError::FetchError(format!("{url}: {e}")))?;
        Ok(bytes.to_vec())
    }
}

/// Decodes any format the `image` crate is built with into RGBA8.
pub fn decode_raster(data: &[u8]) -> Result<Raster> {
    debug!("Decoding image, {} bytes", data.len());
    let decoded = image::load_from_memory(data)
        .map_err(|e| TextureError::DecodeError(e.to_string()))?;
    let raster = decoded.to_rgba8();
    debug!("Decoded image: {}x{}", raster.width(), raster.height());
    Ok(raster)
}

impl ImageLoader for StandardImageLoader {
    fn load(&self, source: &ImageSource) -> Result<Raster> {
        match source {
            ImageSource::Path(path) => decode_raster(&self.read_file(path)?),
            ImageSource::Url(url) => decode_raster(&self.fetch(url)?),
            ImageSource::Bytes(bytes) => decode_raster(bytes),
        }
    }
}
