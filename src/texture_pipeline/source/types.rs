//! Image source descriptors

use std::fmt;
use std::path::PathBuf;

/// Where a texture image comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    /// Local file.
    Path(PathBuf),
    /// `http://` or `https://` URL.
    Url(String),
    /// Encoded image bytes already in memory.
    Bytes(Vec<u8>),
}

impl ImageSource {
    pub fn is_remote(&self) -> bool {
        matches!(self, ImageSource::Url(_))
    }
}

impl From<&str> for ImageSource {
    fn from(value: &str) -> Self {
        if value.starts_with("http://") || value.starts_with("https://") {
            ImageSource::Url(value.to_owned())
        } else {
            ImageSource::Path(PathBuf::from(value))
        }
    }
}

impl From<PathBuf> for ImageSource {
    fn from(value: PathBuf) -> Self {
        ImageSource::Path(value)
    }
}

impl From<Vec<u8>> for ImageSource {
    fn from(value: Vec<u8>) -> Self {
        ImageSource::Bytes(value)
    }
}

impl fmt::Display for ImageSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageSource::Path(path) => write!(f, "{}", path.display()),
            ImageSource::Url(url) => f.write_str(url),
            ImageSource::Bytes(bytes) => write!(f, "<{} bytes>", bytes.len()),
        }
    }
}
