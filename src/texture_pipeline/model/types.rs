//! Model tag types

use std::fmt;
use std::str::FromStr;

use crate::texture_pipeline::common::TextureError;

/// Arm width variant of the player model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ModelType {
    /// 4 px wide arms.
    #[default]
    Default,
    /// 3 px wide arms.
    Slim,
}

impl ModelType {
    pub fn as_str(self) -> &'static str {
        match self {
            ModelType::Default => "default",
            ModelType::Slim => "slim",
        }
    }
}

impl fmt::Display for ModelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModelType {
    type Err = TextureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" => Ok(ModelType::Default),
            "slim" => Ok(ModelType::Slim),
            other => Err(TextureError::InvalidInput(format!("unknown model type: {other}"))),
        }
    }
}

/// How a loaded skin gets its model tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModelSelection {
    /// Infer it from the skin's pixels.
    #[default]
    AutoDetect,
    Fixed(ModelType),
}

impl fmt::Display for ModelSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelSelection::AutoDetect => f.write_str("auto-detect"),
            ModelSelection::Fixed(model) => f.write_str(model.as_str()),
        }
    }
}

impl FromStr for ModelSelection {
    type Err = TextureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto-detect" | "auto" => Ok(ModelSelection::AutoDetect),
            other => other.parse().map(ModelSelection::Fixed),
        }
    }
}
