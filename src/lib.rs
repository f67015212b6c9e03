//! Minecraft player texture normalization.
//!
//! Converts skins, capes and ear overlays between legacy and modern pixel
//! layouts, produces the canonical canvas consumed by model renderers and
//! infers the arm model of a skin from its pixel content.

pub mod logger;
pub mod texture_pipeline;
