//! Geometry normalization module
//!
//! Validates texture dimensions and rewrites skins, capes and ears into the
//! canonical canvas layout. Every function replaces the destination raster
//! wholesale, and only after its input has been validated.

pub mod layout;
mod skin;
mod cape;
mod ears;


pub use skin::{SkinFormat, normalize_skin};
pub use cape::{cape_scale, normalize_cape};
pub use ears::{ears_scale, normalize_ears, normalize_ears_from_skin};
