//! Common utilities module
//!
//! This module contains the error type and the reference-resolution geometry
//! shared across the texture pipeline.

pub mod error;
pub mod region;

pub use error::{Result, TextureError};
pub use region::{Region, Scale};
