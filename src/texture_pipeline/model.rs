//! Arm model inference module
//!
//! Decides whether a canonical skin is drawn for the default or the slim
//! arm model.

mod classifier;
pub mod types;

#[cfg(test)]
mod tests;

pub use classifier::classify_model;
pub use types::{ModelSelection, ModelType};
