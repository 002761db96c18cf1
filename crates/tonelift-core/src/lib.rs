//! Tonelift Core Library
//!
//! Automatic contrast/color correction for still images: perceptual
//! color-space conversion, tile-based adaptive histogram equalization with a
//! clip limit, gamma remapping, and alpha blending with the original.

pub mod color;
pub mod config;
pub mod decoders;
pub mod equalize;
pub mod error;
pub mod exporters;
pub mod models;
pub mod pipeline;

pub(crate) mod parallel;

// Re-export commonly used types
pub use config::CorrectionConfig;
pub use error::CorrectionError;
pub use models::PixelBuffer;
pub use pipeline::correct_image;
