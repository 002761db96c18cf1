//! Automatic contrast and color correction pipeline
//!
//! This module is organized into submodules:
//! - `gamma`: power-law remapping of the lightness plane
//! - `merge`: splitting and merging of interleaved channel planes
//! - `blend`: weighted mix of the corrected image with the original

mod blend;
mod gamma;
mod merge;


// Re-export public items from submodules
pub use blend::blend_buffers;
pub use gamma::apply_gamma;
pub use merge::{merge_channels, split_channels};

use crate::color::{lab_to_rgb_buffer, rgb_to_lab_buffer};
use crate::config::CorrectionConfig;
use crate::equalize::equalize_lightness;
use crate::error::CorrectionError;
use crate::models::PixelBuffer;
use crate::verbose_println;

/// Run the full correction on an RGB buffer.
///
/// The image is converted to a lightness/chroma representation, the
/// lightness plane is locally equalized and gamma-remapped while the chroma
/// planes pass through unchanged, the result is converted back to RGB and
/// blended with the original. The input buffer is never mutated; any invalid
/// parameter or buffer fails before pixel data is touched.
pub fn correct_image(
    original: &PixelBuffer,
    config: &CorrectionConfig,
) -> Result<PixelBuffer, CorrectionError> {
    config.validate()?;

    verbose_println!(
        "[tonelift] Correcting {}x{} (clip {}, {}x{} tiles, gamma {}, alpha {})",
        original.width,
        original.height,
        config.clip_limit,
        config.tiles_x,
        config.tiles_y,
        config.gamma,
        config.blend_alpha
    );

    let lab = rgb_to_lab_buffer(original)?;
    let (lightness, chroma_a, chroma_b) = split_channels(&lab)?;

    let equalized = equalize_lightness(&lightness, lab.width, lab.height, config)?;
    let remapped = apply_gamma(&equalized, config.gamma)?;

    let merged = merge_channels(&remapped, &chroma_a, &chroma_b, lab.width, lab.height)?;
    let corrected = lab_to_rgb_buffer(&merged)?;

    blend_buffers(&corrected, original, config.blend_alpha)
}
