//! Color management and transformations
//!
//! Provides the perceptual colorspace conversion used by the correction
//! pipeline: interleaved 8-bit sRGB <-> 8-bit CIE L*a*b* buffers.

mod lab;
mod srgb;


// Re-export primary types and pixel-level functions
pub use lab::{lab_to_rgb, rgb_to_lab, Lab};
pub use srgb::{linear_to_srgb, srgb_to_linear};

use crate::error::CorrectionError;
use crate::models::PixelBuffer;
use crate::parallel::parallel_zip_chunks;

/// Convert an interleaved 8-bit sRGB buffer to an 8-bit LAB buffer.
///
/// Lightness is scaled to use the full 8-bit range (`L8 = L * 255 / 100`)
/// and the chroma axes are offset by +128, so a neutral gray stores its
/// chroma as exactly 128. The round trip through [`lab_to_rgb_buffer`] stays
/// within a couple of counts per channel for low-chroma colors. Saturated
/// colors can lose noticeably more: chroma quantization can land the decode
/// just outside the gamut, and the clamp then flattens the near-zero
/// channel (worst case 26 counts over the 8-bit cube).
pub fn rgb_to_lab_buffer(rgb: &PixelBuffer) -> Result<PixelBuffer, CorrectionError> {
    require_three_channels(rgb)?;

    let mut out = vec![0u8; rgb.data.len()];
    parallel_zip_chunks(&rgb.data, &mut out, 3, |src, dst| {
        let r = srgb_to_linear(src[0] as f32 / 255.0);
        let g = srgb_to_linear(src[1] as f32 / 255.0);
        let b = srgb_to_linear(src[2] as f32 / 255.0);
        let lab = rgb_to_lab(r, g, b);
        dst[0] = (lab.l * 255.0 / 100.0).round().clamp(0.0, 255.0) as u8;
        dst[1] = (lab.a + 128.0).round().clamp(0.0, 255.0) as u8;
        dst[2] = (lab.b + 128.0).round().clamp(0.0, 255.0) as u8;
    });

    PixelBuffer::new(rgb.width, rgb.height, 3, out)
}

/// Convert an 8-bit LAB buffer back to an interleaved 8-bit sRGB buffer.
///
/// Out-of-gamut results are clamped to the displayable range before the sRGB
/// transfer encode.
pub fn lab_to_rgb_buffer(lab: &PixelBuffer) -> Result<PixelBuffer, CorrectionError> {
    require_three_channels(lab)?;

    let mut out = vec![0u8; lab.data.len()];
    parallel_zip_chunks(&lab.data, &mut out, 3, |src, dst| {
        let color = Lab {
            l: src[0] as f32 * 100.0 / 255.0,
            a: src[1] as f32 - 128.0,
            b: src[2] as f32 - 128.0,
        };
        let (r, g, b) = lab_to_rgb(color);
        dst[0] = (linear_to_srgb(r.clamp(0.0, 1.0)) * 255.0)
            .round()
            .clamp(0.0, 255.0) as u8;
        dst[1] = (linear_to_srgb(g.clamp(0.0, 1.0)) * 255.0)
            .round()
            .clamp(0.0, 255.0) as u8;
        dst[2] = (linear_to_srgb(b.clamp(0.0, 1.0)) * 255.0)
            .round()
            .clamp(0.0, 255.0) as u8;
    });

    PixelBuffer::new(lab.width, lab.height, 3, out)
}

fn require_three_channels(buffer: &PixelBuffer) -> Result<(), CorrectionError> {
    if buffer.channels != 3 {
        return Err(CorrectionError::InvalidBuffer(format!(
            "Colorspace conversion expects 3 channels, got {}",
            buffer.channels
        )));
    }
    Ok(())
}
