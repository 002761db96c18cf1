//! Weighted blending of the corrected image with the original

use crate::error::CorrectionError;
use crate::models::PixelBuffer;
use crate::parallel::parallel_zip_chunks;

/// Mix the corrected buffer with the original, channel by channel.
///
/// `alpha` is the weight of the corrected image; 1.0 keeps the correction
/// untouched, 0.0 returns the original. Both buffers must agree in
/// dimensions and channel count.
pub fn blend_buffers(
    corrected: &PixelBuffer,
    original: &PixelBuffer,
    alpha: f32,
) -> Result<PixelBuffer, CorrectionError> {
    if !(0.0..=1.0).contains(&alpha) {
        return Err(CorrectionError::InvalidParameter(format!(
            "Blend alpha must be within [0, 1], got {}",
            alpha
        )));
    }
    if corrected.width != original.width
        || corrected.height != original.height
        || corrected.channels != original.channels
    {
        return Err(CorrectionError::DimensionMismatch(format!(
            "Cannot blend {}x{}x{} with {}x{}x{}",
            corrected.width,
            corrected.height,
            corrected.channels,
            original.width,
            original.height,
            original.channels
        )));
    }

    let inverse = 1.0 - alpha;
    let mut data = original.data.clone();
    parallel_zip_chunks(
        &corrected.data,
        &mut data,
        original.channels as usize,
        |src, dst| {
            for (d, &c) in dst.iter_mut().zip(src) {
                let mixed = alpha * c as f32 + inverse * *d as f32;
                *d = mixed.round().clamp(0.0, 255.0) as u8;
            }
        },
    );

    PixelBuffer::new(original.width, original.height, original.channels, data)
}
