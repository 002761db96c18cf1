//! Splitting and merging of interleaved channel planes

use crate::error::CorrectionError;
use crate::models::PixelBuffer;

/// Split an interleaved three-channel buffer into separate planes.
pub fn split_channels(buffer: &PixelBuffer) -> Result<(Vec<u8>, Vec<u8>, Vec<u8>), CorrectionError> {
    if buffer.channels != 3 {
        return Err(CorrectionError::InvalidBuffer(format!(
            "Expected a 3-channel buffer, got {} channels",
            buffer.channels
        )));
    }

    let pixels = buffer.pixel_count();
    let mut first = Vec::with_capacity(pixels);
    let mut second = Vec::with_capacity(pixels);
    let mut third = Vec::with_capacity(pixels);

    for chunk in buffer.data.chunks_exact(3) {
        first.push(chunk[0]);
        second.push(chunk[1]);
        third.push(chunk[2]);
    }

    Ok((first, second, third))
}

/// Interleave three planes back into a single buffer.
///
/// Every plane must hold exactly `width * height` values.
pub fn merge_channels(
    first: &[u8],
    second: &[u8],
    third: &[u8],
    width: u32,
    height: u32,
) -> Result<PixelBuffer, CorrectionError> {
    let pixels = width as usize * height as usize;
    if first.len() != pixels || second.len() != pixels || third.len() != pixels {
        return Err(CorrectionError::DimensionMismatch(format!(
            "Channel planes of lengths {}, {}, {} do not match {}x{}",
            first.len(),
            second.len(),
            third.len(),
            width,
            height
        )));
    }

    let mut data = Vec::with_capacity(pixels * 3);
    for i in 0..pixels {
        data.push(first[i]);
        data.push(second[i]);
        data.push(third[i]);
    }

    PixelBuffer::new(width, height, 3, data)
}
