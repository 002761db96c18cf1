//! Core data types shared across pipeline stages.

use crate::error::CorrectionError;

/// Interleaved 8-bit pixel buffer.
///
/// Each pipeline stage consumes a buffer and allocates a fresh one for its
/// output; a buffer is never mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    /// Image width in pixels
    pub width: u32,

    /// Image height in pixels
    pub height: u32,

    /// Number of channels (3 for RGB and LAB)
    pub channels: u8,

    /// Interleaved channel samples, row-major
    pub data: Vec<u8>,
}

impl PixelBuffer {
    /// Create a buffer, validating dimensions against the data length.
    pub fn new(
        width: u32,
        height: u32,
        channels: u8,
        data: Vec<u8>,
    ) -> Result<Self, CorrectionError> {
        if width == 0 || height == 0 {
            return Err(CorrectionError::InvalidBuffer(format!(
                "Buffer dimensions must be non-zero, got {}x{}",
                width, height
            )));
        }
        if channels == 0 {
            return Err(CorrectionError::InvalidBuffer(
                "Buffer must have at least one channel".to_string(),
            ));
        }
        let expected = width as usize * height as usize * channels as usize;
        if data.len() != expected {
            return Err(CorrectionError::InvalidBuffer(format!(
                "Buffer data length {} does not match {}x{} with {} channels (expected {})",
                data.len(),
                width,
                height,
                channels,
                expected
            )));
        }
        Ok(Self {
            width,
            height,
            channels,
            data,
        })
    }

    /// Number of pixels in the buffer.
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}
