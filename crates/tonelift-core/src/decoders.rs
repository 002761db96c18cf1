//! Image decoding for the supported input formats
//!
//! Decoding goes through the `image` crate, so every format it understands
//! (PNG, JPEG, TIFF, BMP, WebP, ...) is accepted. Inputs with an alpha
//! channel or a non-8-bit depth are converted to 8-bit RGB.

use std::path::Path;

use crate::models::PixelBuffer;
use crate::verbose_println;

/// Decode an image from a file path into an 8-bit RGB buffer.
pub fn decode_image<P: AsRef<Path>>(path: P) -> Result<PixelBuffer, String> {
    let path = path.as_ref();

    let decoded = image::open(path)
        .map_err(|e| format!("Failed to decode {}: {}", path.display(), e))?;
    let rgb = decoded.to_rgb8();

    let (width, height) = rgb.dimensions();
    verbose_println!(
        "[tonelift] Decoded {} ({}x{})",
        path.display(),
        width,
        height
    );

    PixelBuffer::new(width, height, 3, rgb.into_raw()).map_err(|e| e.to_string())
}
