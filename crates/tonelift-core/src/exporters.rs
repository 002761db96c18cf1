//! Image export for corrected buffers
//!
//! The output format is chosen from the file extension by the `image` crate.

use std::path::Path;

use crate::models::PixelBuffer;
use crate::verbose_println;

/// Write an 8-bit RGB buffer to a file.
pub fn export_image<P: AsRef<Path>>(buffer: &PixelBuffer, path: P) -> Result<(), String> {
    let path = path.as_ref();

    if buffer.channels != 3 {
        return Err(format!(
            "Export only supports 3-channel RGB, got {} channels",
            buffer.channels
        ));
    }

    image::save_buffer(
        path,
        &buffer.data,
        buffer.width,
        buffer.height,
        image::ExtendedColorType::Rgb8,
    )
    .map_err(|e| format!("Failed to write {}: {}", path.display(), e))?;

    verbose_println!(
        "[tonelift] Wrote {} ({}x{})",
        path.display(),
        buffer.width,
        buffer.height
    );

    Ok(())
}
