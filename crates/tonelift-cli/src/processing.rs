//! Input file handling and per-image processing.

use std::path::{Path, PathBuf};

use tonelift_core::decoders::decode_image;
use tonelift_core::exporters::export_image;
use tonelift_core::{correct_image, CorrectionConfig};

/// Determine output path based on input and the optional output argument
///
/// When `out` names a directory the input filename is reused with a
/// `_corrected` suffix; when it names a file it is used as-is; when absent
/// the corrected image lands next to the input.
pub fn determine_output_path(input: &Path, out: &Option<PathBuf>) -> Result<PathBuf, String> {
    let filename = input
        .file_stem()
        .ok_or("Invalid input filename")?
        .to_string_lossy();

    if let Some(out_path) = out {
        if out_path.is_dir() {
            Ok(out_path.join(format!("{}_corrected.png", filename)))
        } else {
            Ok(out_path.clone())
        }
    } else {
        let parent = input.parent().unwrap_or(Path::new("."));
        Ok(parent.join(format!("{}_corrected.png", filename)))
    }
}

/// Decode, correct, and export one image.
pub fn process_single_image(
    input: &Path,
    out: &Option<PathBuf>,
    config: &CorrectionConfig,
) -> Result<(), String> {
    let buffer = decode_image(input)?;
    println!(
        "Processing {} ({}x{})",
        input.display(),
        buffer.width,
        buffer.height
    );

    let corrected = correct_image(&buffer, config).map_err(|e| e.to_string())?;

    let output_path = determine_output_path(input, out)?;
    export_image(&corrected, &output_path)?;
    println!("Wrote {}", output_path.display());

    Ok(())
}
