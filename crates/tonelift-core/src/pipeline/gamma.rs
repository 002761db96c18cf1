//! Gamma remapping of the lightness plane

use rayon::prelude::*;

use crate::error::CorrectionError;
use crate::parallel::PARALLEL_THRESHOLD;

/// Apply a power-law brightness curve to an 8-bit plane.
///
/// Values are normalized to [0, 1], raised to `1 / gamma`, and scaled back
/// with rounding. Gamma above 1 brightens midtones, below 1 darkens them,
/// exactly 1 is the identity. Endpoints 0 and 255 are fixed for any gamma.
pub fn apply_gamma(plane: &[u8], gamma: f32) -> Result<Vec<u8>, CorrectionError> {
    if !(gamma > 0.0) {
        return Err(CorrectionError::InvalidParameter(format!(
            "Gamma must be positive, got {}",
            gamma
        )));
    }

    // The mapping only depends on the input value, so one 256-entry table
    // covers the whole plane.
    let exponent = 1.0 / gamma as f64;
    let mut table = [0u8; 256];
    for (value, entry) in table.iter_mut().enumerate() {
        let normalized = value as f64 / 255.0;
        *entry = (normalized.powf(exponent) * 255.0).round() as u8;
    }

    if plane.len() >= PARALLEL_THRESHOLD {
        Ok(plane.par_iter().map(|&v| table[v as usize]).collect())
    } else {
        Ok(plane.iter().map(|&v| table[v as usize]).collect())
    }
}
