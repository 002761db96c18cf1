//! Default correction parameter values and their validation.

use crate::error::CorrectionError;
use serde::Deserialize;

/// Correction parameter values.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CorrectionConfig {
    /// Histogram clip limit, relative to the average bin count of a tile
    pub clip_limit: f32,
    /// Number of tile columns for local equalization
    pub tiles_x: u32,
    /// Number of tile rows for local equalization
    pub tiles_y: u32,
    /// Gamma applied to the equalized lightness plane
    pub gamma: f32,
    /// Blend weight of the corrected image against the original
    pub blend_alpha: f32,
}

impl Default for CorrectionConfig {
    fn default() -> Self {
        Self {
            clip_limit: 1.5,
            tiles_x: 8,
            tiles_y: 8,
            gamma: 1.2,
            blend_alpha: 0.7,
        }
    }
}

impl CorrectionConfig {
    /// Check every parameter before the pipeline touches pixel data.
    ///
    /// Comparisons are written so NaN values fail validation too.
    pub fn validate(&self) -> Result<(), CorrectionError> {
        if self.tiles_x == 0 || self.tiles_y == 0 {
            return Err(CorrectionError::InvalidConfig(format!(
                "Tile grid must be non-zero, got {}x{}",
                self.tiles_x, self.tiles_y
            )));
        }
        if !(self.clip_limit > 0.0) {
            return Err(CorrectionError::InvalidConfig(format!(
                "Clip limit must be positive, got {}",
                self.clip_limit
            )));
        }
        if !(self.gamma > 0.0) {
            return Err(CorrectionError::InvalidParameter(format!(
                "Gamma must be positive, got {}",
                self.gamma
            )));
        }
        if !(0.0..=1.0).contains(&self.blend_alpha) {
            return Err(CorrectionError::InvalidParameter(format!(
                "Blend alpha must be within [0, 1], got {}",
                self.blend_alpha
            )));
        }
        Ok(())
    }
}
