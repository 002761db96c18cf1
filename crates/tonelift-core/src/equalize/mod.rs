//! Tile-based adaptive histogram equalization (CLAHE) for the lightness plane
//!
//! This module is organized into submodules:
//! - `histogram`: tile partitioning, per-tile histograms, clip-limited
//!   redistribution
//! - `lut`: cumulative-distribution lookup tables
//! - `interpolate`: bilinear blending of tile mappings across the plane

mod histogram;
mod interpolate;
mod lut;

#[cfg(test)]
mod tests;

// Re-export public items from submodules
pub use histogram::{
    clip_histogram, clip_value, compute_tile_histogram, redistribute_excess, TileGrid,
};
pub use lut::build_lut;

use rayon::prelude::*;

use crate::config::CorrectionConfig;
use crate::error::CorrectionError;
use crate::parallel::PARALLEL_THRESHOLD;

/// Number of histogram bins for 8-bit lightness
pub const NUM_BINS: usize = 256;

/// Locally equalize a lightness plane.
///
/// Partitions the plane into the configured tile grid, builds a clip-limited
/// mapping per tile, and blends the four nearest tile mappings bilinearly at
/// every pixel so tile boundaries stay invisible. The output is a fresh
/// plane; the input is never mutated.
///
/// The clip limit bounds how steep any local mapping can become, which keeps
/// noise amplification bounded in flat regions. No tile influences pixels
/// more than one tile-width away.
pub fn equalize_lightness(
    lightness: &[u8],
    width: u32,
    height: u32,
    config: &CorrectionConfig,
) -> Result<Vec<u8>, CorrectionError> {
    if config.tiles_x == 0 || config.tiles_y == 0 {
        return Err(CorrectionError::InvalidConfig(format!(
            "Tile grid must be non-zero, got {}x{}",
            config.tiles_x, config.tiles_y
        )));
    }
    if !(config.clip_limit > 0.0) {
        return Err(CorrectionError::InvalidConfig(format!(
            "Clip limit must be positive, got {}",
            config.clip_limit
        )));
    }
    if lightness.len() != width as usize * height as usize {
        return Err(CorrectionError::InvalidBuffer(format!(
            "Lightness plane length {} does not match {}x{}",
            lightness.len(),
            width,
            height
        )));
    }

    let grid = TileGrid::new(width, height, config.tiles_x, config.tiles_y)?;
    let luts = build_tile_luts(lightness, &grid, config.clip_limit);
    Ok(interpolate::apply_tile_luts(lightness, &grid, &luts))
}

/// Build the per-tile lookup tables, in parallel for large planes.
///
/// Each tile owns its histogram and table, so tiles are processed with no
/// shared mutable state.
fn build_tile_luts(lightness: &[u8], grid: &TileGrid, clip_limit: f32) -> Vec<[u8; NUM_BINS]> {
    let build = |index: usize| {
        let (col, row) = grid.tile_at(index);
        let (_, _, w, h) = grid.tile_bounds(col, row);
        let tile_pixels = w * h;

        let mut hist = compute_tile_histogram(lightness, grid, col, row);
        let clip = clip_value(clip_limit, tile_pixels);
        let excess = clip_histogram(&mut hist, clip);
        redistribute_excess(&mut hist, excess);

        build_lut(&hist, tile_pixels)
    };

    if lightness.len() >= PARALLEL_THRESHOLD {
        (0..grid.tile_count()).into_par_iter().map(build).collect()
    } else {
        (0..grid.tile_count()).map(build).collect()
    }
}
