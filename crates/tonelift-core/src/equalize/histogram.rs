//! Tile partitioning and clip-limited histograms

use super::NUM_BINS;
use crate::error::CorrectionError;

/// Non-overlapping rectangular partition of a lightness plane.
///
/// Tiles cover the plane exactly; the rightmost column and bottom row absorb
/// the remainder pixels when the dimensions do not divide evenly. A requested
/// grid larger than the plane is clamped so every tile holds at least one
/// pixel.
#[derive(Debug, Clone)]
pub struct TileGrid {
    /// Plane width in pixels
    pub width: u32,
    /// Plane height in pixels
    pub height: u32,
    /// Number of tile columns
    pub tiles_x: u32,
    /// Number of tile rows
    pub tiles_y: u32,
    /// Width of a non-edge tile
    pub tile_width: u32,
    /// Height of a non-edge tile
    pub tile_height: u32,
}

impl TileGrid {
    pub fn new(
        width: u32,
        height: u32,
        tiles_x: u32,
        tiles_y: u32,
    ) -> Result<Self, CorrectionError> {
        if width == 0 || height == 0 {
            return Err(CorrectionError::InvalidBuffer(format!(
                "Lightness plane must be non-empty, got {}x{}",
                width, height
            )));
        }
        if tiles_x == 0 || tiles_y == 0 {
            return Err(CorrectionError::InvalidConfig(format!(
                "Tile grid must be non-zero, got {}x{}",
                tiles_x, tiles_y
            )));
        }
        let tiles_x = tiles_x.min(width);
        let tiles_y = tiles_y.min(height);
        Ok(Self {
            width,
            height,
            tiles_x,
            tiles_y,
            tile_width: width / tiles_x,
            tile_height: height / tiles_y,
        })
    }

    /// Total number of tiles in the grid.
    pub fn tile_count(&self) -> usize {
        (self.tiles_x * self.tiles_y) as usize
    }

    /// (col, row) for a row-major linear tile index.
    pub fn tile_at(&self, index: usize) -> (u32, u32) {
        (
            index as u32 % self.tiles_x,
            index as u32 / self.tiles_x,
        )
    }

    /// Pixel bounds `(x0, y0, w, h)` of a tile.
    pub fn tile_bounds(&self, col: u32, row: u32) -> (u32, u32, u32, u32) {
        let x0 = col * self.tile_width;
        let y0 = row * self.tile_height;
        let w = if col == self.tiles_x - 1 {
            self.width - x0
        } else {
            self.tile_width
        };
        let h = if row == self.tiles_y - 1 {
            self.height - y0
        } else {
            self.tile_height
        };
        (x0, y0, w, h)
    }

    /// Horizontal center of a tile column, in pixel coordinates.
    pub fn center_x(&self, col: u32) -> f32 {
        let (x0, _, w, _) = self.tile_bounds(col, 0);
        x0 as f32 + w as f32 / 2.0
    }

    /// Vertical center of a tile row, in pixel coordinates.
    pub fn center_y(&self, row: u32) -> f32 {
        let (_, y0, _, h) = self.tile_bounds(0, row);
        y0 as f32 + h as f32 / 2.0
    }
}

/// Compute the 256-bin histogram of one tile's lightness values.
pub fn compute_tile_histogram(
    lightness: &[u8],
    grid: &TileGrid,
    col: u32,
    row: u32,
) -> [u32; NUM_BINS] {
    let (x0, y0, w, h) = grid.tile_bounds(col, row);
    let mut histogram = [0u32; NUM_BINS];

    for y in y0..y0 + h {
        let start = (y * grid.width + x0) as usize;
        for &value in &lightness[start..start + w as usize] {
            histogram[value as usize] += 1;
        }
    }

    histogram
}

/// Clip value for a tile. The configured clip limit is relative to the
/// average bin count of a uniform histogram over the tile.
pub fn clip_value(clip_limit: f32, tile_pixels: u32) -> u32 {
    let raw = clip_limit * tile_pixels as f32 / NUM_BINS as f32;
    (raw.ceil() as u32).max(1)
}

/// Cap every bin at `clip` and return the total excess removed.
pub fn clip_histogram(histogram: &mut [u32; NUM_BINS], clip: u32) -> u32 {
    let mut excess = 0u32;
    for count in histogram.iter_mut() {
        if *count > clip {
            excess += *count - clip;
            *count = clip;
        }
    }
    excess
}

/// Spread `excess` evenly over all bins.
///
/// The integer remainder goes to the lowest-index bins first, so the result
/// is deterministic and the histogram mass is conserved exactly.
pub fn redistribute_excess(histogram: &mut [u32; NUM_BINS], excess: u32) {
    let per_bin = excess / NUM_BINS as u32;
    let remainder = (excess % NUM_BINS as u32) as usize;

    if per_bin > 0 {
        for count in histogram.iter_mut() {
            *count += per_bin;
        }
    }
    for count in histogram.iter_mut().take(remainder) {
        *count += 1;
    }
}
