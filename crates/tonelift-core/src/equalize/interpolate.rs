//! Bilinear blending of tile mappings across the plane

use super::histogram::TileGrid;
use super::NUM_BINS;
use crate::parallel::parallel_rows;

/// Neighboring tile pair and interpolation weight along one axis.
#[derive(Debug, Clone, Copy)]
struct AxisWeight {
    lo: usize,
    hi: usize,
    t: f32,
}

/// For every coordinate on an axis, find the two neighboring tile centers
/// and the normalized position between them. Coordinates outside the
/// outermost centers collapse onto the nearest tile, which is equivalent to
/// renormalizing the missing neighbors' weights.
fn axis_weights(size: u32, centers: &[f32]) -> Vec<AxisWeight> {
    (0..size)
        .map(|i| {
            let p = i as f32 + 0.5;
            let hi = centers.partition_point(|&c| c <= p);
            if hi == 0 {
                AxisWeight { lo: 0, hi: 0, t: 0.0 }
            } else if hi == centers.len() {
                let last = centers.len() - 1;
                AxisWeight {
                    lo: last,
                    hi: last,
                    t: 0.0,
                }
            } else {
                let lo = hi - 1;
                AxisWeight {
                    lo,
                    hi,
                    t: (p - centers[lo]) / (centers[hi] - centers[lo]),
                }
            }
        })
        .collect()
}

/// Map every pixel through the four nearest tile tables with bilinear
/// weights, parallel by output row. Only the immutable tables are shared.
pub(super) fn apply_tile_luts(
    lightness: &[u8],
    grid: &TileGrid,
    luts: &[[u8; NUM_BINS]],
) -> Vec<u8> {
    let width = grid.width as usize;
    let centers_x: Vec<f32> = (0..grid.tiles_x).map(|c| grid.center_x(c)).collect();
    let centers_y: Vec<f32> = (0..grid.tiles_y).map(|r| grid.center_y(r)).collect();
    let weights_x = axis_weights(grid.width, &centers_x);
    let weights_y = axis_weights(grid.height, &centers_y);
    let tiles_x = grid.tiles_x as usize;

    let mut out = vec![0u8; lightness.len()];
    parallel_rows(&mut out, width, |y, row| {
        let ay = weights_y[y];
        let top = ay.lo * tiles_x;
        let bottom = ay.hi * tiles_x;
        let src = &lightness[y * width..(y + 1) * width];

        for (x, (dst, &value)) in row.iter_mut().zip(src).enumerate() {
            let ax = weights_x[x];
            let v = value as usize;
            let tl = luts[top + ax.lo][v] as f32;
            let tr = luts[top + ax.hi][v] as f32;
            let bl = luts[bottom + ax.lo][v] as f32;
            let br = luts[bottom + ax.hi][v] as f32;

            let upper = tl + (tr - tl) * ax.t;
            let lower = bl + (br - bl) * ax.t;
            *dst = (upper + (lower - upper) * ay.t)
                .round()
                .clamp(0.0, 255.0) as u8;
        }
    });

    out
}
