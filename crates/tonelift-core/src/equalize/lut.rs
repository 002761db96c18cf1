//! Per-tile lookup tables built from clipped histograms

use super::NUM_BINS;

/// Build a monotone intensity mapping from a tile histogram.
///
/// The cumulative distribution is normalized so the full tile mass maps to
/// 255. Because the histogram has been clip-redistributed, the mapping stays
/// close to the identity on flat tiles instead of collapsing their range.
pub fn build_lut(histogram: &[u32; NUM_BINS], tile_pixels: u32) -> [u8; NUM_BINS] {
    let mut lut = [0u8; NUM_BINS];
    if tile_pixels == 0 {
        return lut;
    }

    let scale = 255.0 / tile_pixels as f64;
    let mut cumulative = 0u64;
    for (entry, &count) in lut.iter_mut().zip(histogram.iter()) {
        cumulative += count as u64;
        *entry = (cumulative as f64 * scale).round().min(255.0) as u8;
    }

    lut
}
