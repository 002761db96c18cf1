//! Tests for tiled histogram equalization

use super::*;
use crate::config::CorrectionConfig;
use crate::error::CorrectionError;

/// Deterministic pseudo-random lightness plane for histogram tests.
fn test_plane(width: u32, height: u32) -> Vec<u8> {
    (0..width as usize * height as usize)
        .map(|i| ((i * 131 + 17) % 256) as u8)
        .collect()
}

#[test]
fn test_tile_grid_covers_plane_exactly() {
    let grid = TileGrid::new(100, 70, 8, 8).unwrap();

    let mut area = 0u32;
    for index in 0..grid.tile_count() {
        let (col, row) = grid.tile_at(index);
        let (x0, y0, w, h) = grid.tile_bounds(col, row);
        assert_eq!(x0, col * grid.tile_width);
        assert_eq!(y0, row * grid.tile_height);
        assert!(x0 + w <= 100);
        assert!(y0 + h <= 70);
        area += w * h;
    }

    assert_eq!(area, 100 * 70, "tiles must partition the plane");
}

#[test]
fn test_tile_grid_edge_tiles_absorb_remainder() {
    let grid = TileGrid::new(100, 70, 8, 8).unwrap();

    // 100 / 8 = 12 with remainder 4; 70 / 8 = 8 with remainder 6
    let (_, _, w, _) = grid.tile_bounds(7, 0);
    assert_eq!(w, 16);
    let (_, _, _, h) = grid.tile_bounds(0, 7);
    assert_eq!(h, 14);
}

#[test]
fn test_tile_grid_clamps_oversized_grid() {
    let grid = TileGrid::new(4, 4, 8, 8).unwrap();
    assert_eq!(grid.tiles_x, 4);
    assert_eq!(grid.tiles_y, 4);
    assert_eq!(grid.tile_width, 1);
}

#[test]
fn test_tile_grid_rejects_zero_dimension() {
    let err = TileGrid::new(100, 70, 0, 8).unwrap_err();
    assert!(matches!(err, CorrectionError::InvalidConfig(_)));
}

#[test]
fn test_histogram_mass_equals_tile_pixel_count() {
    let plane = test_plane(100, 70);
    let grid = TileGrid::new(100, 70, 8, 8).unwrap();

    for index in 0..grid.tile_count() {
        let (col, row) = grid.tile_at(index);
        let (_, _, w, h) = grid.tile_bounds(col, row);
        let hist = compute_tile_histogram(&plane, &grid, col, row);
        let sum: u32 = hist.iter().sum();
        assert_eq!(sum, w * h);
    }
}

#[test]
fn test_clip_value() {
    // Relative to the average bin count, rounded up, never below 1
    assert_eq!(clip_value(1.5, 256), 2);
    assert_eq!(clip_value(1.5, 4), 1);
    assert_eq!(clip_value(2.0, 2560), 20);
}

#[test]
fn test_clip_caps_every_bin() {
    let plane = test_plane(64, 64);
    let grid = TileGrid::new(64, 64, 4, 4).unwrap();
    let mut hist = compute_tile_histogram(&plane, &grid, 1, 2);

    let clip = clip_value(1.5, 256);
    let before: u32 = hist.iter().sum();
    let excess = clip_histogram(&mut hist, clip);

    assert!(hist.iter().all(|&c| c <= clip));
    let after: u32 = hist.iter().sum();
    assert_eq!(after + excess, before, "excess accounts for removed mass");
}

#[test]
fn test_redistribution_conserves_mass() {
    let mut hist = [0u32; NUM_BINS];
    hist[40] = 900;
    hist[200] = 124;
    let before: u32 = hist.iter().sum();

    let excess = clip_histogram(&mut hist, 6);
    redistribute_excess(&mut hist, excess);

    let after: u32 = hist.iter().sum();
    assert_eq!(after, before, "clip-redistribution must conserve mass");
}

#[test]
fn test_redistribution_remainder_is_deterministic() {
    let mut hist = [1u32; NUM_BINS];
    redistribute_excess(&mut hist, 259);

    // 259 = 1 per bin plus remainder 3 to the lowest-index bins
    assert_eq!(hist[0], 3);
    assert_eq!(hist[1], 3);
    assert_eq!(hist[2], 3);
    assert_eq!(hist[3], 2);
    assert_eq!(hist[255], 2);
}

#[test]
fn test_lut_is_monotone() {
    let cases: Vec<[u32; NUM_BINS]> = vec![
        {
            let mut h = [0u32; NUM_BINS];
            h[0] = 1000;
            h
        },
        {
            let mut h = [0u32; NUM_BINS];
            h[255] = 4;
            h
        },
        {
            let mut h = [3u32; NUM_BINS];
            h[17] = 500;
            h[240] = 211;
            h
        },
    ];

    for hist in cases {
        let total: u32 = hist.iter().sum();
        let lut = build_lut(&hist, total);
        for pair in lut.windows(2) {
            assert!(pair[0] <= pair[1], "lookup table must be non-decreasing");
        }
    }
}

#[test]
fn test_flat_plane_stays_uniform() {
    let plane = vec![137u8; 64 * 64];
    let config = CorrectionConfig::default();

    let out = equalize_lightness(&plane, 64, 64, &config).unwrap();

    let first = out[0];
    assert!(
        out.iter().all(|&v| v == first),
        "a flat input must produce a flat output"
    );
}

#[test]
fn test_flat_plane_near_identity_with_large_tiles() {
    // With 256 pixels per tile the redistributed histogram is nearly
    // uniform, so the mapping is close to the identity.
    let plane = vec![137u8; 128 * 128];
    let config = CorrectionConfig::default();

    let out = equalize_lightness(&plane, 128, 128, &config).unwrap();

    let first = out[0];
    assert!(out.iter().all(|&v| v == first));
    assert!(
        (first as i32 - 137).abs() <= 4,
        "flat input should map close to its own value, got {}",
        first
    );
}

#[test]
fn test_bright_outlier_cannot_dominate_dark_tile() {
    // One bright pixel in an otherwise dark plane. Without the clip limit
    // the dark mass would be stretched across the full range; with it the
    // dark pixels must stay dark and tightly grouped.
    let width = 128u32;
    let height = 128u32;
    let mut plane = vec![30u8; (width * height) as usize];
    plane[(4 * width + 4) as usize] = 250;

    let config = CorrectionConfig::default();
    let out = equalize_lightness(&plane, width, height, &config).unwrap();

    let mut dark_min = u8::MAX;
    let mut dark_max = u8::MIN;
    for (i, &v) in out.iter().enumerate() {
        if plane[i] == 30 {
            dark_min = dark_min.min(v);
            dark_max = dark_max.max(v);
        }
    }

    assert!(dark_max <= 64, "dark pixels must not be stretched bright");
    assert!(
        dark_max - dark_min <= 2,
        "dark pixels must stay tightly grouped, spread was {}",
        dark_max - dark_min
    );
    assert!(out[(4 * width + 4) as usize] > 200);
}

#[test]
fn test_equalize_rejects_bad_config() {
    let plane = vec![0u8; 16];

    let mut config = CorrectionConfig::default();
    config.clip_limit = 0.0;
    let err = equalize_lightness(&plane, 4, 4, &config).unwrap_err();
    assert!(matches!(err, CorrectionError::InvalidConfig(_)));

    let mut config = CorrectionConfig::default();
    config.tiles_x = 0;
    let err = equalize_lightness(&plane, 4, 4, &config).unwrap_err();
    assert!(matches!(err, CorrectionError::InvalidConfig(_)));
}

#[test]
fn test_equalize_rejects_plane_length_mismatch() {
    let plane = vec![0u8; 15];
    let config = CorrectionConfig::default();
    let err = equalize_lightness(&plane, 4, 4, &config).unwrap_err();
    assert!(matches!(err, CorrectionError::InvalidBuffer(_)));
}
