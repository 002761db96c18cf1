//! Parallelization helpers for image processing operations
//!
//! Generic helpers that abstract the common pattern of conditionally
//! executing parallel or sequential code based on data size.

use rayon::prelude::*;

/// Minimum number of samples to trigger parallel processing
pub(crate) const PARALLEL_THRESHOLD: usize = 30_000;

/// Fill `out` chunk-by-chunk from the corresponding chunks of `src`.
///
/// Dispatches to rayon when the data is large enough, otherwise runs
/// sequentially. `src` and `out` must have the same length.
pub(crate) fn parallel_zip_chunks<T, F>(src: &[T], out: &mut [T], chunk_size: usize, f: F)
where
    T: Send + Sync,
    F: Fn(&[T], &mut [T]) + Sync,
{
    if src.len() >= PARALLEL_THRESHOLD {
        out.par_chunks_exact_mut(chunk_size)
            .zip(src.par_chunks_exact(chunk_size))
            .for_each(|(dst, s)| f(s, dst));
    } else {
        for (dst, s) in out
            .chunks_exact_mut(chunk_size)
            .zip(src.chunks_exact(chunk_size))
        {
            f(s, dst);
        }
    }
}

/// Apply `f` to every row of an output plane, in parallel for large planes.
///
/// The closure receives the row index and the mutable row slice.
pub(crate) fn parallel_rows<T, F>(out: &mut [T], width: usize, f: F)
where
    T: Send + Sync,
    F: Fn(usize, &mut [T]) + Sync,
{
    if out.len() >= PARALLEL_THRESHOLD {
        out.par_chunks_mut(width)
            .enumerate()
            .for_each(|(y, row)| f(y, row));
    } else {
        for (y, row) in out.chunks_mut(width).enumerate() {
            f(y, row);
        }
    }
}
