//! Parallel recolor pass using Rayon.
//!
//! Pixels are independent, so the buffer is split into row-sized chunks and
//! each chunk is transformed with the same per-pixel code as the sequential
//! pass. Output is bit-identical to [`crate::recolor_sequential`].
//!
//! # Example
//!
//! ```rust
//! use devlogo_core::RgbaImage;
//! use devlogo_ops::{parallel, recolor_sequential};
//!
//! let src = RgbaImage::from_fn(64, 64, |x, y| [x as u8 * 4, y as u8 * 4, 255, 255]);
//! let mut par = src.clone();
//! parallel::recolor_in_place_par(&mut par);
//! assert_eq!(par, recolor_sequential(&src));
//! ```

use devlogo_core::{CHANNELS, RgbaImage};
use rayon::prelude::*;

use crate::RecolorStats;
use crate::recolor::recolor_slice;

/// Pixels per work item. Small images still get a few chunks.
const CHUNK_PIXELS: usize = 4096;

/// Transforms an interleaved RGBA8 buffer in place across the rayon pool.
pub(crate) fn recolor_slice_par(data: &mut [u8]) -> usize {
    data.par_chunks_mut(CHUNK_PIXELS * CHANNELS)
        .map(recolor_slice)
        .sum()
}

/// Transforms `image` in place on the rayon pool.
pub fn recolor_in_place_par(image: &mut RgbaImage) -> RecolorStats {
    let recolored = recolor_slice_par(image.as_raw_mut());
    RecolorStats {
        total: image.pixel_count(),
        recolored,
    }
}
