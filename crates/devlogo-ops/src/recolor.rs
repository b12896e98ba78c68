//! Hue-selective recolor.
//!
//! Each pixel is handled on its own:
//!
//! 1. RGB is converted to HSV.
//! 2. The pixel is *selected* when its hue lies in [`SOURCE_BAND`]
//!    (inclusive), saturation is above [`MIN_SATURATION`], value is above
//!    [`MIN_VALUE`] and alpha is non-zero.
//! 3. Selected pixels have their hue remapped linearly onto [`TARGET_BAND`]
//!    and their saturation multiplied by [`SATURATION_BOOST`], clamped to 1.
//! 4. HSV is converted back to RGB and quantized. Alpha is copied verbatim.
//!
//! The thresholds keep whites (low saturation), dark details (low value)
//! and transparent pixels out of the edit.

use devlogo_color::{Hsv, hsv_to_rgb, normalize, quantize, rgb_to_hsv};
use devlogo_core::{CHANNELS, RgbaImage};
use tracing::{debug, trace};

use crate::HueBand;

/// Hues eligible for recoloring: cyan through blue.
pub const SOURCE_BAND: HueBand = HueBand::new(120.0, 260.0);

/// Hues the source band is mapped onto: red, wrapping through 0°.
pub const TARGET_BAND: HueBand = HueBand::new(345.0, 15.0);

/// Saturation must be strictly above this to be selected.
pub const MIN_SATURATION: f64 = 0.08;

/// Value must be strictly above this to be selected.
pub const MIN_VALUE: f64 = 0.05;

/// Saturation multiplier for selected pixels.
pub const SATURATION_BOOST: f64 = 1.15;

/// Summary of a recolor pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RecolorStats {
    /// Pixels visited.
    pub total: usize,
    /// Pixels that passed the selection mask.
    pub recolored: usize,
}

impl RecolorStats {
    /// Fraction of pixels recolored, `0.0` for an empty image.
    pub fn ratio(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.recolored as f64 / self.total as f64
        }
    }
}

/// Selection mask for one pixel.
#[inline]
pub fn is_selected(hsv: Hsv, alpha: u8) -> bool {
    SOURCE_BAND.contains(hsv.h) && hsv.s > MIN_SATURATION && hsv.v > MIN_VALUE && alpha > 0
}

/// Applies the hue remap and saturation boost to a selected sample.
///
/// Value is left untouched.
#[inline]
pub fn recolor_hsv(hsv: Hsv) -> Hsv {
    Hsv {
        h: SOURCE_BAND.remap(hsv.h, TARGET_BAND),
        s: (hsv.s * SATURATION_BOOST).clamp(0.0, 1.0),
        v: hsv.v,
    }
}

/// Runs one pixel through the transform, returning the new pixel and
/// whether it was selected.
#[inline]
pub(crate) fn apply(px: [u8; CHANNELS]) -> ([u8; CHANNELS], bool) {
    let [r, g, b, a] = px;
    let hsv = rgb_to_hsv([normalize(r), normalize(g), normalize(b)]);
    let selected = is_selected(hsv, a);
    let hsv = if selected { recolor_hsv(hsv) } else { hsv };
    let [ro, go, bo] = hsv_to_rgb(hsv);
    ([quantize(ro), quantize(go), quantize(bo), a], selected)
}

/// Transforms a single RGBA pixel.
///
/// ```rust
/// use devlogo_ops::recolor_pixel;
///
/// // Pure cyan lands just short of red.
/// assert_eq!(recolor_pixel([0, 255, 255, 255]), [255, 0, 9, 255]);
/// // White and black are left alone.
/// assert_eq!(recolor_pixel([255, 255, 255, 255]), [255, 255, 255, 255]);
/// assert_eq!(recolor_pixel([0, 0, 0, 255]), [0, 0, 0, 255]);
/// ```
#[inline]
pub fn recolor_pixel(px: [u8; CHANNELS]) -> [u8; CHANNELS] {
    apply(px).0
}

/// Transforms an interleaved RGBA8 buffer in place on the current thread.
pub(crate) fn recolor_slice(data: &mut [u8]) -> usize {
    let mut recolored = 0;
    for chunk in data.chunks_exact_mut(CHANNELS) {
        let (out, selected) = apply([chunk[0], chunk[1], chunk[2], chunk[3]]);
        chunk.copy_from_slice(&out);
        recolored += selected as usize;
    }
    recolored
}

/// Transforms `image` in place and reports how many pixels were recolored.
///
/// Uses the rayon pass when the `parallel` feature is enabled. The result
/// is identical to [`recolor_sequential`].
pub fn recolor_in_place(image: &mut RgbaImage) -> RecolorStats {
    let (width, height) = image.dimensions();
    debug!(width, height, "Recoloring image");

    #[cfg(feature = "parallel")]
    let recolored = crate::parallel::recolor_slice_par(image.as_raw_mut());
    #[cfg(not(feature = "parallel"))]
    let recolored = recolor_slice(image.as_raw_mut());

    let stats = RecolorStats {
        total: image.pixel_count(),
        recolored,
    };
    trace!(total = stats.total, recolored = stats.recolored, "recolor done");
    stats
}

/// Returns a recolored copy of `image` together with pass statistics.
pub fn recolor_with_stats(image: &RgbaImage) -> (RgbaImage, RecolorStats) {
    let mut out = image.clone();
    let stats = recolor_in_place(&mut out);
    (out, stats)
}

/// Returns a recolored copy of `image`.
///
/// Output has the same dimensions and alpha as the input.
pub fn recolor(image: &RgbaImage) -> RgbaImage {
    recolor_with_stats(image).0
}

/// Single-threaded variant of [`recolor`].
pub fn recolor_sequential(image: &RgbaImage) -> RgbaImage {
    let mut out = image.clone();
    recolor_slice(out.as_raw_mut());
    out
}
