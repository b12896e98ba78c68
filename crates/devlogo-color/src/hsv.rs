//! HSV (hexcone) color model.
//!
//! Hue is measured in degrees in `[0, 360)`, saturation and value lie in
//! `[0, 1]`. RGB inputs and outputs are normalized `f64` triples.
//!
//! When two channels share the maximum, the hue formula is chosen with the
//! fixed priority red > green > blue. The three formulas agree at those
//! ties, so the priority only pins which branch is evaluated.

/// A single HSV sample.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hsv {
    /// Hue in degrees, `[0, 360)`.
    pub h: f64,
    /// Saturation, `[0, 1]`.
    pub s: f64,
    /// Value (brightness), `[0, 1]`.
    pub v: f64,
}

impl Hsv {
    /// Creates a new HSV sample.
    #[inline]
    pub const fn new(h: f64, s: f64, v: f64) -> Self {
        Self { h, s, v }
    }

    /// Converts 8-bit RGB channels to HSV.
    #[inline]
    pub fn from_rgb8(rgb: [u8; 3]) -> Self {
        rgb_to_hsv([normalize(rgb[0]), normalize(rgb[1]), normalize(rgb[2])])
    }

    /// Converts back to 8-bit RGB using [`quantize`].
    #[inline]
    pub fn to_rgb8(self) -> [u8; 3] {
        let [r, g, b] = hsv_to_rgb(self);
        [quantize(r), quantize(g), quantize(b)]
    }
}

/// Maps an 8-bit channel to `[0, 1]`.
#[inline]
pub fn normalize(v: u8) -> f64 {
    v as f64 / 255.0
}

/// Maps a `[0, 1]` channel back to 8 bits.
///
/// The value is scaled by 255, clamped to `[0, 255]` and truncated toward
/// zero. Truncation is applied uniformly to every channel.
///
/// ```rust
/// use devlogo_color::quantize;
///
/// assert_eq!(quantize(1.0), 255);
/// assert_eq!(quantize(0.999), 254);
/// assert_eq!(quantize(-0.5), 0);
/// assert_eq!(quantize(2.0), 255);
/// ```
#[inline]
pub fn quantize(v: f64) -> u8 {
    (v * 255.0).clamp(0.0, 255.0) as u8
}

/// Converts normalized RGB to HSV.
pub fn rgb_to_hsv(rgb: [f64; 3]) -> Hsv {
    let [r, g, b] = rgb;
    let cmax = r.max(g).max(b);
    let cmin = r.min(g).min(b);
    let delta = cmax - cmin;

    let h = if delta == 0.0 {
        0.0
    } else if cmax == r {
        60.0 * ((g - b) / delta).rem_euclid(6.0)
    } else if cmax == g {
        60.0 * ((b - r) / delta + 2.0)
    } else {
        60.0 * ((r - g) / delta + 4.0)
    };

    let s = if cmax > 0.0 { delta / cmax } else { 0.0 };

    Hsv { h, s, v: cmax }
}

/// Converts HSV to normalized RGB.
///
/// Hue outside `[0, 360)` wraps around.
pub fn hsv_to_rgb(hsv: Hsv) -> [f64; 3] {
    let Hsv { h, s, v } = hsv;
    let h60 = h / 60.0;
    let floor = h60.floor();
    let hi = (floor as i64).rem_euclid(6);
    let f = h60 - floor;

    let p = v * (1.0 - s);
    let q = v * (1.0 - f * s);
    let t = v * (1.0 - (1.0 - f) * s);

    match hi {
        0 => [v, t, p],
        1 => [q, v, p],
        2 => [p, v, t],
        3 => [p, q, v],
        4 => [t, p, v],
        _ => [v, p, q],
    }
}
