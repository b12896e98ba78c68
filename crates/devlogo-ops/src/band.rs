//! Hue bands.
//!
//! A [`HueBand`] is an arc on the hue circle running counter-clockwise from
//! `start` to `end` (degrees). When `end < start` the arc wraps through 0°.
//!
//! ```rust
//! use devlogo_ops::HueBand;
//!
//! let blues = HueBand::new(120.0, 260.0);
//! let reds = HueBand::new(345.0, 15.0);
//!
//! assert_eq!(blues.span(), 140.0);
//! assert_eq!(reds.span(), 30.0);
//! assert_eq!(blues.remap(120.0, reds), 345.0);
//! assert_eq!(blues.remap(260.0, reds), 15.0);
//! ```

/// A contiguous arc of hue angles, in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HueBand {
    /// First hue of the band.
    pub start: f64,
    /// Last hue of the band. May be less than `start` for a wrapping band.
    pub end: f64,
}

impl HueBand {
    /// Creates a band from `start` to `end`.
    pub const fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Returns `true` if the band crosses 0°/360°.
    #[inline]
    pub fn wraps(&self) -> bool {
        self.end < self.start
    }

    /// Angular width of the band in degrees, `[0, 360)`.
    #[inline]
    pub fn span(&self) -> f64 {
        (self.end + 360.0 - self.start).rem_euclid(360.0)
    }

    /// Inclusive containment test on both ends.
    #[inline]
    pub fn contains(&self, hue: f64) -> bool {
        if self.wraps() {
            hue >= self.start || hue <= self.end
        } else {
            hue >= self.start && hue <= self.end
        }
    }

    /// Position of `hue` inside the band, `0` at `start` and `1` at `end`.
    ///
    /// A zero-width band (`start == end`) maps every hue to `0`.
    #[inline]
    pub fn position(&self, hue: f64) -> f64 {
        let span = self.span();
        if span == 0.0 {
            return 0.0;
        }
        (hue - self.start).rem_euclid(360.0) / span
    }

    /// Hue at position `t` along the band, wrapped into `[0, 360)`.
    #[inline]
    pub fn lerp(&self, t: f64) -> f64 {
        (self.start + t * self.span()).rem_euclid(360.0)
    }

    /// Linearly maps `hue` from this band onto `target`.
    #[inline]
    pub fn remap(&self, hue: f64, target: HueBand) -> f64 {
        target.lerp(self.position(hue))
    }
}
