//! # devlogo-ops
//!
//! The hue-selective recolor transform behind the `devlogo` tool.
//!
//! Pixels whose hue falls in the cyan-to-blue band ([`SOURCE_BAND`]) and that
//! are neither washed out, nearly black, nor fully transparent get their hue
//! remapped into a warm band wrapping through 0° ([`TARGET_BAND`]) and their
//! saturation boosted. Every other pixel passes through the HSV round trip
//! unchanged. Alpha is never touched.
//!
//! # Modules
//!
//! - [`band`] - Hue bands and wrapped hue interpolation
//! - [`recolor`] - Selection mask and the per-pixel / whole-image transform
//! - `parallel` - Rayon-backed image pass (feature `parallel`, on by default)
//!
//! # Example
//!
//! ```rust
//! use devlogo_core::RgbaImage;
//! use devlogo_ops::recolor;
//!
//! let logo = RgbaImage::filled(8, 8, [0, 0, 255, 255]);
//! let dev = recolor(&logo);
//!
//! assert_eq!(dev.dimensions(), (8, 8));
//! assert_eq!(dev.pixel(0, 0), [255, 45, 0, 255]);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod band;
pub mod recolor;

#[cfg(feature = "parallel")]
pub mod parallel;

pub use band::HueBand;
pub use recolor::{
    MIN_SATURATION, MIN_VALUE, RecolorStats, SATURATION_BOOST, SOURCE_BAND, TARGET_BAND,
    is_selected, recolor, recolor_hsv, recolor_in_place, recolor_pixel, recolor_sequential,
    recolor_with_stats,
};
