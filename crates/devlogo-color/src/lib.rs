//! # devlogo-color
//!
//! HSV color model used by the devlogo recolor transform.
//!
//! - [`Hsv`] - Hue (degrees) / Saturation / Value sample
//! - [`rgb_to_hsv`], [`hsv_to_rgb`] - Conversions on normalized `f64` RGB
//! - [`normalize`], [`quantize`] - 8-bit channel <-> `[0, 1]` float
//!
//! # Example
//!
//! ```rust
//! use devlogo_color::{Hsv, hsv_to_rgb, rgb_to_hsv};
//!
//! let hsv = rgb_to_hsv([0.0, 1.0, 1.0]);
//! assert_eq!(hsv, Hsv::new(180.0, 1.0, 1.0));
//! assert_eq!(hsv_to_rgb(hsv), [0.0, 1.0, 1.0]);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod hsv;

pub use hsv::{Hsv, hsv_to_rgb, normalize, quantize, rgb_to_hsv};
