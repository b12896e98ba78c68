//! # devlogo-core
//!
//! Core types shared by the devlogo crates.
//!
//! - [`RgbaImage`] - Owned 8-bit RGBA pixel grid
//! - [`Error`], [`Result`] - Error handling for grid construction and access
//!
//! ## Crate Structure
//!
//! ```text
//! devlogo-core (this crate)
//!    ^
//!    |
//!    +-- devlogo-color (HSV conversion)
//!    +-- devlogo-ops (recolor transform)
//!    +-- devlogo-io (PNG read/write)
//!    +-- devlogo-cli
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod image;

pub use error::{Error, Result};
pub use image::{CHANNELS, RgbaImage};
