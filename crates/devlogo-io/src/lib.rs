//! # devlogo-io
//!
//! PNG input and output for devlogo.
//!
//! Every PNG is decoded to an 8-bit RGBA [`RgbaImage`] regardless of its
//! color type or bit depth, and every output is written as 8-bit RGBA.
//!
//! # Example
//!
//! ```rust,ignore
//! let logo = devlogo_io::read("logo.png")?;
//! devlogo_io::write("logo-dev.png", &logo)?;
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
pub mod png;

pub use devlogo_core::RgbaImage;
pub use error::{IoError, IoResult};
pub use self::png::{decode, encode, read, write};
