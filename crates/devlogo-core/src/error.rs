//! Error types for devlogo-core operations.
//!
//! # Usage
//!
//! ```rust
//! use devlogo_core::{Error, RgbaImage};
//!
//! let err = RgbaImage::from_raw(2, 2, vec![0; 3]).unwrap_err();
//! assert!(matches!(err, Error::InvalidDimensions { .. }));
//! ```

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building an image grid.
#[derive(Debug, Error)]
pub enum Error {
    /// Buffer length does not match the requested dimensions.
    ///
    /// Also returned when `width * height * 4` overflows `usize`.
    #[error("invalid dimensions: {width}x{height} ({reason})")]
    InvalidDimensions {
        /// Requested width
        width: u32,
        /// Requested height
        height: u32,
        /// Reason why dimensions are invalid
        reason: String,
    },
}

impl Error {
    /// Creates an [`Error::InvalidDimensions`] error.
    #[inline]
    pub fn invalid_dimensions(width: u32, height: u32, reason: impl Into<String>) -> Self {
        Self::InvalidDimensions {
            width,
            height,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_dimensions() {
        let err = Error::invalid_dimensions(4, 4, "expected 64 bytes, got 3");
        assert!(err.to_string().contains("4x4"));
        assert!(err.to_string().contains("expected 64 bytes"));
    }
}
