//! Error types for image I/O.

use std::io;
use thiserror::Error;

/// Error type for PNG reading and writing.
#[derive(Error, Debug)]
pub enum IoError {
    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Decoding error.
    #[error("decode error: {0}")]
    DecodeError(String),

    /// Encoding error.
    #[error("encode error: {0}")]
    EncodeError(String),

    /// Color type or bit depth that cannot be turned into RGBA8.
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Decoded pixels did not form a valid grid.
    #[error(transparent)]
    Core(#[from] devlogo_core::Error),
}

/// Result type for image I/O.
pub type IoResult<T> = Result<T, IoError>;
