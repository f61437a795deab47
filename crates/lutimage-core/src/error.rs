//! Error types for lutimage-core
//!
//! Provides a unified error type for the environmental failures of the core
//! crate: bad construction parameters, a full look-up table, and I/O while
//! dumping an image. Precondition violations (out-of-range coordinates,
//! invalid labels) are programmer errors and panic instead.

use thiserror::Error;

/// lutimage-core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid image dimensions
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// The look-up table has no free entry left
    #[error("LUT overflow: all {capacity} entries are in use")]
    LutOverflow { capacity: usize },

    /// A label does not index into the look-up table
    #[error("label {label} out of range for a LUT with {len} colors")]
    LabelOutOfRange { label: u16, len: usize },

    /// Label buffer length does not match the image dimensions
    #[error("label buffer holds {actual} entries, expected {expected}")]
    SizeMismatch { expected: usize, actual: usize },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for lutimage-core operations
pub type Result<T> = std::result::Result<T, Error>;
