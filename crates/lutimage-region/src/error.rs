//! Error types for lutimage-region

use lutimage_core::Label;
use thiserror::Error;

/// Errors that can occur during region processing operations
#[derive(Debug, Error)]
pub enum RegionError {
    /// Core library error (e.g. the LUT is full)
    #[error("core error: {0}")]
    Core(#[from] lutimage_core::Error),

    /// Invalid seed position
    #[error("invalid seed position: ({u}, {v})")]
    InvalidSeed { u: i32, v: i32 },

    /// Fill label not present in the image's LUT
    #[error("invalid fill label {label}: image has {num_colors} colors")]
    InvalidLabel { label: Label, num_colors: usize },
}

/// Result type for region operations
pub type RegionResult<T> = Result<T, RegionError>;
