//! lutimage-transform - Geometric transformations for labeled images
//!
//! This crate provides the lossless, label-preserving transformations:
//!
//! - Orthogonal rotations (90, 180, 270 degrees)
//! - Horizontal and vertical flips
//!
//! Every operation returns a new, independently owned image that carries a
//! copy of the source LUT. The source is never modified.

mod error;
pub mod rotate;

pub use error::{TransformError, TransformResult};
pub use rotate::{flip_lr, flip_tb, rotate_90, rotate_90_cw, rotate_180, rotate_orth};
