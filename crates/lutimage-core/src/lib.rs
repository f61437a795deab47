//! lutimage Core - Basic data structures for labeled images
//!
//! This crate provides the fundamental data structures used throughout
//! the lutimage library:
//!
//! - [`LabeledImage`] - Label grid plus color look-up table
//! - [`Lut`] / [`Label`] - The look-up table and its index type
//! - [`Rgb`] / [`ColorGenerator`] - Packed 24-bit colors and the
//!   deterministic color sequence
//! - [`PixelCoord`] - `(column, row)` pixel positions
//! - [`CoordStack`] / [`CoordQueue`] - Growable coordinate worklists
//!
//! # Error model
//!
//! Environmental failures (bad dimensions, a full LUT, I/O) are reported as
//! [`Error`]. Calling an operation with coordinates or labels that violate its
//! documented preconditions is a bug in the caller and panics.

pub mod color;
pub mod container;
pub mod coords;
pub mod error;
pub mod image;
pub mod lut;

pub use color::{ColorGenerator, Rgb};
pub use container::{CoordQueue, CoordStack, DEFAULT_WORKLIST_CAPACITY, Worklist};
pub use coords::PixelCoord;
pub use error::{Error, Result};
pub use image::LabeledImage;
pub use image::compare::ColorDiff;
pub use lut::{BACKGROUND, BLACK_LABEL, LUT_CAPACITY, Label, Lut, WHITE_LABEL};
