//! lutimage - Labeled images for Rust
//!
//! Images are grids of small integer labels, each label indexing a 24-bit
//! color in a per-image look-up table (LUT).
//!
//! # Overview
//!
//! - Image creation (blank, chess board, generated palette) and comparison
//! - PBM/PPM I/O, optional PNG export
//! - Orthogonal rotations and flips
//! - Flood fill with recursive, stack or queue strategies
//! - Segmentation of the background into colored regions
//!
//! # Example
//!
//! ```
//! use lutimage::{LabeledImage, Rgb};
//! use lutimage::region::{FillMethod, segment};
//!
//! let mut img = LabeledImage::new_chess(20, 20, 8, Rgb::from_channels(255, 0, 0)).unwrap();
//! assert_eq!(img.width(), 20);
//! assert_eq!(segment(&mut img, &FillMethod::Queue).unwrap(), 4);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use lutimage_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use lutimage_io as io;
pub use lutimage_region as region;
pub use lutimage_transform as transform;
