//! lutimage-region - Region processing for labeled images
//!
//! This crate provides:
//!
//! - **Flood fill** - three interchangeable strategies behind the
//!   [`FillStrategy`] trait, with an optional [`FillTrace`] observer
//! - **Segmentation** - labels every 4-connected background region with its
//!   own generated color
//!
//! # Examples
//!
//! ## Flood fill
//!
//! ```
//! use lutimage_core::{LabeledImage, BLACK_LABEL};
//! use lutimage_region::{FillStrategy, QueueFill};
//!
//! let mut img = LabeledImage::new(10, 10).unwrap();
//! let count = QueueFill.fill(&mut img, 5, 5, BLACK_LABEL);
//! assert_eq!(count, 100); // All 100 pixels filled
//! ```
//!
//! ## Segmentation
//!
//! ```
//! use lutimage_core::{LabeledImage, Rgb};
//! use lutimage_region::{FillMethod, segment};
//!
//! let red = Rgb::from_channels(255, 0, 0);
//! let mut img = LabeledImage::new_chess(20, 20, 8, red).unwrap();
//! let regions = segment(&mut img, &FillMethod::Stack).unwrap();
//! assert_eq!(regions, 4);
//! ```

mod error;
pub mod fill;
pub mod segment;

pub use error::{RegionError, RegionResult};
pub use fill::{
    FillMethod, FillStats, FillStrategy, FillTrace, NoTrace, QueueFill, RecursiveFill, StackFill,
    fill_recursive, fill_with_queue, fill_with_stack,
};
pub use segment::{Region, segment, segment_regions};
