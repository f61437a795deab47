//! LabeledImage - The main image container
//!
//! A `LabeledImage` stores one [`Label`] per pixel and a per-image [`Lut`]
//! that resolves labels to RGB colors. Pixels never hold raw colors, so two
//! images may use different labels for the same color.
//!
//! # Pixel layout
//!
//! - Labels live in a single flat buffer, row-major
//! - Pixel `(u, v)` (column `u`, row `v`) is at index `v * width + u`
//! - Every stored label is a valid index into the LUT
//!
//! # Ownership model
//!
//! An image exclusively owns its labels and its LUT. [`Clone`] is a deep
//! copy; rotations and codecs always produce new, independent images.

mod access;
pub mod compare;
pub mod serial;

use crate::color::Rgb;
use crate::error::{Error, Result};
use crate::lut::{BACKGROUND, LUT_CAPACITY, Label, Lut};

/// Labeled raster image with a color look-up table
///
/// # Examples
///
/// ```
/// use lutimage_core::{LabeledImage, Rgb};
///
/// let img = LabeledImage::new_chess(20, 20, 8, Rgb::new(0xff0000)).unwrap();
/// assert_eq!(img.width(), 20);
/// assert_eq!(img.num_colors(), 3);
/// assert_eq!(img.color(0, 0), Rgb::new(0xff0000));
/// assert_eq!(img.color(8, 0), Rgb::WHITE);
/// ```
#[derive(Debug, Clone)]
pub struct LabeledImage {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// Row-major labels, `width * height` entries
    labels: Vec<Label>,
    /// Label to color table
    lut: Lut,
}

impl LabeledImage {
    /// Create a new image with every pixel at the background label.
    ///
    /// The LUT holds the two reserved entries, WHITE (0) and BLACK (1).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0, or if the
    /// image is too large to be addressed with `i32` coordinates.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let size = Self::checked_size(width, height)?;
        Ok(Self {
            width,
            height,
            labels: vec![BACKGROUND; size],
            lut: Lut::new(),
        })
    }

    /// Create a chess-board image.
    ///
    /// The image is tiled into `edge x edge` squares. Square `(I, J)`, with
    /// `I = row / edge` and `J = col / edge`, takes the foreground color when
    /// `I + J` is even and stays background otherwise, so pixel `(0, 0)` is
    /// always foreground. The foreground color reuses an existing LUT entry
    /// when possible (black maps to label 1).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] for empty dimensions and
    /// [`Error::InvalidParameter`] if `edge` is 0.
    pub fn new_chess(width: u32, height: u32, edge: u32, color: Rgb) -> Result<Self> {
        if edge == 0 {
            return Err(Error::InvalidParameter("chess edge must be > 0".into()));
        }
        let mut img = Self::new(width, height)?;
        let label = img.lut.alloc(color)?;

        let w = width as usize;
        for (i, row) in img.labels.chunks_exact_mut(w).enumerate() {
            let tile_i = i as u32 / edge;
            for (j, px) in row.iter_mut().enumerate() {
                let tile_j = j as u32 / edge;
                *px = if (tile_i + tile_j) % 2 == 0 {
                    label
                } else {
                    BACKGROUND
                };
            }
        }

        Ok(img)
    }

    /// Create an image showing a palette of generated colors.
    ///
    /// The LUT is filled to capacity with the generated color sequence (see
    /// [`Lut::generated`]). The image is tiled into `edge x edge` squares,
    /// numbered left to right and top to bottom; square `(I, J)` gets label
    /// `(I * (width / edge) + J) mod LUT_CAPACITY`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] for empty dimensions and
    /// [`Error::InvalidParameter`] if `edge` is 0.
    pub fn new_palette(width: u32, height: u32, edge: u32) -> Result<Self> {
        if edge == 0 {
            return Err(Error::InvalidParameter("palette edge must be > 0".into()));
        }
        let mut img = Self::new(width, height)?;
        img.lut = Lut::generated();

        let tiles_per_row = (width / edge) as usize;
        let w = width as usize;
        for (i, row) in img.labels.chunks_exact_mut(w).enumerate() {
            let tile_i = i / edge as usize;
            for (j, px) in row.iter_mut().enumerate() {
                let tile_j = j / edge as usize;
                *px = ((tile_i * tiles_per_row + tile_j) % LUT_CAPACITY) as Label;
            }
        }

        Ok(img)
    }

    /// Assemble an image from a row-major label buffer and a LUT.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidDimension`] for empty dimensions
    /// - [`Error::SizeMismatch`] if `labels.len() != width * height`
    /// - [`Error::LabelOutOfRange`] if a label does not index into `lut`
    pub fn from_parts(width: u32, height: u32, labels: Vec<Label>, lut: Lut) -> Result<Self> {
        let size = Self::checked_size(width, height)?;
        if labels.len() != size {
            return Err(Error::SizeMismatch {
                expected: size,
                actual: labels.len(),
            });
        }
        if let Some(&label) = labels.iter().find(|&&l| !lut.contains_label(l)) {
            return Err(Error::LabelOutOfRange {
                label,
                len: lut.len(),
            });
        }
        Ok(Self {
            width,
            height,
            labels,
            lut,
        })
    }

    /// Validate dimensions and return the pixel count.
    fn checked_size(width: u32, height: u32) -> Result<usize> {
        let too_large = width > i32::MAX as u32 || height > i32::MAX as u32;
        if width == 0 || height == 0 || too_large {
            return Err(Error::InvalidDimension { width, height });
        }
        (width as usize)
            .checked_mul(height as usize)
            .ok_or(Error::InvalidDimension { width, height })
    }

    /// Get the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the number of LUT entries in use.
    #[inline]
    pub fn num_colors(&self) -> usize {
        self.lut.len()
    }

    /// Get the look-up table.
    #[inline]
    pub fn lut(&self) -> &Lut {
        &self.lut
    }

    /// Get the row-major label buffer.
    #[inline]
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    /// Iterate over the label rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Label]> {
        self.labels.chunks_exact(self.width as usize)
    }

    /// Return the label for `color`, adding it to the LUT if needed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LutOverflow`] if the LUT is full and does not
    /// already contain `color`.
    pub fn alloc_color(&mut self, color: Rgb) -> Result<Label> {
        self.lut.alloc(color)
    }

    /// Count the pixels carrying `label`.
    pub fn count_label(&self, label: Label) -> usize {
        self.labels.iter().filter(|&&l| l == label).count()
    }
}
