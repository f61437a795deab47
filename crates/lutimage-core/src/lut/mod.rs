//! Lut - Color look-up table for labeled images
//!
//! Every [`LabeledImage`](crate::LabeledImage) carries a LUT that maps a pixel
//! label to a 24-bit RGB color. The table has a fixed capacity and only ever
//! grows: entries are appended, never removed or reordered, so a label stays
//! valid for the lifetime of the image.
//!
//! Two entries are reserved and present in every table:
//!
//! - label 0: [`Rgb::WHITE`], the background
//! - label 1: [`Rgb::BLACK`], contours / binary foreground

use crate::color::{ColorGenerator, Rgb};
use crate::error::{Error, Result};

/// A pixel label: an index into the image's LUT.
pub type Label = u16;

/// Maximum number of entries in a LUT.
pub const LUT_CAPACITY: usize = 1000;

/// Label of the white background entry.
pub const WHITE_LABEL: Label = 0;

/// Label of the black entry.
pub const BLACK_LABEL: Label = 1;

/// Label that marks background (not yet segmented) pixels.
pub const BACKGROUND: Label = WHITE_LABEL;

/// Color look-up table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lut {
    colors: Vec<Rgb>,
}

impl Lut {
    /// Create a table seeded with the WHITE and BLACK entries.
    pub fn new() -> Self {
        let mut colors = Vec::with_capacity(LUT_CAPACITY);
        colors.push(Rgb::WHITE);
        colors.push(Rgb::BLACK);
        Self { colors }
    }

    /// Create a table filled to capacity with generated colors.
    ///
    /// After the two reserved entries, the remaining slots receive the
    /// sequence produced by [`Rgb::next`] starting from black. No
    /// de-duplication is performed.
    pub fn generated() -> Self {
        let mut lut = Self::new();
        let remaining = LUT_CAPACITY - lut.len();
        lut.colors.extend(ColorGenerator::default().take(remaining));
        lut
    }

    /// Number of colors in use
    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always false: the reserved entries are never removed
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Maximum number of entries
    #[inline]
    pub fn capacity(&self) -> usize {
        LUT_CAPACITY
    }

    /// Check whether every slot is taken
    #[inline]
    pub fn is_full(&self) -> bool {
        self.colors.len() >= LUT_CAPACITY
    }

    /// Get the color of a label
    #[inline]
    pub fn get(&self, label: Label) -> Option<Rgb> {
        self.colors.get(label as usize).copied()
    }

    /// Check whether a label indexes an existing entry
    #[inline]
    pub fn contains_label(&self, label: Label) -> bool {
        (label as usize) < self.colors.len()
    }

    /// Find the label of an exact color (linear search)
    pub fn find(&self, color: Rgb) -> Option<Label> {
        self.colors
            .iter()
            .position(|&c| c == color)
            .map(|index| index as Label)
    }

    /// Return the label for `color`, appending a new entry if needed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LutOverflow`] if the color is absent and the table is
    /// full.
    pub fn alloc(&mut self, color: Rgb) -> Result<Label> {
        match self.find(color) {
            Some(label) => Ok(label),
            None => self.push(color),
        }
    }

    /// Append `color` without looking for an existing entry.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LutOverflow`] if the table is full.
    pub fn push(&mut self, color: Rgb) -> Result<Label> {
        if self.is_full() {
            return Err(Error::LutOverflow {
                capacity: LUT_CAPACITY,
            });
        }
        let label = self.colors.len() as Label;
        self.colors.push(color);
        Ok(label)
    }

    /// Get all colors as a slice, indexed by label
    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }
}

impl Default for Lut {
    fn default() -> Self {
        Self::new()
    }
}
