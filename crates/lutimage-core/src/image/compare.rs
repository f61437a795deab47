//! Image comparison operations
//!
//! Images are compared by what they show, not by how they are stored: two
//! pixels match when their labels resolve to the same RGB color through each
//! image's own LUT. LUT order depends on allocation history, so the labels
//! themselves may differ between equal images.

use super::LabeledImage;

/// Summary of a pixelwise comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorDiff {
    /// Whether the dimensions matched (if not, no pixel was compared)
    pub same_size: bool,
    /// Number of positions whose resolved colors differ
    pub n_diff: usize,
}

impl ColorDiff {
    /// Check whether the comparison found equal images.
    pub fn is_equal(&self) -> bool {
        self.same_size && self.n_diff == 0
    }
}

impl LabeledImage {
    /// Check whether both images have the same size and show the same color
    /// at every position.
    pub fn is_equal(&self, other: &LabeledImage) -> bool {
        self.width == other.width
            && self.height == other.height
            && self.colors().zip(other.colors()).all(|(a, b)| a == b)
    }

    /// Negation of [`is_equal`](Self::is_equal).
    pub fn is_different(&self, other: &LabeledImage) -> bool {
        !self.is_equal(other)
    }

    /// Count the positions whose resolved colors differ.
    pub fn color_diff(&self, other: &LabeledImage) -> ColorDiff {
        if self.width != other.width || self.height != other.height {
            return ColorDiff {
                same_size: false,
                n_diff: 0,
            };
        }
        let n_diff = self
            .colors()
            .zip(other.colors())
            .filter(|(a, b)| a != b)
            .count();
        ColorDiff {
            same_size: true,
            n_diff,
        }
    }
}

impl PartialEq for LabeledImage {
    fn eq(&self, other: &Self) -> bool {
        self.is_equal(other)
    }
}

impl Eq for LabeledImage {}
