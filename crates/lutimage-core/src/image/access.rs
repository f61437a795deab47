//! Pixel access functions
//!
//! Coordinates are `(u, v)` = (column, row) as signed integers so that
//! out-of-image neighbors can be expressed and tested. Accessors come in two
//! flavors:
//!
//! - `get_*` returns `None` for coordinates outside the image
//! - the plain accessors treat such coordinates as a programmer error and
//!   panic

use super::LabeledImage;
use crate::color::Rgb;
use crate::coords::PixelCoord;
use crate::lut::Label;

impl LabeledImage {
    /// Check whether `(u, v)` lies inside the image.
    #[inline]
    pub fn is_valid_pixel(&self, u: i32, v: i32) -> bool {
        0 <= u && (u as u32) < self.width && 0 <= v && (v as u32) < self.height
    }

    /// Check whether a coordinate lies inside the image.
    #[inline]
    pub fn contains(&self, coord: PixelCoord) -> bool {
        self.is_valid_pixel(coord.u(), coord.v())
    }

    #[inline]
    fn index(&self, u: i32, v: i32) -> Option<usize> {
        if self.is_valid_pixel(u, v) {
            Some(v as usize * self.width as usize + u as usize)
        } else {
            None
        }
    }

    #[inline]
    fn checked_index(&self, u: i32, v: i32) -> usize {
        self.index(u, v).unwrap_or_else(|| {
            panic!(
                "pixel ({u}, {v}) outside {}x{} image",
                self.width, self.height
            )
        })
    }

    /// Get the label at `(u, v)`, or `None` if outside the image.
    #[inline]
    pub fn get_label(&self, u: i32, v: i32) -> Option<Label> {
        self.index(u, v).map(|i| self.labels[i])
    }

    /// Get the label at `(u, v)`.
    ///
    /// # Panics
    ///
    /// Panics if `(u, v)` is outside the image.
    #[inline]
    pub fn label(&self, u: i32, v: i32) -> Label {
        self.labels[self.checked_index(u, v)]
    }

    /// Set the label at `(u, v)`.
    ///
    /// # Panics
    ///
    /// Panics if `(u, v)` is outside the image or `label` is not a valid
    /// LUT index.
    #[inline]
    pub fn set_label(&mut self, u: i32, v: i32, label: Label) {
        assert!(
            self.lut.contains_label(label),
            "label {label} not in LUT of {} colors",
            self.lut.len()
        );
        let i = self.checked_index(u, v);
        self.labels[i] = label;
    }

    /// Get the resolved color at `(u, v)`, or `None` if outside the image.
    #[inline]
    pub fn get_color(&self, u: i32, v: i32) -> Option<Rgb> {
        self.get_label(u, v).and_then(|l| self.lut.get(l))
    }

    /// Get the resolved color at `(u, v)`.
    ///
    /// # Panics
    ///
    /// Panics if `(u, v)` is outside the image.
    #[inline]
    pub fn color(&self, u: i32, v: i32) -> Rgb {
        // Every stored label indexes into the LUT
        self.lut.colors()[self.label(u, v) as usize]
    }

    /// Iterate over the resolved colors of all pixels, row-major.
    pub fn colors(&self) -> impl Iterator<Item = Rgb> + '_ {
        let lut = self.lut.colors();
        self.labels.iter().map(move |&l| lut[l as usize])
    }
}
