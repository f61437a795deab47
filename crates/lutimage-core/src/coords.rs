//! Pixel coordinates
//!
//! `u` is the column index and `v` the row index. Coordinates are signed so
//! that neighbors of border pixels (e.g. `u = -1`) can be represented and
//! rejected by [`LabeledImage::is_valid_pixel`](crate::LabeledImage::is_valid_pixel).

use std::fmt;

/// A `(column, row)` pixel position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PixelCoord {
    u: i32,
    v: i32,
}

impl PixelCoord {
    /// Create a coordinate pair
    #[inline]
    pub const fn new(u: i32, v: i32) -> Self {
        Self { u, v }
    }

    /// Column index
    #[inline]
    pub const fn u(self) -> i32 {
        self.u
    }

    /// Row index
    #[inline]
    pub const fn v(self) -> i32 {
        self.v
    }

    /// The four edge-adjacent neighbors: left, right, up, down.
    ///
    /// Neighbors may lie outside any particular image; callers filter them.
    #[inline]
    pub const fn neighbors4(self) -> [PixelCoord; 4] {
        [
            PixelCoord::new(self.u - 1, self.v),
            PixelCoord::new(self.u + 1, self.v),
            PixelCoord::new(self.u, self.v - 1),
            PixelCoord::new(self.u, self.v + 1),
        ]
    }
}

impl From<(i32, i32)> for PixelCoord {
    fn from((u, v): (i32, i32)) -> Self {
        Self::new(u, v)
    }
}

impl fmt::Display for PixelCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.u, self.v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality_is_componentwise() {
        assert_eq!(PixelCoord::new(3, 4), PixelCoord::from((3, 4)));
        assert_ne!(PixelCoord::new(3, 4), PixelCoord::new(4, 3));
    }

    #[test]
    fn test_neighbors4() {
        let n = PixelCoord::new(0, 0).neighbors4();
        assert_eq!(
            n,
            [
                PixelCoord::new(-1, 0),
                PixelCoord::new(1, 0),
                PixelCoord::new(0, -1),
                PixelCoord::new(0, 1),
            ]
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(PixelCoord::new(10, 7).to_string(), "(10, 7)");
    }
}
