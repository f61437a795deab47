//! Packed 24-bit RGB colors
//!
//! Colors are stored as `0xRRGGBB` (red in the high byte). The top byte of the
//! underlying `u32` is always zero.

use std::fmt;

/// Increment used by the pseudo-random color generator.
pub const COLOR_STEP: u32 = 7639;

/// Mask selecting the 24 color bits of a packed value.
pub const RGB_MASK: u32 = 0x00FF_FFFF;

/// Shift amounts for extracting color channels
pub const RED_SHIFT: u32 = 16;
pub const GREEN_SHIFT: u32 = 8;
pub const BLUE_SHIFT: u32 = 0;

/// A 24-bit RGB color packed as `0xRRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb(u32);

impl Rgb {
    /// Pure white, the background color.
    pub const WHITE: Rgb = Rgb(0xFF_FFFF);
    /// Pure black, the conventional contour color.
    pub const BLACK: Rgb = Rgb(0x00_0000);

    /// Create a color from a packed value; bits above 24 are discarded.
    #[inline]
    pub const fn new(packed: u32) -> Self {
        Rgb(packed & RGB_MASK)
    }

    /// Compose a color from its three channels.
    #[inline]
    pub const fn from_channels(red: u8, green: u8, blue: u8) -> Self {
        Rgb(((red as u32) << RED_SHIFT) | ((green as u32) << GREEN_SHIFT) | (blue as u32))
    }

    /// The packed `0xRRGGBB` value.
    #[inline]
    pub const fn packed(self) -> u32 {
        self.0
    }

    /// Red channel.
    #[inline]
    pub const fn red(self) -> u8 {
        ((self.0 >> RED_SHIFT) & 0xff) as u8
    }

    /// Green channel.
    #[inline]
    pub const fn green(self) -> u8 {
        ((self.0 >> GREEN_SHIFT) & 0xff) as u8
    }

    /// Blue channel.
    #[inline]
    pub const fn blue(self) -> u8 {
        ((self.0 >> BLUE_SHIFT) & 0xff) as u8
    }

    /// All three channels as `(r, g, b)`.
    #[inline]
    pub const fn channels(self) -> (u8, u8, u8) {
        (self.red(), self.green(), self.blue())
    }

    /// Pseudo-random successor of this color: `(color + 7639) mod 2^24`.
    ///
    /// The sequence is deterministic and drives both palette construction
    /// and the colors handed out to segmented regions.
    #[inline]
    pub const fn next(self) -> Self {
        Rgb(self.0.wrapping_add(COLOR_STEP) & RGB_MASK)
    }
}

impl From<u32> for Rgb {
    fn from(packed: u32) -> Self {
        Rgb::new(packed)
    }
}

impl From<Rgb> for u32 {
    fn from(color: Rgb) -> Self {
        color.packed()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (r, g, b) = self.channels();
        write!(f, "({r:3},{g:3},{b:3})")
    }
}

/// Infinite iterator over the generated color sequence.
///
/// The first color yielded is the successor of the seed, never the seed
/// itself.
#[derive(Debug, Clone)]
pub struct ColorGenerator {
    current: Rgb,
}

impl ColorGenerator {
    /// Start a generator from `seed`.
    pub fn new(seed: Rgb) -> Self {
        Self { current: seed }
    }

    /// The most recently produced color (the seed before the first call).
    pub fn current(&self) -> Rgb {
        self.current
    }
}

impl Default for ColorGenerator {
    fn default() -> Self {
        Self::new(Rgb::BLACK)
    }
}

impl Iterator for ColorGenerator {
    type Item = Rgb;

    fn next(&mut self) -> Option<Rgb> {
        self.current = self.current.next();
        Some(self.current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channels() {
        let c = Rgb::from_channels(0x12, 0x34, 0x56);
        assert_eq!(c.packed(), 0x123456);
        assert_eq!(c.channels(), (0x12, 0x34, 0x56));
        assert_eq!(Rgb::WHITE.channels(), (255, 255, 255));
    }

    #[test]
    fn test_new_masks_high_byte() {
        assert_eq!(Rgb::new(0xAB12_3456).packed(), 0x12_3456);
    }

    #[test]
    fn test_next_color() {
        assert_eq!(Rgb::BLACK.next().packed(), 7639);
        assert_eq!(Rgb::new(7639).next().packed(), 2 * 7639);
        // Wraps modulo 2^24
        assert_eq!(Rgb::WHITE.next().packed(), 7638);
    }

    #[test]
    fn test_generator_sequence() {
        let colors: Vec<u32> = ColorGenerator::default().take(3).map(Rgb::packed).collect();
        assert_eq!(colors, vec![7639, 15278, 22917]);
    }

    #[test]
    fn test_display() {
        assert_eq!(Rgb::from_channels(255, 0, 7).to_string(), "(255,  0,  7)");
    }
}
