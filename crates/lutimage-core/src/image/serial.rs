//! Raw text dump of an image
//!
//! Prints the label grid followed by the LUT, for inspection on a console.
//! The format is:
//!
//! ```text
//! width = 3 height = 1
//! num_colors = 2
//! RAW image
//!  1 0 1
//! LUT:
//!   0 -> (255,255,255)
//!   1 -> (  0,  0,  0)
//!
//! ```

use super::LabeledImage;
use std::io::{self, Write};

impl LabeledImage {
    /// Write the raw dump to `out`.
    pub fn write_raw<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "width = {} height = {}", self.width, self.height)?;
        writeln!(out, "num_colors = {}", self.lut.len())?;
        writeln!(out, "RAW image")?;

        for row in self.rows() {
            for label in row {
                write!(out, "{label:2}")?;
            }
            writeln!(out)?;
        }

        writeln!(out, "LUT:")?;
        for (index, color) in self.lut.colors().iter().enumerate() {
            writeln!(out, "{index:3} -> {color}")?;
        }
        writeln!(out)
    }

    /// Print the raw dump on stdout. Never fails; write errors are ignored.
    pub fn print_raw(&self) {
        let stdout = io::stdout();
        let mut lock = stdout.lock();
        let _ = self.write_raw(&mut lock);
    }
}

#[cfg(test)]
mod tests {
    use crate::{LabeledImage, Rgb};

    #[test]
    fn test_write_raw_format() {
        let img = LabeledImage::new_chess(3, 1, 1, Rgb::BLACK).unwrap();
        let mut buf = Vec::new();
        img.write_raw(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(
            text,
            "width = 3 height = 1\n\
             num_colors = 2\n\
             RAW image\n \
             1 0 1\n\
             LUT:\n  \
             0 -> (255,255,255)\n  \
             1 -> (  0,  0,  0)\n\n"
        );
    }
}
