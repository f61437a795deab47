//! PNM (Portable Any Map) format support
//!
//! Reads and writes two members of the family:
//!
//! - PBM as binary `P4`: rows bit-packed MSB first, padded to a byte, with
//!   bit 1 meaning black
//! - PPM as ASCII `P3`: one `r g b` triplet per pixel
//!
//! Header fields may be separated by `#` comment lines. Other PNM variants
//! (P1, P2, P5, P6, P7) are rejected.

use crate::{IoError, IoResult};
use log::debug;
use lutimage_core::{BLACK_LABEL, LabeledImage, Label, Lut, Rgb, WHITE_LABEL};
use std::io::{BufRead, ErrorKind, Read, Write};

/// Maxval written to every PPM file
const PPM_MAXVAL: u32 = 255;

/// Byte-level reader for the whitespace/comment separated PNM header
struct HeaderReader<'a, R> {
    inner: &'a mut R,
}

impl<'a, R: Read> HeaderReader<'a, R> {
    fn new(inner: &'a mut R) -> Self {
        Self { inner }
    }

    fn next_byte(&mut self) -> IoResult<Option<u8>> {
        let mut byte = [0u8; 1];
        loop {
            match self.inner.read(&mut byte) {
                Ok(0) => return Ok(None),
                Ok(_) => return Ok(Some(byte[0])),
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }
    }

    fn skip_comment(&mut self) -> IoResult<()> {
        while let Some(b) = self.next_byte()? {
            if b == b'\n' {
                break;
            }
        }
        Ok(())
    }

    /// Check the two-byte magic number
    fn expect_magic(&mut self, magic: &[u8; 2]) -> IoResult<()> {
        let mut found = [0u8; 2];
        self.inner.read_exact(&mut found).map_err(|e| match e.kind() {
            ErrorKind::UnexpectedEof => IoError::InvalidData("missing magic number".to_string()),
            _ => IoError::Io(e),
        })?;
        if &found != magic {
            return Err(IoError::InvalidData(format!(
                "expected magic {}, found {}",
                String::from_utf8_lossy(magic),
                String::from_utf8_lossy(&found)
            )));
        }
        Ok(())
    }

    /// Read one unsigned decimal value.
    ///
    /// Leading whitespace and comment lines are skipped. The single byte
    /// terminating the number is consumed.
    fn read_value(&mut self, what: &str) -> IoResult<u32> {
        let first = loop {
            match self.next_byte()? {
                None => {
                    return Err(IoError::InvalidData(format!(
                        "unexpected end of data reading {what}"
                    )));
                }
                Some(b'#') => self.skip_comment()?,
                Some(b) if b.is_ascii_whitespace() => {}
                Some(b) => break b,
            }
        };
        if !first.is_ascii_digit() {
            return Err(IoError::InvalidData(format!(
                "expected a number for {what}, found {:?}",
                first as char
            )));
        }

        let mut value = u32::from(first - b'0');
        loop {
            match self.next_byte()? {
                Some(b) if b.is_ascii_digit() => {
                    value = value
                        .checked_mul(10)
                        .and_then(|v| v.checked_add(u32::from(b - b'0')))
                        .ok_or_else(|| IoError::InvalidData(format!("{what} is too large")))?;
                }
                Some(b'#') => {
                    self.skip_comment()?;
                    break;
                }
                Some(b) if b.is_ascii_whitespace() => break,
                None => break,
                Some(b) => {
                    return Err(IoError::InvalidData(format!(
                        "unexpected byte {:?} in {what}",
                        b as char
                    )));
                }
            }
        }
        Ok(value)
    }
}

/// Reject empty images before touching the raster
fn check_dimensions(width: u32, height: u32) -> IoResult<()> {
    if width == 0 || height == 0 {
        return Err(lutimage_core::Error::InvalidDimension { width, height }.into());
    }
    Ok(())
}

/// Read a binary PBM (`P4`) image.
///
/// The result has the two reserved colors only: white pixels get
/// [`WHITE_LABEL`] and black pixels get [`BLACK_LABEL`].
///
/// # Errors
///
/// Returns [`IoError::InvalidData`] for a malformed header or truncated
/// raster, and [`IoError::Core`] for zero dimensions.
#[cfg(feature = "pbm")]
pub fn read_pbm<R: BufRead>(mut reader: R) -> IoResult<LabeledImage> {
    let (width, height) = {
        let mut header = HeaderReader::new(&mut reader);
        header.expect_magic(b"P4")?;
        let width = header.read_value("width")?;
        let height = header.read_value("height")?;
        (width, height)
    };
    check_dimensions(width, height)?;
    debug!("PBM header: {}x{}", width, height);

    let row_bytes = width.div_ceil(8) as usize;
    let mut packed = vec![0u8; row_bytes];
    let mut labels = Vec::new();

    for _ in 0..height {
        reader.read_exact(&mut packed).map_err(|e| match e.kind() {
            ErrorKind::UnexpectedEof => IoError::InvalidData("truncated PBM raster".to_string()),
            _ => IoError::Io(e),
        })?;
        for x in 0..width as usize {
            let bit = (packed[x / 8] >> (7 - (x % 8))) & 1;
            labels.push(if bit == 1 { BLACK_LABEL } else { WHITE_LABEL });
        }
    }

    Ok(LabeledImage::from_parts(width, height, labels, Lut::new())?)
}

/// Write an image as binary PBM (`P4`).
///
/// # Errors
///
/// Returns [`IoError::InvalidData`] if a pixel resolves to a color other
/// than white or black. The writer may already hold part of the output.
#[cfg(feature = "pbm")]
pub fn write_pbm<W: Write>(image: &LabeledImage, mut writer: W) -> IoResult<()> {
    let width = image.width() as usize;
    write!(writer, "P4\n{} {}\n", image.width(), image.height())?;

    let lut = image.lut();
    let row_bytes = width.div_ceil(8);
    let mut packed = vec![0u8; row_bytes];

    for (v, row) in image.rows().enumerate() {
        packed.fill(0);
        for (u, &label) in row.iter().enumerate() {
            match lut.get(label) {
                Some(Rgb::BLACK) => packed[u / 8] |= 0x80 >> (u % 8),
                Some(Rgb::WHITE) => {}
                other => {
                    return Err(IoError::InvalidData(format!(
                        "pixel ({u}, {v}) resolves to {} which PBM cannot store",
                        other.map_or_else(|| format!("label {label}"), |c| c.to_string())
                    )));
                }
            }
        }
        writer.write_all(&packed)?;
    }

    writer.flush()?;
    Ok(())
}

/// Read an ASCII PPM (`P3`) image.
///
/// Channel values are stored as found, without rescaling to 255. Colors
/// are added to the LUT in order of first appearance.
///
/// # Errors
///
/// Returns [`IoError::InvalidData`] for a malformed header, a maxval above
/// 255, or a channel above maxval, and [`IoError::Core`] when the image has
/// more distinct colors than the LUT holds.
#[cfg(feature = "ppm")]
pub fn read_ppm<R: BufRead>(mut reader: R) -> IoResult<LabeledImage> {
    let mut header = HeaderReader::new(&mut reader);
    header.expect_magic(b"P3")?;
    let width = header.read_value("width")?;
    let height = header.read_value("height")?;
    let maxval = header.read_value("maxval")?;
    if maxval > PPM_MAXVAL {
        return Err(IoError::InvalidData(format!(
            "maxval {maxval} exceeds {PPM_MAXVAL}"
        )));
    }
    check_dimensions(width, height)?;
    debug!("PPM header: {}x{} maxval {}", width, height, maxval);

    let mut lut = Lut::new();
    let mut labels: Vec<Label> = Vec::new();

    for _ in 0..(width as usize * height as usize) {
        let mut channel = [0u8; 3];
        for (c, name) in channel.iter_mut().zip(["red", "green", "blue"]) {
            let value = header.read_value(name)?;
            if value > maxval {
                return Err(IoError::InvalidData(format!(
                    "{name} value {value} exceeds maxval {maxval}"
                )));
            }
            *c = value as u8;
        }
        labels.push(lut.alloc(Rgb::from_channels(channel[0], channel[1], channel[2]))?);
    }

    Ok(LabeledImage::from_parts(width, height, labels, lut)?)
}

/// Write an image as ASCII PPM (`P3`) with maxval 255.
#[cfg(feature = "ppm")]
pub fn write_ppm<W: Write>(image: &LabeledImage, mut writer: W) -> IoResult<()> {
    write!(
        writer,
        "P3\n{} {}\n{}\n",
        image.width(),
        image.height(),
        PPM_MAXVAL
    )?;

    let lut = image.lut();
    for row in image.rows() {
        for &label in row {
            let (r, g, b) = lut.get(label).unwrap_or(Rgb::WHITE).channels();
            write!(writer, "  {:3} {:3} {:3}", r, g, b)?;
        }
        writeln!(writer)?;
    }

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    #[cfg(feature = "pbm")]
    fn test_pbm_roundtrip() {
        let img = LabeledImage::new_chess(11, 5, 3, Rgb::BLACK).unwrap();
        let mut buffer = Vec::new();
        write_pbm(&img, &mut buffer).unwrap();

        // 11 pixels per row pack into 2 bytes
        assert!(buffer.starts_with(b"P4\n11 5\n"));
        assert_eq!(buffer.len(), b"P4\n11 5\n".len() + 2 * 5);

        let img2 = read_pbm(Cursor::new(buffer)).unwrap();
        assert_eq!(img2.num_colors(), 2);
        assert!(img.is_equal(&img2));
    }

    #[test]
    #[cfg(feature = "pbm")]
    fn test_pbm_bit_layout() {
        let mut img = LabeledImage::new(9, 1).unwrap();
        img.set_label(0, 0, BLACK_LABEL);
        img.set_label(8, 0, BLACK_LABEL);
        let mut buffer = Vec::new();
        write_pbm(&img, &mut buffer).unwrap();
        assert_eq!(&buffer[b"P4\n9 1\n".len()..], &[0x80, 0x80]);
    }

    #[test]
    #[cfg(feature = "pbm")]
    fn test_pbm_comments() {
        let data = b"P4\n# a comment\n# another\n3 2\n\xa0\x40";
        let img = read_pbm(Cursor::new(&data[..])).unwrap();
        assert_eq!((img.width(), img.height()), (3, 2));
        assert_eq!(img.label(0, 0), BLACK_LABEL);
        assert_eq!(img.label(1, 0), WHITE_LABEL);
        assert_eq!(img.label(2, 0), BLACK_LABEL);
        assert_eq!(img.label(1, 1), BLACK_LABEL);
        assert_eq!(img.count_label(BLACK_LABEL), 3);
    }

    #[test]
    #[cfg(feature = "pbm")]
    fn test_pbm_rejects_colors() {
        let img = LabeledImage::new_chess(4, 4, 2, Rgb::from_channels(255, 0, 0)).unwrap();
        let result = write_pbm(&img, Vec::new());
        assert!(matches!(result, Err(IoError::InvalidData(_))));
    }

    #[test]
    #[cfg(feature = "pbm")]
    fn test_pbm_invalid_input() {
        assert!(matches!(
            read_pbm(Cursor::new(&b"P3\n1 1\n"[..])),
            Err(IoError::InvalidData(_))
        ));
        assert!(matches!(
            read_pbm(Cursor::new(&b"P4\n16 2\n\x00"[..])),
            Err(IoError::InvalidData(_))
        ));
        assert!(matches!(
            read_pbm(Cursor::new(&b"P4\nx 2\n"[..])),
            Err(IoError::InvalidData(_))
        ));
        assert!(matches!(
            read_pbm(Cursor::new(&b"P4\n0 2\n"[..])),
            Err(IoError::Core(_))
        ));
    }

    #[test]
    #[cfg(feature = "ppm")]
    fn test_ppm_write_format() {
        let mut img = LabeledImage::new(2, 1).unwrap();
        let red = img.alloc_color(Rgb::from_channels(255, 0, 0)).unwrap();
        img.set_label(1, 0, red);
        let mut buffer = Vec::new();
        write_ppm(&img, &mut buffer).unwrap();
        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "P3\n2 1\n255\n  255 255 255  255   0   0\n"
        );
    }

    #[test]
    #[cfg(feature = "ppm")]
    fn test_ppm_read_dedups_colors() {
        let data = b"P3\n# comment\n3 1\n15\n0 0 0  15 0 15  0 0 0\n";
        let img = read_ppm(Cursor::new(&data[..])).unwrap();
        assert_eq!(img.num_colors(), 3);
        assert_eq!(img.label(0, 0), BLACK_LABEL);
        assert_eq!(img.label(2, 0), BLACK_LABEL);
        assert_eq!(img.label(1, 0), 2);
        assert_eq!(img.color(1, 0), Rgb::from_channels(15, 0, 15));
    }

    #[test]
    #[cfg(feature = "ppm")]
    fn test_ppm_invalid_values() {
        assert!(matches!(
            read_ppm(Cursor::new(&b"P3\n1 1\n256\n0 0 0\n"[..])),
            Err(IoError::InvalidData(_))
        ));
        assert!(matches!(
            read_ppm(Cursor::new(&b"P3\n1 1\n15\n16 0 0\n"[..])),
            Err(IoError::InvalidData(_))
        ));
        assert!(matches!(
            read_ppm(Cursor::new(&b"P3\n2 1\n255\n0 0 0\n"[..])),
            Err(IoError::InvalidData(_))
        ));
    }
}
