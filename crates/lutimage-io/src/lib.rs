//! lutimage-io - Image I/O for labeled images
//!
//! Supported formats:
//!
//! - PBM (`P4`, binary) - black and white images
//! - PPM (`P3`, ASCII) - color images with up to 1000 distinct colors
//! - PNG (feature `png-format`) - indexed or RGB export and import
//!
//! # Example
//!
//! ```no_run
//! use lutimage_core::{LabeledImage, Rgb};
//! use lutimage_io::{ImageFormat, read_image, write_image};
//!
//! let img = LabeledImage::new_chess(20, 20, 8, Rgb::BLACK).unwrap();
//! write_image(&img, "chess.pbm", ImageFormat::Pbm).unwrap();
//! let loaded = read_image("chess.pbm").unwrap();
//! assert!(img.is_equal(&loaded));
//! ```

mod error;
pub mod format;
#[cfg(any(feature = "pbm", feature = "ppm"))]
pub mod pnm;
#[cfg(feature = "png-format")]
pub mod png;

pub use error::{IoError, IoResult};
pub use format::{ImageFormat, detect_format, detect_format_from_bytes};
#[cfg(feature = "pbm")]
pub use pnm::{read_pbm, write_pbm};
#[cfg(feature = "ppm")]
pub use pnm::{read_ppm, write_ppm};
#[cfg(feature = "png-format")]
pub use png::{read_png, write_png};

use lutimage_core::LabeledImage;
use std::fs::File;
use std::io::{BufReader, BufWriter, Cursor, Write};
use std::path::Path;

/// Read an image from a file, detecting the format from its contents
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<LabeledImage> {
    let path = path.as_ref();
    let format = detect_format(path)?;
    let file = File::open(path).map_err(IoError::Io)?;
    read_image_format(BufReader::new(file), format)
}

/// Read an image from memory, detecting the format from its contents
pub fn read_image_mem(data: &[u8]) -> IoResult<LabeledImage> {
    let format = detect_format_from_bytes(data)?;
    read_image_format(Cursor::new(data), format)
}

/// Read an image in a known format
fn read_image_format<R: std::io::BufRead + std::io::Seek>(
    reader: R,
    format: ImageFormat,
) -> IoResult<LabeledImage> {
    match format {
        #[cfg(feature = "pbm")]
        ImageFormat::Pbm => pnm::read_pbm(reader),
        #[cfg(feature = "ppm")]
        ImageFormat::Ppm => pnm::read_ppm(reader),
        #[cfg(feature = "png-format")]
        ImageFormat::Png => png::read_png(reader),
        #[allow(unreachable_patterns)]
        _ => Err(IoError::UnsupportedFormat(format!(
            "{:?} support is not enabled",
            format
        ))),
    }
}

/// Write an image to a file
///
/// On failure a partially written file may be left behind.
pub fn write_image<P: AsRef<Path>>(
    image: &LabeledImage,
    path: P,
    format: ImageFormat,
) -> IoResult<()> {
    let file = File::create(path.as_ref()).map_err(IoError::Io)?;
    let mut writer = BufWriter::new(file);
    write_image_format(image, &mut writer, format)?;
    writer.flush()?;
    Ok(())
}

/// Write an image to memory
pub fn write_image_mem(image: &LabeledImage, format: ImageFormat) -> IoResult<Vec<u8>> {
    let mut buffer = Vec::new();
    write_image_format(image, &mut buffer, format)?;
    Ok(buffer)
}

/// Write an image in the given format
fn write_image_format<W: Write>(
    image: &LabeledImage,
    writer: W,
    format: ImageFormat,
) -> IoResult<()> {
    match format {
        #[cfg(feature = "pbm")]
        ImageFormat::Pbm => pnm::write_pbm(image, writer),
        #[cfg(feature = "ppm")]
        ImageFormat::Ppm => pnm::write_ppm(image, writer),
        #[cfg(feature = "png-format")]
        ImageFormat::Png => png::write_png(image, writer),
        #[allow(unreachable_patterns)]
        _ => Err(IoError::UnsupportedFormat(format!(
            "{:?} support is not enabled",
            format
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lutimage_core::Rgb;

    #[test]
    fn test_mem_roundtrip_ppm() {
        let img = LabeledImage::new_chess(9, 9, 3, Rgb::from_channels(0, 128, 255)).unwrap();
        let data = write_image_mem(&img, ImageFormat::Ppm).unwrap();
        let img2 = read_image_mem(&data).unwrap();
        assert_eq!(img, img2);
    }

    #[test]
    fn test_mem_roundtrip_pbm() {
        let img = LabeledImage::new_chess(9, 9, 3, Rgb::BLACK).unwrap();
        let data = write_image_mem(&img, ImageFormat::Pbm).unwrap();
        let img2 = read_image_mem(&data).unwrap();
        assert_eq!(img, img2);
    }

    #[test]
    fn test_read_unknown() {
        assert!(matches!(
            read_image_mem(b"GIF89a......"),
            Err(IoError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_read_missing_file() {
        assert!(matches!(
            read_image("/nonexistent/dir/missing.pbm"),
            Err(IoError::Io(_))
        ));
    }
}
