//! Image format detection
//!
//! Detects image formats by examining magic numbers in the file header, or
//! by file extension when writing.

use crate::{IoError, IoResult};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Image file formats understood by this crate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageFormat {
    /// Binary portable bitmap (`P4`), black and white only
    Pbm,
    /// ASCII portable pixmap (`P3`)
    Ppm,
    /// PNG (requires the `png-format` feature)
    Png,
}

impl ImageFormat {
    /// Get the file extension for this format.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Pbm => "pbm",
            Self::Ppm => "ppm",
            Self::Png => "png",
        }
    }

    /// Guess the format from a file extension (case-insensitive).
    pub fn from_path<P: AsRef<Path>>(path: P) -> Option<Self> {
        let ext = path.as_ref().extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "pbm" => Some(Self::Pbm),
            "ppm" => Some(Self::Ppm),
            "png" => Some(Self::Png),
            _ => None,
        }
    }
}

/// Magic numbers for image format detection
mod magic {
    /// PNG: 89 50 4E 47 0D 0A 1A 0A
    pub const PNG: &[u8] = &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

    /// PNM formats
    pub const PBM_BINARY: &[u8] = b"P4";
    pub const PPM_ASCII: &[u8] = b"P3";
}

/// Detect image format from a file path
pub fn detect_format<P: AsRef<Path>>(path: P) -> IoResult<ImageFormat> {
    let mut file = File::open(path).map_err(IoError::Io)?;
    let mut header = [0u8; 8];
    let bytes_read = file.read(&mut header).map_err(IoError::Io)?;
    detect_format_from_bytes(&header[..bytes_read])
}

/// Detect image format from bytes
pub fn detect_format_from_bytes(data: &[u8]) -> IoResult<ImageFormat> {
    if data.len() < 2 {
        return Err(IoError::InvalidData(
            "not enough data to detect format".to_string(),
        ));
    }

    if data.len() >= 8 && data.starts_with(magic::PNG) {
        return Ok(ImageFormat::Png);
    }

    match &data[..2] {
        m if m == magic::PBM_BINARY => Ok(ImageFormat::Pbm),
        m if m == magic::PPM_ASCII => Ok(ImageFormat::Ppm),
        [b'P', b'1' | b'2' | b'5' | b'6' | b'7'] => Err(IoError::UnsupportedFormat(format!(
            "PNM variant {} is not supported",
            String::from_utf8_lossy(&data[..2])
        ))),
        _ => Err(IoError::UnsupportedFormat(
            "unknown image format".to_string(),
        )),
    }
}
