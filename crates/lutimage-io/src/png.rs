//! PNG image format support
//!
//! Images whose LUT fits in 256 entries are written as 8-bit indexed PNG
//! with the LUT as palette, so labels survive a round trip. Larger LUTs are
//! written as 8-bit RGB. Reading normalizes every PNG to 8-bit color and
//! rebuilds a LUT from the distinct colors found.

use crate::{IoError, IoResult};
use log::debug;
use lutimage_core::{LabeledImage, Label, Lut, Rgb};
use png::{BitDepth, ColorType, Decoder, Encoder, Transformations};
use std::io::{BufRead, Seek, Write};

/// Largest LUT that can be stored as a PNG palette
const MAX_PALETTE_LEN: usize = 256;

/// Read a PNG image
///
/// Alpha is ignored. Gray samples become gray colors.
///
/// # Errors
///
/// Returns [`IoError::DecodeError`] if the PNG cannot be decoded and
/// [`IoError::Core`] if it has more distinct colors than the LUT holds.
pub fn read_png<R: BufRead + Seek>(reader: R) -> IoResult<LabeledImage> {
    let mut decoder = Decoder::new(reader);
    decoder.set_transformations(Transformations::EXPAND | Transformations::STRIP_16);
    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::DecodeError(format!("PNG decode error: {}", e)))?;

    let (width, height) = {
        let info = reader.info();
        (info.width, info.height)
    };
    let (color_type, bit_depth) = reader.output_color_type();
    if bit_depth != BitDepth::Eight {
        return Err(IoError::UnsupportedFormat(format!(
            "unsupported PNG bit depth after expansion: {:?}",
            bit_depth
        )));
    }
    let samples = match color_type {
        ColorType::Grayscale => 1,
        ColorType::GrayscaleAlpha => 2,
        ColorType::Rgb => 3,
        ColorType::Rgba => 4,
        ColorType::Indexed => {
            return Err(IoError::UnsupportedFormat(
                "indexed PNG was not expanded".to_string(),
            ));
        }
    };
    debug!("PNG header: {}x{} {:?}", width, height, color_type);

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("failed to get output buffer size".to_string()))?;
    let mut buf = vec![0; buf_size];
    let output_info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::DecodeError(format!("PNG frame error: {}", e)))?;

    let bytes_per_row = output_info.line_size;
    let data = &buf[..output_info.buffer_size()];

    let mut lut = Lut::new();
    let mut labels: Vec<Label> = Vec::with_capacity(width as usize * height as usize);
    for row in data.chunks_exact(bytes_per_row).take(height as usize) {
        for px in row.chunks_exact(samples).take(width as usize) {
            let color = if samples >= 3 {
                Rgb::from_channels(px[0], px[1], px[2])
            } else {
                Rgb::from_channels(px[0], px[0], px[0])
            };
            labels.push(lut.alloc(color)?);
        }
    }

    Ok(LabeledImage::from_parts(width, height, labels, lut)?)
}

/// Write a PNG image
///
/// # Errors
///
/// Returns [`IoError::EncodeError`] if the encoder fails.
pub fn write_png<W: Write>(image: &LabeledImage, writer: W) -> IoResult<()> {
    let width = image.width();
    let height = image.height();
    let lut = image.lut();

    let indexed = lut.len() <= MAX_PALETTE_LEN;
    let mut encoder = Encoder::new(writer, width, height);
    encoder.set_depth(BitDepth::Eight);

    let data: Vec<u8> = if indexed {
        encoder.set_color(ColorType::Indexed);
        let palette: Vec<u8> = lut
            .colors()
            .iter()
            .flat_map(|c| {
                let (r, g, b) = c.channels();
                [r, g, b]
            })
            .collect();
        encoder.set_palette(palette);
        image.labels().iter().map(|&label| label as u8).collect()
    } else {
        encoder.set_color(ColorType::Rgb);
        image
            .colors()
            .flat_map(|c| {
                let (r, g, b) = c.channels();
                [r, g, b]
            })
            .collect()
    };
    debug!(
        "PNG encode: {}x{} {}",
        width,
        height,
        if indexed { "indexed" } else { "rgb" }
    );

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(format!("PNG header error: {}", e)))?;
    writer
        .write_image_data(&data)
        .map_err(|e| IoError::EncodeError(format!("PNG write error: {}", e)))?;
    writer
        .finish()
        .map_err(|e| IoError::EncodeError(format!("PNG finish error: {}", e)))?;

    Ok(())
}
