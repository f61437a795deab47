//! Background segmentation
//!
//! Partitions the background (label 0) pixels of an image into 4-connected
//! regions and gives each region its own freshly generated color.
//!
//! The image is scanned in row-major order. Each pixel still at the
//! background label starts a new region: the next color of the sequence
//! `BLACK.next(), BLACK.next().next(), ...` is allocated in the LUT and the
//! region is flood-filled with it. Pixels that were not background to begin
//! with are left alone and not counted.

use crate::error::RegionResult;
use crate::fill::FillStrategy;
use log::{debug, info, warn};
use lutimage_core::{BACKGROUND, LabeledImage, Label, PixelCoord, Rgb};

/// One background region found by [`segment_regions`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    /// Label the region was filled with
    pub label: Label,
    /// Color of that label
    pub color: Rgb,
    /// First pixel of the region in row-major order
    pub seed: PixelCoord,
    /// Number of pixels in the region
    pub pixel_count: usize,
}

/// Segment the background into regions, returning how many were found.
///
/// The result does not depend on the strategy.
///
/// # Errors
///
/// Returns [`RegionError::Core`](crate::RegionError::Core) with
/// `LutOverflow` when the LUT runs out of entries. Regions discovered before
/// the overflow keep their new labels.
pub fn segment<S: FillStrategy + ?Sized>(
    image: &mut LabeledImage,
    strategy: &S,
) -> RegionResult<usize> {
    segment_regions(image, strategy).map(|regions| regions.len())
}

/// Segment the background into regions, returning one record per region in
/// discovery order.
///
/// # Errors
///
/// Same as [`segment`].
pub fn segment_regions<S: FillStrategy + ?Sized>(
    image: &mut LabeledImage,
    strategy: &S,
) -> RegionResult<Vec<Region>> {
    let width = image.width() as i32;
    let height = image.height() as i32;
    let mut color = Rgb::BLACK;
    let mut regions = Vec::new();

    for v in 0..height {
        for u in 0..width {
            if image.label(u, v) != BACKGROUND {
                continue;
            }

            let (label, region_color) = next_region_label(image, color)?;
            color = region_color;
            let pixel_count = strategy.fill(image, u, v, label);
            debug!(
                "region {} at ({}, {}): {} pixels, label {} color {}",
                regions.len() + 1,
                u,
                v,
                pixel_count,
                label,
                color
            );
            regions.push(Region {
                label,
                color,
                seed: PixelCoord::new(u, v),
                pixel_count,
            });
        }
    }

    info!(
        "{}x{} image: {} background regions ({} fill)",
        width,
        height,
        regions.len(),
        strategy.name()
    );
    Ok(regions)
}

/// Advance the color sequence and allocate a label for the new color.
///
/// A color that resolves to the background label would leave the region
/// unfilled, so it is skipped.
fn next_region_label(image: &mut LabeledImage, previous: Rgb) -> RegionResult<(Label, Rgb)> {
    let mut color = previous.next();
    loop {
        let label = image.alloc_color(color)?;
        if label != BACKGROUND {
            return Ok((label, color));
        }
        warn!("generated color {} is the background color, skipping", color);
        color = color.next();
    }
}
