//! Rotation and flip operations
//!
//! Pixel `(u, v)` is column `u`, row `v`. With `W x H` the source size:
//!
//! | operation        | result size | source `(u, v)` lands at  |
//! |------------------|-------------|---------------------------|
//! | `rotate_90_cw`   | `H x W`     | `(H - 1 - v, u)`          |
//! | `rotate_90` ccw  | `H x W`     | `(v, W - 1 - u)`          |
//! | `rotate_180`     | `W x H`     | `(W - 1 - u, H - 1 - v)`  |
//! | `flip_lr`        | `W x H`     | `(W - 1 - u, v)`          |
//! | `flip_tb`        | `W x H`     | `(u, H - 1 - v)`          |

use crate::{TransformError, TransformResult};
use lutimage_core::{LabeledImage, Label};

/// Rotate an image by 90-degree increments
///
/// # Arguments
/// * `image` - Input image
/// * `quads` - Number of 90-degree clockwise rotations (0-3)
///
/// # Errors
///
/// Returns [`TransformError::InvalidParameters`] if `quads > 3`.
pub fn rotate_orth(image: &LabeledImage, quads: u32) -> TransformResult<LabeledImage> {
    match quads {
        0 => Ok(image.clone()),
        1 => rotate_90(image, true),
        2 => rotate_180(image),
        3 => rotate_90(image, false),
        _ => Err(TransformError::InvalidParameters(format!(
            "quads must be in 0..=3, got {quads}"
        ))),
    }
}

/// Rotate an image 90 degrees clockwise
///
/// The result is `height x width`.
pub fn rotate_90_cw(image: &LabeledImage) -> TransformResult<LabeledImage> {
    rotate_90(image, true)
}

/// Rotate an image 90 degrees
///
/// # Arguments
/// * `image` - Input image
/// * `clockwise` - If true, rotate clockwise; otherwise counterclockwise
pub fn rotate_90(image: &LabeledImage, clockwise: bool) -> TransformResult<LabeledImage> {
    let w = image.width() as usize;
    let h = image.height() as usize;

    // Output dimensions are swapped: the new width is the old height
    let mut labels: Vec<Label> = vec![0; w * h];
    for (v, row) in image.rows().enumerate() {
        for (u, &label) in row.iter().enumerate() {
            let (nu, nv) = if clockwise {
                (h - 1 - v, u)
            } else {
                (v, w - 1 - u)
            };
            labels[nv * h + nu] = label;
        }
    }

    Ok(LabeledImage::from_parts(
        image.height(),
        image.width(),
        labels,
        image.lut().clone(),
    )?)
}

/// Rotate an image 180 degrees
pub fn rotate_180(image: &LabeledImage) -> TransformResult<LabeledImage> {
    // A half turn reverses the row-major order
    let labels: Vec<Label> = image.labels().iter().rev().copied().collect();
    Ok(LabeledImage::from_parts(
        image.width(),
        image.height(),
        labels,
        image.lut().clone(),
    )?)
}

/// Flip an image left-right (horizontal mirror)
pub fn flip_lr(image: &LabeledImage) -> TransformResult<LabeledImage> {
    let labels: Vec<Label> = image
        .rows()
        .flat_map(|row| row.iter().rev().copied())
        .collect();
    Ok(LabeledImage::from_parts(
        image.width(),
        image.height(),
        labels,
        image.lut().clone(),
    )?)
}

/// Flip an image top-bottom (vertical mirror)
pub fn flip_tb(image: &LabeledImage) -> TransformResult<LabeledImage> {
    let rows: Vec<&[Label]> = image.rows().collect();
    let labels: Vec<Label> = rows.iter().rev().flat_map(|row| row.iter().copied()).collect();
    Ok(LabeledImage::from_parts(
        image.width(),
        image.height(),
        labels,
        image.lut().clone(),
    )?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lutimage_core::{BLACK_LABEL, Rgb, WHITE_LABEL};

    /// 3x2 image with a single black pixel at `(u, v)`
    fn marker(u: i32, v: i32) -> LabeledImage {
        let mut img = LabeledImage::new(3, 2).unwrap();
        img.set_label(u, v, BLACK_LABEL);
        img
    }

    #[test]
    fn test_rotate_90_cw_mapping() {
        let img = marker(0, 0);
        let r = rotate_90_cw(&img).unwrap();
        assert_eq!((r.width(), r.height()), (2, 3));
        // (u, v) -> (height - 1 - v, u)
        assert_eq!(r.label(1, 0), BLACK_LABEL);
        assert_eq!(r.count_label(BLACK_LABEL), 1);

        let r = rotate_90_cw(&marker(2, 1)).unwrap();
        assert_eq!(r.label(0, 2), BLACK_LABEL);
    }

    #[test]
    fn test_rotate_90_ccw_mapping() {
        let r = rotate_90(&marker(0, 0), false).unwrap();
        assert_eq!((r.width(), r.height()), (2, 3));
        // (u, v) -> (v, width - 1 - u)
        assert_eq!(r.label(0, 2), BLACK_LABEL);
    }

    #[test]
    fn test_rotate_180_mapping() {
        let r = rotate_180(&marker(0, 1)).unwrap();
        assert_eq!((r.width(), r.height()), (3, 2));
        assert_eq!(r.label(2, 0), BLACK_LABEL);
        assert_eq!(r.label(0, 1), WHITE_LABEL);
    }

    #[test]
    fn test_flips() {
        let img = marker(0, 1);
        assert_eq!(flip_lr(&img).unwrap().label(2, 1), BLACK_LABEL);
        assert_eq!(flip_tb(&img).unwrap().label(0, 0), BLACK_LABEL);
    }

    #[test]
    fn test_rotation_keeps_lut() {
        let red = Rgb::from_channels(255, 0, 0);
        let img = LabeledImage::new_chess(5, 3, 2, red).unwrap();
        let r = rotate_90_cw(&img).unwrap();
        assert_eq!(r.lut().colors(), img.lut().colors());
        assert_eq!(r.color(2, 0), red);
    }

    #[test]
    fn test_rotate_orth_invalid() {
        let img = marker(0, 0);
        assert!(matches!(
            rotate_orth(&img, 4),
            Err(TransformError::InvalidParameters(_))
        ));
    }
}
