//! PNM I/O regression test
//!
//! Tests read/write of labeled images in PBM (P4) and PPM (P3) formats.
//!
//! # Test summary
//! - Part 1: Load the reference bitmaps and check their contents
//! - Part 2: Round trip a black/white chess board through PBM
//! - Part 3: Round trip a three-color chess board through PPM
//! - Part 4: Round trip the generated palette through PPM and PNG

use lutimage_core::{BLACK_LABEL, LabeledImage, Rgb, WHITE_LABEL};
use lutimage_io::{
    ImageFormat, IoError, read_image, read_image_mem, write_image, write_image_mem,
};
use lutimage_test::{RegParams, load_test_image, regout_dir};

#[test]
fn pnmio_reg() {
    let mut rp = RegParams::new("pnmio");

    // Part 1: reference files
    eprintln!("\n=== Part 1: Load reference files ===");
    let feep = load_test_image("feep.pbm").expect("load feep.pbm");
    rp.compare_values(24.0, feep.width() as f64, 0.0);
    rp.compare_values(7.0, feep.height() as f64, 0.0);
    rp.compare_values(2.0, feep.num_colors() as f64, 0.0);
    rp.compare_values(48.0, feep.count_label(BLACK_LABEL) as f64, 0.0);
    rp.compare_values(
        (24 * 7 - 48) as f64,
        feep.count_label(WHITE_LABEL) as f64,
        0.0,
    );

    let feep_rgb = load_test_image("feep.ppm").expect("load feep.ppm");
    rp.compare_values(4.0, feep_rgb.num_colors() as f64, 0.0);
    rp.compare_values(12.0, feep_rgb.count_label(BLACK_LABEL) as f64, 0.0);
    let magenta = Rgb::from_channels(15, 0, 15);
    rp.compare_values(
        magenta.packed() as f64,
        feep_rgb.color(3, 0).packed() as f64,
        0.0,
    );

    // Part 2: PBM round trip
    eprintln!("\n=== Part 2: PBM round trip ===");
    let chess = LabeledImage::new_chess(20, 20, 8, Rgb::BLACK).unwrap();
    let path = format!("{}/pnmio-chess.pbm", regout_dir());
    write_image(&chess, &path, ImageFormat::Pbm).expect("write pbm");
    let chess2 = read_image(&path).expect("read pbm");
    rp.compare_images(&chess, &chess2);
    rp.write_image_and_check(&chess, ImageFormat::Pbm)
        .expect("write_image_and_check pbm");

    // A colored image cannot be saved as a bitmap
    let colored = LabeledImage::new_chess(8, 8, 2, Rgb::from_channels(255, 0, 0)).unwrap();
    let result = write_image_mem(&colored, ImageFormat::Pbm);
    rp.compare_values(
        1.0,
        if matches!(result, Err(IoError::InvalidData(_))) {
            1.0
        } else {
            0.0
        },
        0.0,
    );

    // Part 3: PPM round trip of a three-color image
    eprintln!("\n=== Part 3: PPM round trip ===");
    let mut tri = LabeledImage::new_chess(20, 20, 8, Rgb::from_channels(255, 0, 0)).unwrap();
    let green = tri.alloc_color(Rgb::from_channels(0, 255, 0)).unwrap();
    for v in 0..4 {
        for u in 0..4 {
            tri.set_label(u + 8, v + 8, green);
        }
    }
    rp.compare_values(4.0, tri.num_colors() as f64, 0.0);
    let path = format!("{}/pnmio-tri.ppm", regout_dir());
    write_image(&tri, &path, ImageFormat::Ppm).expect("write ppm");
    let tri2 = read_image(&path).expect("read ppm");
    rp.compare_images(&tri, &tri2);
    rp.compare_values(tri.num_colors() as f64, tri2.num_colors() as f64, 0.0);
    rp.write_image_and_check(&tri, ImageFormat::Ppm)
        .expect("write_image_and_check ppm");

    // Part 4: palette
    eprintln!("\n=== Part 4: palette round trip ===");
    let palette = LabeledImage::new_palette(64, 48, 4).unwrap();
    let data = write_image_mem(&palette, ImageFormat::Ppm).expect("write palette ppm");
    let palette2 = read_image_mem(&data).expect("read palette ppm");
    rp.compare_images(&palette, &palette2);

    let data = write_image_mem(&palette, ImageFormat::Png).expect("write palette png");
    let palette3 = read_image_mem(&data).expect("read palette png");
    rp.compare_images(&palette, &palette3);

    assert!(rp.cleanup());
}
