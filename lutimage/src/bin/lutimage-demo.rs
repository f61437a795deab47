//! Demonstration of the lutimage operations.
//!
//! Creates, saves, loads, rotates, fills and segments a fixed set of images,
//! printing one numbered line per step and a diagnostic for every failed
//! check. Output files are written to `$LUTIMAGE_OUT_DIR` (default: the
//! current directory). The log level comes from `RUST_LOG` (default `info`).

use flexi_logger::Logger;
use log::{error, info};
use lutimage::io::{ImageFormat, IoError, read_image, read_image_mem, write_image};
use lutimage::region::{FillMethod, FillStrategy, RegionError, segment};
use lutimage::transform::{TransformError, rotate_90_cw, rotate_180};
use lutimage::{BACKGROUND, BLACK_LABEL, LabeledImage, Rgb};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use thiserror::Error;

const FEEP_PBM: &[u8] = include_bytes!("../../../tests/data/images/feep.pbm");
const FEEP_PPM: &[u8] = include_bytes!("../../../tests/data/images/feep.ppm");

const RED: Rgb = Rgb::from_channels(0xff, 0, 0);

#[derive(Debug, Error)]
enum DemoError {
    #[error("image I/O failed: {0}")]
    Io(#[from] IoError),

    #[error("transform failed: {0}")]
    Transform(#[from] TransformError),

    #[error("segmentation failed: {0}")]
    Region(#[from] RegionError),

    #[error(transparent)]
    Core(#[from] lutimage::Error),
}

/// Print `message` when a check fails
fn check(condition: bool, message: &str) {
    if !condition {
        println!("{message}");
    }
}

struct Demo {
    out_dir: PathBuf,
}

impl Demo {
    fn path(&self, name: &str) -> PathBuf {
        self.out_dir.join(name)
    }

    fn save(&self, image: &LabeledImage, name: &str) -> Result<(), DemoError> {
        let path = self.path(name);
        let format = ImageFormat::from_path(&path).unwrap_or(ImageFormat::Ppm);
        write_image(image, &path, format)?;
        info!("saved {}", path.display());
        Ok(())
    }

    fn run(&self) -> Result<(), DemoError> {
        println!("1) LabeledImage::new");
        let white_image = LabeledImage::new(100, 100)?;
        check(white_image.count_label(BACKGROUND) == 100 * 100, "1) ERROR");

        println!("2) LabeledImage::new_chess(black) + save PBM");
        let chess_1 = LabeledImage::new_chess(150, 120, 30, Rgb::BLACK)?;
        self.save(&chess_1, "chess_image_1.pbm")?;

        println!("3) LabeledImage::new_chess(red) + save PPM");
        let chess_2 = LabeledImage::new_chess(20, 20, 8, RED)?;
        self.save(&chess_2, "chess_image_2.ppm")?;

        println!("4) LabeledImage::new_chess(all black)");
        let black_image = LabeledImage::new_chess(100, 100, 100, Rgb::BLACK)?;
        self.save(&black_image, "black_image.pbm")?;

        println!("5) clone");
        let copy_1 = chess_1.clone();
        self.save(&copy_1, "copy_image_1.pbm")?;
        let copy_2 = chess_2.clone();
        self.save(&copy_2, "copy_image_2.ppm")?;

        println!("6) load PBM");
        let feep_1 = read_image_mem(FEEP_PBM)?;
        check(feep_1.width() == 24 && feep_1.height() == 7, "6) ERROR");

        println!("7) load PPM");
        let feep_2 = read_image_mem(FEEP_PPM)?;
        check(feep_2.num_colors() == 4, "7) ERROR");

        println!("8) LabeledImage::new_palette");
        let palette = LabeledImage::new_palette(4 * 32, 4 * 32, 4)?;
        self.save(&palette, "palette.ppm")?;

        println!("8.5) load PPM");
        let loaded_palette = read_image(self.path("palette.ppm"))?;
        check(loaded_palette.is_equal(&palette), "8.5) ERROR");

        println!("9) rotate_90_cw");
        let palette_90 = rotate_90_cw(&palette)?;
        self.save(&palette_90, "palette_rotated90CW.ppm")?;

        println!("10) rotate_180");
        let palette_180 = rotate_180(&palette)?;
        self.save(&palette_180, "palette_rotated180CW.ppm")?;

        println!("11) rotate_90_cw twice");
        let palette_90_2 = rotate_90_cw(&palette_90)?;
        self.save(&palette_90_2, "palette_rotated90CW_2.ppm")?;

        for (step, method) in (13..).zip(FillMethod::ALL) {
            println!("{step}) {method} fill (chess_red)");
            let mut filled = chess_2.clone();
            let amount = method.fill(&mut filled, 10, 10, BACKGROUND);
            println!("{amount} pixels");
            if method == FillMethod::Queue {
                let amount = method.fill(&mut filled, 10, 10, BLACK_LABEL);
                println!("{amount} pixels");
            }
            self.save(
                &filled,
                &format!("chess_red_image_region_fill_{}.ppm", method.name()),
            )?;
        }

        println!("16) segment (chess_red)");
        for method in FillMethod::ALL {
            let mut segmented = chess_2.clone();
            let regions = segment(&mut segmented, &method)?;
            println!("{method}: {regions} regions");
            check(regions == 4, "16) ERROR");
            self.save(
                &segmented,
                &format!("chess_red_segmented_{}.ppm", method.name()),
            )?;
        }

        println!("101) Test is_equal");
        check(
            chess_1.is_equal(&copy_1),
            "101.1) chess_image_1, copy_image_1 are not equal",
        );
        check(
            chess_2.is_equal(&copy_2),
            "101.2) chess_image_2, copy_image_2 are not equal",
        );
        check(
            chess_1.is_equal(&chess_1),
            "101.3) chess_image_1, chess_image_1 are not equal",
        );
        check(
            palette_180.is_equal(&palette_90_2),
            "101.4) palette_rotated180CW, palette_rotated90CW_2 are not equal",
        );

        println!("102) Test is_different");
        check(
            chess_1.is_different(&black_image),
            "102.1) chess_image_1, black_image are not different",
        );

        Ok(())
    }
}

fn out_dir() -> PathBuf {
    std::env::var_os("LUTIMAGE_OUT_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|| Path::new(".").to_path_buf())
}

fn main() -> ExitCode {
    if std::env::args().len() != 1 {
        eprintln!("Usage: lutimage-demo");
        return ExitCode::FAILURE;
    }

    let _logger = match Logger::try_with_env_or_str("info").and_then(|l| l.log_to_stderr().start())
    {
        Ok(handle) => Some(handle),
        Err(e) => {
            eprintln!("logger initialization failed: {e}");
            None
        }
    };

    let demo = Demo { out_dir: out_dir() };
    info!("writing images to {}", demo.out_dir.display());
    match demo.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
