//! Prints what a configured interpolator needs from a tiled pipeline.
//!
//! Usage: kernel_report <config.yaml> [ratio ...] [--log-dir DIR]

use std::path::PathBuf;

use anyhow::{Context, bail};
use resample::kernel::ProlateKernel;
use resample::{
    InterpolateImageFunction, InterpolatorConfig, Region, calculate_needed_radius_for_interpolator,
    pad_region_for_interpolator,
};
use tracing::info;

const DEFAULT_RATIOS: [f64; 4] = [0.5, 1.0, 2.0, 4.0];
const TILE_SIZE: usize = 256;
const IMAGE_SIZE: usize = 4096;

struct Args {
    config: PathBuf,
    ratios: Vec<f64>,
    log_dir: Option<PathBuf>,
}

fn parse_args() -> anyhow::Result<Args> {
    let mut config = None;
    let mut ratios = Vec::new();
    let mut log_dir = None;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--log-dir" {
            let dir = args.next().context("--log-dir needs a directory")?;
            log_dir = Some(PathBuf::from(dir));
        } else if config.is_none() {
            config = Some(PathBuf::from(arg));
        } else {
            let ratio: f64 = arg
                .parse()
                .with_context(|| format!("Invalid resample ratio '{}'", arg))?;
            ratios.push(ratio);
        }
    }

    let Some(config) = config else {
        bail!("Usage: kernel_report <config.yaml> [ratio ...] [--log-dir DIR]");
    };
    if ratios.is_empty() {
        ratios.extend(DEFAULT_RATIOS);
    }
    Ok(Args {
        config,
        ratios,
        log_dir,
    })
}

fn main() -> anyhow::Result<()> {
    let args = parse_args()?;
    match &args.log_dir {
        Some(dir) => common::log_setup::setup_logging("info", dir, "kernel_report"),
        None => common::log_setup::setup_console_logging("info"),
    }

    let config = InterpolatorConfig::from_yaml_file(&args.config)
        .with_context(|| format!("Failed to load {}", args.config.display()))?;
    let mut interpolator = config.build::<2>()?;
    interpolator.initialize();

    let halo = calculate_needed_radius_for_interpolator(&interpolator);
    info!(kind = %config.kind, name = interpolator.name(), halo, "Interpolator ready");

    let image = Region::from_size([IMAGE_SIZE; 2]);
    let origin = (IMAGE_SIZE / 2) as i64;
    for start in [[0, 0], [origin, origin]] {
        let tile = Region::new(start, [TILE_SIZE; 2]);
        match pad_region_for_interpolator(&tile, &interpolator, &image) {
            Some(padded) => println!(
                "tile {:?}+{:?} -> input {:?}+{:?}",
                tile.start, tile.size, padded.start, padded.size
            ),
            None => println!("tile {:?}+{:?} -> outside image", tile.start, tile.size),
        }
    }

    let prolate = ProlateKernel::new(config.radius);
    for ratio in &args.ratios {
        let energy = prolate.compute_energy(*ratio)?;
        println!(
            "prolate radius {} ratio {:.3}: out-of-band energy {:.6}",
            config.radius, ratio, energy
        );
    }

    Ok(())
}
