//! Pixelate command implementation.
//!
//! Decodes input images, runs the engine, and writes PNG output.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;
use walkdir::WalkDir;

use crate::config::Config;
use crate::error::{PxlError, Result};
use crate::output::{display_path, plural, Printer};
use crate::render::{decode_image, pixelate, write_png};
use crate::types::{ColorMode, PixelateOptions};

/// Pixelate images into block-quantized PNG output
#[derive(Args, Debug)]
pub struct PixelateArgs {
    /// Image files or directories to process
    #[arg(required = true)]
    pub inputs: Vec<PathBuf>,

    /// Pixel block edge in source pixels (2-32, clamped)
    #[arg(long)]
    pub pixel_size: Option<u32>,

    /// Colour-depth reduction mode
    #[arg(long, value_enum)]
    pub colors: Option<ColorMode>,

    /// Overlay block boundaries on the output
    #[arg(long)]
    pub show_grid: bool,

    /// Output directory
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Config file (default: pxl.yaml in the working directory)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// Raster extensions picked up when walking a directory.
const RASTER_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "bmp"];

pub fn run(args: PixelateArgs, printer: &Printer) -> Result<()> {
    let config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::discover()?,
    };

    let options = resolve_options(&args, &config);
    let output_dir = args
        .output
        .clone()
        .unwrap_or_else(|| config.effective_output());

    if !output_dir.exists() {
        fs::create_dir_all(&output_dir).map_err(|e| PxlError::Io {
            path: output_dir.clone(),
            message: format!("Failed to create output directory: {}", e),
        })?;
    }

    let mut processed = 0;
    for input in &args.inputs {
        if input.is_dir() {
            for file in collect_rasters(input) {
                // Directory scans are best-effort: a stray undecodable
                // file is reported and skipped.
                match process_image(&file, &output_dir, &options, printer) {
                    Ok(()) => processed += 1,
                    Err(PxlError::Decode { path, message }) => {
                        printer.warning("Skipping", &format!("{}: {}", display_path(&path), message));
                    }
                    Err(e) => return Err(e),
                }
            }
        } else {
            // Explicitly named files fail loudly.
            process_image(input, &output_dir, &options, printer)?;
            processed += 1;
        }
    }

    printer.status(
        "Finished",
        &format!(
            "{} -> {}",
            plural(processed, "image", "images"),
            display_path(&output_dir)
        ),
    );

    Ok(())
}

/// CLI flags override config values, which override builtin defaults.
fn resolve_options(args: &PixelateArgs, config: &Config) -> PixelateOptions {
    let mut options = config.options();

    if let Some(pixel_size) = args.pixel_size {
        options.pixel_size = pixel_size;
    }
    if let Some(colors) = args.colors {
        options.color_mode = colors;
    }
    if args.show_grid {
        options.show_grid = true;
    }

    options
}

/// Recursively collect raster files under a directory, sorted for
/// deterministic processing order.
fn collect_rasters(root: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(root)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().is_file())
        .filter(|e| {
            e.path()
                .extension()
                .and_then(|ext| ext.to_str())
                .map(|ext| RASTER_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
                .unwrap_or(false)
        })
        .map(|e| e.path().to_path_buf())
        .collect();

    files.sort();
    files
}

fn process_image(
    path: &Path,
    output_dir: &Path,
    options: &PixelateOptions,
    printer: &Printer,
) -> Result<()> {
    let image = decode_image(path)?;
    let raster = pixelate(&image, options);

    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");
    let output_path = output_dir.join(format!("{}.pxl.png", stem));

    write_png(&raster, &output_path)?;

    printer.status(
        "Pixelating",
        &format!(
            "{} ({}px, {}) -> {}",
            display_path(path),
            options.clamped_pixel_size(),
            options.color_mode.name(),
            display_path(&output_path)
        ),
    );

    Ok(())
}
