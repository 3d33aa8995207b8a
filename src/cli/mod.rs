pub mod completions;
pub mod grid;
pub mod palettes;
pub mod pixelate;

use clap::{Parser, Subcommand};

/// pxl - Image pixelation and text-grid drawing
#[derive(Parser, Debug)]
#[command(name = "pxl")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Pixelate images into block-quantized PNG output
    Pixelate(pixelate::PixelateArgs),

    /// Draw a character grid and export it as plain text
    Grid(grid::GridArgs),

    /// List the builtin quantization palettes
    Palettes(palettes::PalettesArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}
