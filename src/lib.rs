//! pxl - Image pixelation and text-grid drawing
//!
//! A library for converting raster images into block-quantized
//! ("pixelated") PNG output with optional colour-depth reduction, and
//! for freehand drawing on a character grid that serializes to plain
//! text.

pub mod cli;
pub mod config;
pub mod error;
pub mod grid;
pub mod output;
pub mod render;
pub mod types;

pub use config::Config;
pub use error::{PxlError, Result};
pub use grid::CharGrid;
pub use render::{decode_bytes, decode_image, pixelate, reduce_colour, write_png, MAX_OUTPUT_EDGE};
pub use types::{
    ColorMode, Colour, FixedPalette, PixelateOptions, BUILTIN_PALETTES, EGA16, MONO, RGB8,
};
