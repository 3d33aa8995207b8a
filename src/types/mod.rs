//! Core types for pxl.

mod colour;
mod options;
mod palette;

pub use colour::Colour;
pub use options::{
    ColorMode, PixelateOptions, PIXEL_SIZE_DEFAULT, PIXEL_SIZE_MAX, PIXEL_SIZE_MIN,
};
pub use palette::{FixedPalette, BUILTIN_PALETTES, EGA16, MONO, RGB8};
