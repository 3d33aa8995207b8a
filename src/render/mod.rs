//! Rendering module for pxl.
//!
//! Holds the pixelation engine, the per-cell colour reduction it
//! applies, and the PNG boundary around it.

mod pixelate;
mod png;
mod quantize;

pub use pixelate::{output_dimensions, pixelate, sample_dimensions, MAX_OUTPUT_EDGE};
pub use png::{decode_bytes, decode_image, write_png};
pub use quantize::reduce_colour;
