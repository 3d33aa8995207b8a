//! Image decode/encode at the engine boundary.
//!
//! Decoding raw bytes into a sampleable image is the only fallible
//! boundary around the engine; a decode failure surfaces as its own
//! error so callers can tell it apart from plain I/O trouble.

use std::path::Path;

use image::{RgbImage, RgbaImage};

use crate::error::{PxlError, Result};

/// Decode an image file into an RGBA buffer ready for sampling.
pub fn decode_image(path: &Path) -> Result<RgbaImage> {
    let bytes = std::fs::read(path).map_err(|e| PxlError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to read image: {}", e),
    })?;

    decode_bytes(&bytes, path)
}

/// Decode encoded image bytes (PNG, JPEG, GIF, BMP, ...).
pub fn decode_bytes(bytes: &[u8], origin: &Path) -> Result<RgbaImage> {
    image::load_from_memory(bytes)
        .map(|img| img.to_rgba8())
        .map_err(|e| PxlError::Decode {
            path: origin.to_path_buf(),
            message: e.to_string(),
        })
}

/// Write an output raster to a PNG file.
pub fn write_png(raster: &RgbImage, path: &Path) -> Result<()> {
    raster.save(path).map_err(|e| PxlError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write PNG: {}", e),
    })?;

    Ok(())
}
