//! The pixelation engine.
//!
//! Downsamples a source image to a coarse sample grid, reduces each
//! cell's colour, and re-rasterizes at display resolution as flat
//! blocks with an optional boundary overlay. Pure function of its
//! inputs; reentrant; never fails for any image of at least 1x1.

use image::{Rgb, RgbImage, RgbaImage};

use crate::types::{Colour, PixelateOptions};

use super::quantize::reduce_colour;

/// Output raster edge cap, either axis.
pub const MAX_OUTPUT_EDGE: u32 = 400;

/// Minimum on-screen block edge for the boundary overlay; below this
/// the lines would dominate the blocks, so they are suppressed.
const GRID_MIN_BLOCK_EDGE: f64 = 3.0;

/// Boundary overlay opacity (black over the block fill).
const GRID_LINE_OPACITY: f32 = 0.3;

/// Compute the sample grid for an image and block size.
///
/// Each dimension is `floor(image_edge / pixel_size)`, clamped to a
/// minimum of 1 so a block size larger than the image degenerates to
/// a single sample instead of a division by zero.
pub fn sample_dimensions(width: u32, height: u32, pixel_size: u32) -> (u32, u32) {
    ((width / pixel_size).max(1), (height / pixel_size).max(1))
}

/// Compute output raster dimensions for a sample grid.
///
/// The display scale is `min(400/sw, 400/sh, pixel_size)`: the output
/// never exceeds 400 on either axis and a block is never magnified
/// beyond its configured edge.
pub fn output_dimensions(sample_w: u32, sample_h: u32, pixel_size: u32) -> (u32, u32) {
    let scale = display_scale(sample_w, sample_h, pixel_size);
    let out_w = ((f64::from(sample_w) * scale).floor() as u32).max(1);
    let out_h = ((f64::from(sample_h) * scale).floor() as u32).max(1);
    (out_w, out_h)
}

fn display_scale(sample_w: u32, sample_h: u32, pixel_size: u32) -> f64 {
    let cap = f64::from(MAX_OUTPUT_EDGE);
    (cap / f64::from(sample_w))
        .min(cap / f64::from(sample_h))
        .min(f64::from(pixel_size))
}

/// Pixelate an image.
///
/// The input is borrowed read-only; the returned raster is newly
/// allocated, fully opaque, and owned by the caller. Invalid option
/// values are clamped, not rejected, so this is total for any image
/// with both dimensions at least 1.
pub fn pixelate(image: &RgbaImage, options: &PixelateOptions) -> RgbImage {
    let pixel_size = options.clamped_pixel_size();
    let (sample_w, sample_h) = sample_dimensions(image.width(), image.height(), pixel_size);
    let (out_w, out_h) = output_dimensions(sample_w, sample_h, pixel_size);

    let samples = downsample(image, sample_w, sample_h);

    let block_w = f64::from(out_w) / f64::from(sample_w);
    let block_h = f64::from(out_h) / f64::from(sample_h);

    let mut output = RgbImage::new(out_w, out_h);

    // Flat-fill one block per sample cell. Block extents use
    // floor/ceil so neighbouring fills may overlap by one unit; the
    // later write wins and no sub-pixel gap can open up.
    let fill_w = block_w.ceil() as u32;
    let fill_h = block_h.ceil() as u32;
    for cy in 0..sample_h {
        for cx in 0..sample_w {
            let colour = reduce_colour(
                samples[cy as usize * sample_w as usize + cx as usize],
                options.color_mode,
            );
            let pixel = Rgb(colour.to_rgb());

            let x0 = (f64::from(cx) * block_w).floor() as u32;
            let y0 = (f64::from(cy) * block_h).floor() as u32;
            for py in y0..(y0 + fill_h).min(out_h) {
                for px in x0..(x0 + fill_w).min(out_w) {
                    output.put_pixel(px, py, pixel);
                }
            }
        }
    }

    if options.show_grid && block_w >= GRID_MIN_BLOCK_EDGE && block_h >= GRID_MIN_BLOCK_EDGE {
        overlay_grid(&mut output, sample_w, sample_h, block_w, block_h);
    }

    output
}

/// Box-average downsample to the sample grid, row-major.
///
/// Each cell averages every source pixel inside its extent (the cell
/// bounds map the full image onto the grid, so cells are at least
/// `pixel_size` across). Hard-edged: no interpolation between cells.
fn downsample(image: &RgbaImage, sample_w: u32, sample_h: u32) -> Vec<Colour> {
    let cell_w = f64::from(image.width()) / f64::from(sample_w);
    let cell_h = f64::from(image.height()) / f64::from(sample_h);

    let mut samples = Vec::with_capacity(sample_w as usize * sample_h as usize);

    for cy in 0..sample_h {
        for cx in 0..sample_w {
            let start_x = (f64::from(cx) * cell_w) as u32;
            let end_x = ((f64::from(cx) + 1.0) * cell_w) as u32;
            let start_y = (f64::from(cy) * cell_h) as u32;
            let end_y = ((f64::from(cy) + 1.0) * cell_h) as u32;

            let mut sum_r = 0u64;
            let mut sum_g = 0u64;
            let mut sum_b = 0u64;
            let mut count = 0u64;

            for py in start_y..end_y.min(image.height()) {
                for px in start_x..end_x.min(image.width()) {
                    let rgba = image.get_pixel(px, py).0;
                    sum_r += u64::from(rgba[0]);
                    sum_g += u64::from(rgba[1]);
                    sum_b += u64::from(rgba[2]);
                    count += 1;
                }
            }

            samples.push(if count > 0 {
                Colour::rgb(
                    (sum_r / count) as u8,
                    (sum_g / count) as u8,
                    (sum_b / count) as u8,
                )
            } else {
                Colour::BLACK
            });
        }
    }

    samples
}

/// Darken 1-px separator lines at every interior block boundary.
///
/// Equivalent to stroking 30%-opacity black at the 0.5-offset pixel
/// centre: the darkened column/row is `floor(boundary)`. Lines on
/// both axes; crossings darken twice, as overlapping strokes do.
fn overlay_grid(output: &mut RgbImage, sample_w: u32, sample_h: u32, block_w: f64, block_h: f64) {
    let (out_w, out_h) = output.dimensions();

    for gx in 1..sample_w {
        let lx = (f64::from(gx) * block_w).floor() as u32;
        if lx >= out_w {
            continue;
        }
        for py in 0..out_h {
            let pixel = output.get_pixel_mut(lx, py);
            *pixel = Rgb(pixel.0.map(darken));
        }
    }

    for gy in 1..sample_h {
        let ly = (f64::from(gy) * block_h).floor() as u32;
        if ly >= out_h {
            continue;
        }
        for px in 0..out_w {
            let pixel = output.get_pixel_mut(px, ly);
            *pixel = Rgb(pixel.0.map(darken));
        }
    }
}

fn darken(channel: u8) -> u8 {
    (f32::from(channel) * (1.0 - GRID_LINE_OPACITY)).round() as u8
}
