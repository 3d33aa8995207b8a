//! Engine options.
//!
//! Options are fail-soft: anything missing or out of range is
//! defaulted or clamped, never an error.

use clap::ValueEnum;

use super::palette::{FixedPalette, EGA16, MONO, RGB8};

/// Smallest accepted pixel block edge.
pub const PIXEL_SIZE_MIN: u32 = 2;

/// Largest accepted pixel block edge.
pub const PIXEL_SIZE_MAX: u32 = 32;

/// Default pixel block edge.
pub const PIXEL_SIZE_DEFAULT: u32 = 8;

/// Colour-depth reduction applied to each sample cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorMode {
    /// Keep the sampled colour unchanged.
    #[default]
    #[value(name = "full")]
    Full,

    /// Quantize to the 16-colour palette.
    #[value(name = "16")]
    Sixteen,

    /// Quantize to the 8-colour palette.
    #[value(name = "8")]
    Eight,

    /// BT.601 luminance, replicated across channels.
    #[value(name = "grayscale")]
    Grayscale,

    /// Quantize to black and white.
    #[value(name = "1bit")]
    OneBit,
}

impl ColorMode {
    /// Parse a mode name, falling back to `Full` on anything
    /// unrecognized (options never fail hard).
    pub fn parse_lenient(s: &str) -> Self {
        match s.trim() {
            "16" => Self::Sixteen,
            "8" => Self::Eight,
            "grayscale" => Self::Grayscale,
            "1bit" => Self::OneBit,
            _ => Self::Full,
        }
    }

    /// The fixed palette backing this mode, if it is palette-based.
    pub fn palette(self) -> Option<FixedPalette> {
        match self {
            Self::Sixteen => Some(EGA16),
            Self::Eight => Some(RGB8),
            Self::OneBit => Some(MONO),
            Self::Full | Self::Grayscale => None,
        }
    }

    /// Stable name, matching the CLI value.
    pub fn name(self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::Sixteen => "16",
            Self::Eight => "8",
            Self::Grayscale => "grayscale",
            Self::OneBit => "1bit",
        }
    }
}

/// Options for the pixelation engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelateOptions {
    /// Edge length (pre-scale) of each pixel block, clamped to
    /// [PIXEL_SIZE_MIN, PIXEL_SIZE_MAX] at use.
    pub pixel_size: u32,

    /// Colour-depth reduction mode.
    pub color_mode: ColorMode,

    /// Overlay block boundaries on the output.
    pub show_grid: bool,
}

impl Default for PixelateOptions {
    fn default() -> Self {
        Self {
            pixel_size: PIXEL_SIZE_DEFAULT,
            color_mode: ColorMode::Full,
            show_grid: false,
        }
    }
}

impl PixelateOptions {
    /// The pixel size with the documented range clamp applied.
    pub fn clamped_pixel_size(&self) -> u32 {
        self.pixel_size.clamp(PIXEL_SIZE_MIN, PIXEL_SIZE_MAX)
    }
}
