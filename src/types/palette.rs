//! Fixed quantization palettes.
//!
//! Each palette is an ordered list of colours; nearest-colour search
//! enumerates in order and keeps the first entry on a distance tie, so
//! quantization is deterministic for any input.

use super::Colour;

/// A fixed, ordered quantization palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedPalette {
    /// Palette name (stable identifier, used in CLI output).
    pub name: &'static str,

    /// Ordered palette entries.
    pub entries: &'static [Colour],
}

/// The standard 16-colour set (EGA ordering: dark colours first,
/// then silver/grey, then the bright colours).
pub const EGA16: FixedPalette = FixedPalette {
    name: "ega16",
    entries: &[
        Colour::rgb(0, 0, 0),
        Colour::rgb(128, 0, 0),
        Colour::rgb(0, 128, 0),
        Colour::rgb(128, 128, 0),
        Colour::rgb(0, 0, 128),
        Colour::rgb(128, 0, 128),
        Colour::rgb(0, 128, 128),
        Colour::rgb(192, 192, 192),
        Colour::rgb(128, 128, 128),
        Colour::rgb(255, 0, 0),
        Colour::rgb(0, 255, 0),
        Colour::rgb(255, 255, 0),
        Colour::rgb(0, 0, 255),
        Colour::rgb(255, 0, 255),
        Colour::rgb(0, 255, 255),
        Colour::rgb(255, 255, 255),
    ],
};

/// Black, the RGB primaries, the secondaries, and white.
pub const RGB8: FixedPalette = FixedPalette {
    name: "rgb8",
    entries: &[
        Colour::rgb(0, 0, 0),
        Colour::rgb(255, 0, 0),
        Colour::rgb(0, 255, 0),
        Colour::rgb(0, 0, 255),
        Colour::rgb(255, 255, 0),
        Colour::rgb(255, 0, 255),
        Colour::rgb(0, 255, 255),
        Colour::rgb(255, 255, 255),
    ],
};

/// 1-bit black and white.
pub const MONO: FixedPalette = FixedPalette {
    name: "mono",
    entries: &[Colour::BLACK, Colour::WHITE],
};

/// All builtin palettes, for listing.
pub const BUILTIN_PALETTES: &[FixedPalette] = &[EGA16, RGB8, MONO];

impl FixedPalette {
    /// Get the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the palette is empty (builtins never are).
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Find the nearest palette entry to a colour.
    ///
    /// Exhaustive search under squared Euclidean RGB distance; a tie
    /// keeps the first entry encountered in palette order.
    pub fn nearest(&self, colour: Colour) -> Colour {
        let mut best = self.entries[0];
        let mut best_dist = colour.distance_sq(best);

        for &entry in &self.entries[1..] {
            let dist = colour.distance_sq(entry);
            if dist < best_dist {
                best = entry;
                best_dist = dist;
            }
        }

        best
    }
}
