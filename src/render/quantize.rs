//! Per-cell colour reduction.

use crate::types::{ColorMode, Colour};

/// Reduce a colour according to the active mode.
///
/// `Full` is the identity; `Grayscale` replicates BT.601 luminance;
/// the palette modes snap to the nearest entry of their fixed palette
/// (first entry wins on a distance tie).
pub fn reduce_colour(colour: Colour, mode: ColorMode) -> Colour {
    match mode {
        ColorMode::Full => colour,
        ColorMode::Grayscale => {
            let y = colour.luma();
            Colour::rgb(y, y, y)
        }
        ColorMode::Sixteen | ColorMode::Eight | ColorMode::OneBit => {
            // palette() is Some for every palette-backed mode.
            match mode.palette() {
                Some(palette) => palette.nearest(colour),
                None => colour,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_full_is_identity() {
        for value in [0u8, 1, 127, 128, 254, 255] {
            let c = Colour::rgb(value, value.wrapping_mul(3), 255 - value);
            assert_eq!(reduce_colour(c, ColorMode::Full), c);
        }
    }

    #[test]
    fn test_grayscale_endpoints() {
        assert_eq!(reduce_colour(Colour::BLACK, ColorMode::Grayscale), Colour::BLACK);
        assert_eq!(reduce_colour(Colour::WHITE, ColorMode::Grayscale), Colour::WHITE);
    }

    #[test]
    fn test_grayscale_is_grey() {
        let reduced = reduce_colour(Colour::rgb(200, 30, 90), ColorMode::Grayscale);
        assert_eq!(reduced.r, reduced.g);
        assert_eq!(reduced.g, reduced.b);
    }

    #[test]
    fn test_one_bit_nearest() {
        assert_eq!(
            reduce_colour(Colour::rgb(10, 10, 10), ColorMode::OneBit),
            Colour::BLACK
        );
        assert_eq!(
            reduce_colour(Colour::rgb(240, 240, 240), ColorMode::OneBit),
            Colour::WHITE
        );
    }

    #[test]
    fn test_sixteen_snaps_to_palette() {
        let reduced = reduce_colour(Colour::rgb(130, 2, 3), ColorMode::Sixteen);
        assert_eq!(reduced, Colour::rgb(128, 0, 0)); // maroon
    }

    #[test]
    fn test_eight_snaps_to_palette() {
        let reduced = reduce_colour(Colour::rgb(240, 240, 10), ColorMode::Eight);
        assert_eq!(reduced, Colour::rgb(255, 255, 0)); // yellow
    }
}
