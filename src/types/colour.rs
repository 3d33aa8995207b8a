//! Colour type and colour math for quantization.

use std::fmt;

/// An opaque RGB colour value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    /// Create a new colour from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// White.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// BT.601 luminance: round(0.299r + 0.587g + 0.114b).
    ///
    /// Rounded floating-point, not the scaled-integer shortcut: the
    /// grayscale mode promises bit-stable output under exactly these
    /// coefficients.
    pub fn luma(self) -> u8 {
        let y = 0.299 * f32::from(self.r) + 0.587 * f32::from(self.g) + 0.114 * f32::from(self.b);
        y.round() as u8
    }

    /// Squared Euclidean distance to another colour in RGB space.
    ///
    /// Squared is sufficient for nearest-neighbour comparisons and
    /// keeps the search in integer math.
    pub fn distance_sq(self, other: Colour) -> u32 {
        let dr = i32::from(self.r) - i32::from(other.r);
        let dg = i32::from(self.g) - i32::from(other.g);
        let db = i32::from(self.b) - i32::from(other.b);
        (dr * dr + dg * dg + db * db) as u32
    }

    /// Convert to an RGB triple (for image output).
    pub fn to_rgb(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_luma_endpoints() {
        assert_eq!(Colour::BLACK.luma(), 0);
        assert_eq!(Colour::WHITE.luma(), 255);
    }

    #[test]
    fn test_luma_weights() {
        // Pure channels expose the individual coefficients.
        assert_eq!(Colour::rgb(255, 0, 0).luma(), 76); // round(76.245)
        assert_eq!(Colour::rgb(0, 255, 0).luma(), 150); // round(149.685)
        assert_eq!(Colour::rgb(0, 0, 255).luma(), 29); // round(29.07)
    }

    #[test]
    fn test_distance_sq() {
        assert_eq!(Colour::BLACK.distance_sq(Colour::BLACK), 0);
        assert_eq!(Colour::BLACK.distance_sq(Colour::WHITE), 3 * 255 * 255);
        assert_eq!(
            Colour::rgb(10, 20, 30).distance_sq(Colour::rgb(13, 16, 30)),
            9 + 16
        );
    }

    #[test]
    fn test_distance_symmetric() {
        let a = Colour::rgb(200, 40, 90);
        let b = Colour::rgb(12, 250, 7);
        assert_eq!(a.distance_sq(b), b.distance_sq(a));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Colour::rgb(255, 0, 0)), "#FF0000");
        assert_eq!(format!("{}", Colour::rgb(0x1A, 0x1A, 0x2E)), "#1A1A2E");
    }
}
