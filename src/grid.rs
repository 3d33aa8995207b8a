//! Character drawing grid.
//!
//! A flat row-major arena of display characters, decoupled from any
//! rendering surface. Single-writer by design; there is no history
//! and no locking.

/// Width clamp range for [`CharGrid::resize`].
pub const WIDTH_RANGE: (u32, u32) = (10, 200);

/// Height clamp range for [`CharGrid::resize`].
pub const HEIGHT_RANGE: (u32, u32) = (5, 100);

/// Default grid dimensions.
pub const DEFAULT_WIDTH: u32 = 40;
pub const DEFAULT_HEIGHT: u32 = 20;

const BLANK: char = ' ';

/// A mutable 2D grid of single display characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharGrid {
    width: u32,
    height: u32,
    cells: Vec<char>,
}

impl CharGrid {
    /// Create a grid with the given dimensions, clamped to the
    /// documented ranges, with every cell blank.
    pub fn new(width: u32, height: u32) -> Self {
        let width = width.clamp(WIDTH_RANGE.0, WIDTH_RANGE.1);
        let height = height.clamp(HEIGHT_RANGE.0, HEIGHT_RANGE.1);
        Self {
            width,
            height,
            cells: vec![BLANK; (width * height) as usize],
        }
    }

    /// Get the width in cells.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the height in cells.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Resize the grid. Dimensions are clamped independently; all
    /// existing content is discarded and every cell reset to blank.
    pub fn resize(&mut self, width: u32, height: u32) {
        *self = Self::new(width, height);
    }

    /// Write a character at (x, y). Out-of-range coordinates are a
    /// no-op, not an error.
    pub fn set_cell(&mut self, x: u32, y: u32, ch: char) {
        if x < self.width && y < self.height {
            self.cells[(y * self.width + x) as usize] = ch;
        }
    }

    /// Read the character at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Option<char> {
        if x < self.width && y < self.height {
            Some(self.cells[(y * self.width + x) as usize])
        } else {
            None
        }
    }

    /// Reset every cell to blank without changing dimensions.
    pub fn clear(&mut self) {
        self.cells.fill(BLANK);
    }

    /// Serialize to plain text: `height` rows of exactly `width`
    /// characters, top to bottom, each row (including the last)
    /// terminated by a single newline. Suitable for byte-for-byte
    /// file export.
    pub fn serialize(&self) -> String {
        let mut out = String::with_capacity(((self.width + 1) * self.height) as usize);
        for row in self.cells.chunks(self.width as usize) {
            out.extend(row);
            out.push('\n');
        }
        out
    }
}

impl Default for CharGrid {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_dimensions() {
        let grid = CharGrid::default();
        assert_eq!(grid.width(), DEFAULT_WIDTH);
        assert_eq!(grid.height(), DEFAULT_HEIGHT);
    }

    #[test]
    fn test_new_clamps_dimensions() {
        let grid = CharGrid::new(1, 1);
        assert_eq!((grid.width(), grid.height()), (10, 5));

        let grid = CharGrid::new(10_000, 10_000);
        assert_eq!((grid.width(), grid.height()), (200, 100));

        // Axes clamp independently.
        let grid = CharGrid::new(3, 50);
        assert_eq!((grid.width(), grid.height()), (10, 50));
    }

    #[test]
    fn test_resize_shape_and_blankness() {
        let mut grid = CharGrid::default();
        grid.resize(15, 8);
        let text = grid.serialize();

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 8);
        for line in &lines {
            assert_eq!(line.len(), 15);
            assert!(line.chars().all(|c| c == ' '));
        }
        // One terminator per row, including the last.
        assert!(text.ends_with('\n'));
        assert_eq!(text.len(), (15 + 1) * 8);
    }

    #[test]
    fn test_resize_discards_content() {
        let mut grid = CharGrid::new(20, 10);
        grid.set_cell(3, 3, '#');
        grid.resize(20, 10);
        assert_eq!(grid.get(3, 3), Some(' '));
    }

    #[test]
    fn test_set_cell_round_trip() {
        let mut grid = CharGrid::new(15, 8);
        grid.set_cell(4, 2, '#');

        assert_eq!(grid.get(4, 2), Some('#'));

        let text = grid.serialize();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[2].chars().nth(4), Some('#'));
        // Everything else is still blank.
        assert_eq!(text.matches('#').count(), 1);
    }

    #[test]
    fn test_set_cell_out_of_range_is_noop() {
        let mut grid = CharGrid::new(15, 8);
        let before = grid.serialize();

        grid.set_cell(15, 0, '#');
        grid.set_cell(0, 8, '#');
        grid.set_cell(9999, 9999, '#');

        assert_eq!(grid.serialize(), before);
        assert_eq!(grid.get(15, 0), None);
    }

    #[test]
    fn test_clear_keeps_dimensions() {
        let mut grid = CharGrid::new(12, 6);
        grid.set_cell(0, 0, 'x');
        grid.set_cell(11, 5, 'y');
        grid.clear();

        assert_eq!((grid.width(), grid.height()), (12, 6));
        assert_eq!(grid.get(0, 0), Some(' '));
        assert_eq!(grid.get(11, 5), Some(' '));
    }
}
