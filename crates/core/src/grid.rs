//! Grid module - the character canvas every frame is drawn into
//!
//! Cells are stored in a flat row-major `Vec<char>` allocated once per session.
//! Coordinates are `(row, col)` with row 0 at the top of the terminal.

use crate::types::EMPTY_GLYPH;

/// A `rows × cols` grid of printable characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<char>,
}

impl Grid {
    /// Create a blank grid
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![EMPTY_GLYPH; rows * cols],
        }
    }

    /// Build a grid from text lines, padding short lines with blanks.
    ///
    /// The width is the length of the longest line.
    pub fn from_lines(lines: &[&str]) -> Self {
        let cols = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
        let mut grid = Self::new(lines.len(), cols);
        for (row, line) in lines.iter().enumerate() {
            grid.put_str(row, 0, line);
        }
        grid
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline(always)]
    fn index(&self, row: usize, col: usize) -> Option<usize> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(row * self.cols + col)
    }

    /// Get the glyph at `(row, col)`, or `None` when out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<char> {
        self.index(row, col).map(|i| self.cells[i])
    }

    /// Set the glyph at `(row, col)`.
    ///
    /// Writes outside the grid are dropped. Callers clip before stamping, so a
    /// miss here means a clipping bug and trips the debug assertion.
    pub fn set(&mut self, row: usize, col: usize, ch: char) {
        debug_assert!(
            row < self.rows && col < self.cols,
            "write outside grid at ({row}, {col})"
        );
        if let Some(i) = self.index(row, col) {
            self.cells[i] = ch;
        }
    }

    /// Check whether `(row, col)` holds `ch`
    pub fn is(&self, row: usize, col: usize, ch: char) -> bool {
        self.get(row, col) == Some(ch)
    }

    pub fn row(&self, row: usize) -> &[char] {
        let start = row * self.cols;
        &self.cells[start..start + self.cols]
    }

    pub fn row_mut(&mut self, row: usize) -> &mut [char] {
        let start = row * self.cols;
        &mut self.cells[start..start + self.cols]
    }

    /// Row contents as a `String` (handy for assertions and logging)
    pub fn row_string(&self, row: usize) -> String {
        self.row(row).iter().collect()
    }

    /// Write `s` starting at `(row, col)`, truncated at the right edge
    pub fn put_str(&mut self, row: usize, col: usize, s: &str) {
        if row >= self.rows {
            return;
        }
        for (dx, ch) in s.chars().enumerate() {
            let x = col + dx;
            if x >= self.cols {
                break;
            }
            self.set(row, x, ch);
        }
    }

    /// Fill a whole row with `ch`
    pub fn fill_row(&mut self, row: usize, ch: char) {
        if row < self.rows {
            self.row_mut(row).fill(ch);
        }
    }

    /// Blank every cell
    pub fn clear(&mut self) {
        self.cells.fill(EMPTY_GLYPH);
    }

    pub fn cells(&self) -> &[char] {
        &self.cells
    }

    /// Count cells holding `ch`
    pub fn count(&self, ch: char) -> usize {
        self.cells.iter().filter(|&&c| c == ch).count()
    }
}
