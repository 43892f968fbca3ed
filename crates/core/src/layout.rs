//! Screen layout derived from the terminal size.
//!
//! ```text
//! row 0            ┐
//!                  │ static sky (scrolls, never cleared)
//! sky_row          ┤
//!                  │ dynamic band: cleared every frame, obstacles + player
//! ground_row       ┤ the player's feet and the obstacle base sit here
//! ground_line      ┤ ground pattern
//!                  │ ground fill
//! hud_row          ┘ score line
//! ```

use crate::error::ConfigError;
use crate::types::{MIN_COLS, MIN_ROWS};

/// Validated terminal dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dimensions {
    rows: u16,
    cols: u16,
}

impl Dimensions {
    /// Validate a terminal size.
    ///
    /// Sizes below `MIN_ROWS × MIN_COLS` are rejected before any game state is
    /// built.
    pub fn new(rows: u16, cols: u16) -> Result<Self, ConfigError> {
        if rows < MIN_ROWS || cols < MIN_COLS {
            return Err(ConfigError::TerminalTooSmall {
                rows,
                cols,
                min_rows: MIN_ROWS,
                min_cols: MIN_COLS,
            });
        }
        Ok(Self { rows, cols })
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    pub fn cols(&self) -> u16 {
        self.cols
    }
}

/// Fixed row/column landmarks for one session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Layout {
    /// First row of the band cleared every frame
    pub sky_row: usize,
    /// Row the player runs on; obstacles rest on it
    pub ground_row: usize,
    /// Row receiving the scrolling ground pattern
    pub ground_line: usize,
    /// Score line
    pub hud_row: usize,
    /// Player column, fixed for the run
    pub player_col: usize,
}

impl Layout {
    pub fn new(dims: Dimensions) -> Self {
        let rows = dims.rows() as usize;
        let cols = dims.cols() as usize;

        let sky_row = rows / 2 - rows / 9;
        let ground_rows = rows / 6;
        let ground_row = rows - ground_rows - 1;

        Self {
            sky_row,
            ground_row,
            ground_line: ground_row + 1,
            hud_row: rows - 1,
            player_col: cols / 5,
        }
    }
}
