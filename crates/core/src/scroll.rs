//! World scroll: moves everything one column toward the player per frame.

use std::ops::RangeInclusive;

use crate::grid::Grid;
use crate::types::{EMPTY_GLYPH, GROUND_GLYPH};

/// Shift every row one column left. The last column becomes blank.
pub fn shift_left(grid: &mut Grid) {
    if grid.cols() == 0 {
        return;
    }
    for row in 0..grid.rows() {
        let cells = grid.row_mut(row);
        cells.copy_within(1.., 0);
        if let Some(last) = cells.last_mut() {
            *last = EMPTY_GLYPH;
        }
    }
}

/// Advance the world by one column.
///
/// Shifts the grid, blanks the dynamic `band` (obstacles and player are
/// restamped afterwards) and extends the ground pattern at the right edge of
/// `ground_line`.
pub fn scroll_world(grid: &mut Grid, band: RangeInclusive<usize>, ground_line: usize) {
    shift_left(grid);

    for row in band {
        grid.fill_row(row, EMPTY_GLYPH);
    }

    let last = grid.cols().saturating_sub(1);
    grid.set(ground_line, last, GROUND_GLYPH);
}
