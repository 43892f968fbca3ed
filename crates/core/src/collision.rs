//! Collision detection against stamped obstacle glyphs.

use crate::grid::Grid;
use crate::types::OBSTACLE_GLYPH;

/// The five cells checked for a hit, relative to the player's feet.
///
/// Feet, body, both shoulders and head. The shoulders sit on the body row
/// regardless of jump state.
pub fn hitbox(row: usize, col: usize) -> [(usize, usize); 5] {
    [
        (row, col),
        (row - 1, col),
        (row - 1, col - 1),
        (row - 1, col + 1),
        (row - 2, col),
    ]
}

/// True if any hitbox cell holds an obstacle glyph.
///
/// Must run after this frame's obstacle has been stamped and before the
/// player is drawn over it.
pub fn hits_obstacle(grid: &Grid, row: usize, col: usize) -> bool {
    hitbox(row, col)
        .iter()
        .any(|&(r, c)| grid.is(r, c, OBSTACLE_GLYPH))
}
