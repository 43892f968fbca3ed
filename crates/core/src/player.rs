//! Player module - jump physics and the player's glyphs
//!
//! The player never moves horizontally. Vertically it follows a fixed arc:
//!
//! ```text
//! timer:  0 ........ 9 | 10 ...... 18 | 19 ....... 27 | 28
//! row:    -1 per frame | held         | +1 per frame  | snapped to ground
//! ```

use crate::grid::Grid;
use crate::types::{
    JumpPhase, ARMS_AIRBORNE, ARMS_GROUNDED, BODY_GLYPH, HEAD_GLYPH, JUMP_AIRTIME, JUMP_HEIGHT,
    JUMP_WIDTH,
};

/// Position and jump progress of the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlayerState {
    row: usize,
    col: usize,
    ground_row: usize,
    jumping: bool,
    jump_timer: u32,
}

impl PlayerState {
    /// Player standing on `ground_row` at column `col`.
    pub fn new(ground_row: usize, col: usize) -> Self {
        debug_assert!(ground_row >= JUMP_HEIGHT as usize + 2);
        Self {
            row: ground_row,
            col,
            ground_row,
            jumping: false,
            jump_timer: 0,
        }
    }

    /// Row of the player's feet
    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }

    pub fn ground_row(&self) -> usize {
        self.ground_row
    }

    pub fn jumping(&self) -> bool {
        self.jumping
    }

    /// Frames elapsed since the current jump started
    pub fn jump_timer(&self) -> u32 {
        self.jump_timer
    }

    /// Phase the next [`update`](Self::update) will apply.
    pub fn phase(&self) -> JumpPhase {
        JumpPhase::from_timer(self.jumping, self.jump_timer)
    }

    /// Start a jump if grounded. Returns `true` if a jump started.
    ///
    /// Requests while airborne are ignored.
    pub fn request_jump(&mut self) -> bool {
        if self.jumping {
            return false;
        }
        self.jumping = true;
        self.jump_timer = 0;
        true
    }

    /// Advance the jump by one frame. Returns `true` on the landing frame.
    pub fn update(&mut self) -> bool {
        if !self.jumping {
            return false;
        }

        if self.jump_timer < JUMP_HEIGHT {
            self.row -= 1;
        } else if self.jump_timer > JUMP_HEIGHT + JUMP_AIRTIME {
            self.row += 1;
        }

        self.jump_timer += 1;

        if self.jump_timer == JUMP_WIDTH {
            self.jumping = false;
            self.jump_timer = 0;
            self.row = self.ground_row;
            return true;
        }
        false
    }
}

/// Draw the player with its feet at `(player.row, player.col)`.
///
/// `legs` is the leg glyph for this frame; arms are raised while airborne and
/// lowered on the ground.
pub fn stamp_player(grid: &mut Grid, player: &PlayerState, legs: char) {
    let (row, col) = (player.row(), player.col());

    grid.set(row - 2, col, HEAD_GLYPH);
    grid.set(row - 1, col, BODY_GLYPH);
    grid.set(row, col, legs);

    if player.phase().is_airborne() {
        let (left, right) = ARMS_AIRBORNE;
        grid.set(row - 2, col - 1, left);
        grid.set(row - 2, col + 1, right);
    } else {
        let (left, right) = ARMS_GROUNDED;
        grid.set(row - 1, col - 1, left);
        grid.set(row - 1, col + 1, right);
    }
}
