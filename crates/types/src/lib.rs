//! Core types module - shared constants and small data types
//!
//! Everything in here is plain data with no external dependencies, so it can be
//! used by the simulation core, the frame driver, the input layer and the
//! terminal view alike.
//!
//! # Frame Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FRAME_DELAY_MS` | 10 | Fixed delay between frames |
//! | `SCORE_PER_FRAME` | 2 | Score gained every frame survived |
//!
//! # Jump Arc
//!
//! A jump lasts [`JUMP_WIDTH`] frames: [`JUMP_HEIGHT`] frames climbing one row
//! per frame, a plateau, then the same number of rows back down.
//!
//! ```
//! use tui_runner_types::{JUMP_AIRTIME, JUMP_HEIGHT, JUMP_WIDTH};
//!
//! assert_eq!(JUMP_WIDTH, 2 * JUMP_HEIGHT + JUMP_AIRTIME);
//! assert_eq!(JUMP_WIDTH, 28);
//! ```
//!
//! # Obstacle Spawning
//!
//! The gap between two obstacles is drawn from
//! `[OBS_MIN_GAP, OBS_MAX_GAP - difficulty]` frames. Difficulty ramps linearly
//! until the score reaches [`GAME_MAX_DIFF_SCORE`].

/// Fixed delay between frames in milliseconds.
pub const FRAME_DELAY_MS: u64 = 10;

/// Smallest terminal height the game can run in.
pub const MIN_ROWS: u16 = 30;

/// Smallest terminal width the game can run in.
pub const MIN_COLS: u16 = 70;

/// Rows climbed during the ascending part of a jump.
pub const JUMP_HEIGHT: u32 = 10;

/// Frames spent at the top of a jump.
pub const JUMP_AIRTIME: u32 = 8;

/// Total frame count of one jump (ascend + airtime + descend).
pub const JUMP_WIDTH: u32 = 2 * JUMP_HEIGHT + JUMP_AIRTIME;

/// Obstacle height in rows.
pub const OBSTACLE_LENGTH: usize = 6;

/// Obstacle width in columns.
pub const OBSTACLE_WIDTH: usize = 11;

/// Half the obstacle width, measured from its center column.
pub const OBSTACLE_RADIUS: i32 = 5;

/// Multiplier between the shortest and the longest obstacle gap.
pub const GAME_LENGTH: u32 = 4;

/// Score at which difficulty stops increasing.
pub const GAME_MAX_DIFF_SCORE: u32 = 4000;

/// Shortest gap between two obstacles, in frames.
///
/// One full jump, so a grounded player can always clear back-to-back obstacles.
pub const OBS_MIN_GAP: u32 = JUMP_WIDTH;

/// Longest gap between two obstacles at difficulty 0, in frames.
pub const OBS_MAX_GAP: u32 = GAME_LENGTH * OBS_MIN_GAP;

/// Score gained per frame.
pub const SCORE_PER_FRAME: u32 = 2;

/// Empty cell.
pub const EMPTY_GLYPH: char = ' ';

/// Solid obstacle cell. The collision check looks for exactly this glyph.
pub const OBSTACLE_GLYPH: char = '#';

/// Ground pattern cell.
pub const GROUND_GLYPH: char = '#';

pub const HEAD_GLYPH: char = '0';
pub const BODY_GLYPH: char = '|';

/// The two leg glyphs alternate at random to suggest running.
pub const LEG_GLYPHS: [char; 2] = ['W', 'M'];

/// Left/right arm glyphs while airborne (raised, outward).
pub const ARMS_AIRBORNE: (char, char) = ('\\', '/');

/// Left/right arm glyphs while grounded (lowered, inward).
pub const ARMS_GROUNDED: (char, char) = ('/', '\\');


/// Sub-phase of the jump state machine.
///
/// - **Grounded**: running on the ground line, a jump may start
/// - **Ascending**: climbing one row per frame
/// - **Airtime**: holding at the top of the arc
/// - **Descending**: falling one row per frame back to the ground line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JumpPhase {
    Grounded,
    Ascending,
    Airtime,
    Descending,
}

impl JumpPhase {
    /// Classify a jump timer value.
    ///
    /// `timer` is the number of frames elapsed since the jump started, before
    /// this frame's update is applied.
    pub fn from_timer(jumping: bool, timer: u32) -> Self {
        if !jumping {
            JumpPhase::Grounded
        } else if timer < JUMP_HEIGHT {
            JumpPhase::Ascending
        } else if timer <= JUMP_HEIGHT + JUMP_AIRTIME {
            JumpPhase::Airtime
        } else {
            JumpPhase::Descending
        }
    }

    pub fn is_airborne(&self) -> bool {
        !matches!(self, JumpPhase::Grounded)
    }
}

/// Actions the player can request from the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunnerAction {
    /// Jump key is down
    Jump,
    /// Leave the game early
    Quit,
}
