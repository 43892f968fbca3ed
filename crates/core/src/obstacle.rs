//! Obstacle module - the single obstacle's spawn cycle and clipped stamping
//!
//! Only one obstacle exists at a time. It waits `timer` frames off-screen,
//! then slides in from the right edge one column per frame until its right
//! edge has passed column 0, at which point a new gap is drawn and it resets
//! off-screen.
//!
//! Horizontal position is the obstacle's center column `col`; the pattern
//! covers `col - radius ..= col + radius`. `col` is signed because the
//! obstacle keeps moving after its center has left the grid.

use crate::difficulty::spawn_gap_range;
use crate::grid::Grid;
use crate::rng::SimpleRng;
use crate::types::{OBSTACLE_GLYPH, OBSTACLE_LENGTH, OBSTACLE_RADIUS, OBSTACLE_WIDTH};

/// Pattern type: `OBSTACLE_LENGTH` rows, base row first.
///
/// Row 0 rests on the ground row; each later row is stamped one row higher.
pub type Pattern = [[char; OBSTACLE_WIDTH]; OBSTACLE_LENGTH];

/// The obstacle silhouette: a solid block.
pub const OBSTACLE_PATTERN: Pattern = [[OBSTACLE_GLYPH; OBSTACLE_WIDTH]; OBSTACLE_LENGTH];

/// Horizontal slice of the pattern that lands on the grid this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClipSpan {
    /// First grid column written
    pub grid_start: usize,
    /// First pattern column copied
    pub pattern_start: usize,
    /// Number of columns copied (0 when nothing is visible)
    pub len: usize,
}

impl ClipSpan {
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Grid columns covered by this span
    pub fn grid_columns(&self) -> std::ops::Range<usize> {
        self.grid_start..self.grid_start + self.len
    }
}

/// Work out which pattern columns are visible for an obstacle centered at
/// `col` on a grid `width` columns wide.
///
/// - **Entering** (right edge at or past the grid edge): the first
///   `width - (col - radius)` pattern columns, flush with the right edge.
/// - **Exiting** (left edge before column 0): the last `col + radius` pattern
///   columns, flush with the left edge.
/// - **Midway**: the whole pattern at `col - radius`.
pub fn clip_span(col: i32, radius: i32, width: usize) -> ClipSpan {
    let w = width as i32;
    let pattern_w = 2 * radius + 1;

    if col + radius >= w {
        let len = (w - (col - radius)).clamp(0, pattern_w);
        ClipSpan {
            grid_start: (w - len) as usize,
            pattern_start: 0,
            len: len as usize,
        }
    } else if col - radius < 0 {
        let len = (col + radius).clamp(0, pattern_w);
        ClipSpan {
            grid_start: 0,
            pattern_start: (pattern_w - len) as usize,
            len: len as usize,
        }
    } else {
        ClipSpan {
            grid_start: (col - radius) as usize,
            pattern_start: 0,
            len: pattern_w as usize,
        }
    }
}

/// Stamp the visible part of `pattern` so its row 0 sits on `ground_row`.
///
/// Returns the span that was written.
pub fn stamp_obstacle(
    grid: &mut Grid,
    pattern: &Pattern,
    col: i32,
    radius: i32,
    ground_row: usize,
) -> ClipSpan {
    let span = clip_span(col, radius, grid.cols());
    if span.is_empty() {
        return span;
    }

    for (i, pattern_row) in pattern.iter().enumerate() {
        let Some(row) = ground_row.checked_sub(i) else {
            break;
        };
        let src = &pattern_row[span.pattern_start..span.pattern_start + span.len];
        grid.row_mut(row)[span.grid_columns()].copy_from_slice(src);
    }
    span
}

/// What the obstacle did during one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObstacleStep {
    /// Still waiting off-screen
    Waiting,
    /// The wait just ended; the obstacle appears next frame
    Spawned,
    /// Drawn this frame and moved one column left
    Drawn(ClipSpan),
    /// Fully past the left edge; a new wait of `next_gap` frames begins
    Finished { next_gap: u32 },
}

/// Spawn timer and position of the one obstacle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObstacleState {
    timer: u32,
    col: i32,
    radius: i32,
    width: usize,
}

impl ObstacleState {
    /// Obstacle waiting `timer` frames, parked just past the right edge of a
    /// `width`-column grid.
    pub fn new(timer: u32, width: usize) -> Self {
        Self {
            timer,
            col: Self::spawn_col(width, OBSTACLE_RADIUS),
            radius: OBSTACLE_RADIUS,
            width,
        }
    }

    fn spawn_col(width: usize, radius: i32) -> i32 {
        width as i32 + radius
    }

    pub fn timer(&self) -> u32 {
        self.timer
    }

    pub fn col(&self) -> i32 {
        self.col
    }

    /// An obstacle is on its way across the screen
    pub fn is_active(&self) -> bool {
        self.timer == 0
    }

    /// Run one frame: count down, or stamp and move.
    pub fn advance(
        &mut self,
        grid: &mut Grid,
        ground_row: usize,
        difficulty: u32,
        rng: &mut SimpleRng,
    ) -> ObstacleStep {
        if self.timer > 0 {
            self.timer -= 1;
            return if self.timer == 0 {
                ObstacleStep::Spawned
            } else {
                ObstacleStep::Waiting
            };
        }

        let span = stamp_obstacle(grid, &OBSTACLE_PATTERN, self.col, self.radius, ground_row);

        if self.col + self.radius > 0 {
            self.col -= 1;
            return ObstacleStep::Drawn(span);
        }

        let next_gap = rng.range_inclusive(spawn_gap_range(difficulty));
        self.timer = next_gap;
        self.col = Self::spawn_col(self.width, self.radius);
        ObstacleStep::Finished { next_gap }
    }
}
