//! Game session - owns the grid and runs one frame at a time
//!
//! Each call to [`GameSession::step`] performs, in order:
//!
//! 1. scroll the world and clear the dynamic band
//! 2. start a jump if requested and grounded
//! 3. add score, refresh the HUD line and difficulty
//! 4. count down or stamp and move the obstacle
//! 5. advance jump physics
//! 6. test the hitbox against the freshly stamped obstacle
//! 7. draw the player
//!
//! The obstacle is stamped before the hitbox test so a collision always
//! reflects this frame's obstacle position, and the player is drawn after it
//! so the player's own glyphs never count as a hit.

use std::fmt::Write as _;

use arrayvec::{ArrayString, ArrayVec};

use crate::collision::hits_obstacle;
use crate::difficulty::{difficulty_for_score, spawn_gap_range};
use crate::grid::Grid;
use crate::input::InputSource;
use crate::layout::{Dimensions, Layout};
use crate::obstacle::{ObstacleState, ObstacleStep};
use crate::player::{stamp_player, PlayerState};
use crate::rng::SimpleRng;
use crate::scroll::scroll_world;
use crate::types::{JumpPhase, GROUND_GLYPH, LEG_GLYPHS, SCORE_PER_FRAME};

/// Result of one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    Running,
    /// The player hit the obstacle; `score` is final.
    GameOver { score: u32 },
}

/// Notable things that happened during the last frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    JumpStarted,
    Landed,
    /// The spawn wait ended; the obstacle enters next frame.
    ObstacleSpawned,
    /// The obstacle left the screen; the next one waits `next_gap` frames.
    ObstacleCleared { next_gap: u32 },
    Collision,
}

/// Complete state of one run.
#[derive(Debug, Clone)]
pub struct GameSession {
    dims: Dimensions,
    layout: Layout,
    grid: Grid,
    player: PlayerState,
    obstacle: ObstacleState,
    rng: SimpleRng,
    score: u32,
    difficulty: u32,
    frame: u64,
    game_over: bool,
    events: ArrayVec<SessionEvent, 4>,
}

impl GameSession {
    /// Start a run on a grid of `dims`, seeding the RNG with `seed`.
    ///
    /// The first obstacle wait is drawn from the difficulty-0 gap range.
    pub fn new(dims: Dimensions, seed: u32) -> Self {
        let layout = Layout::new(dims);
        let rows = dims.rows() as usize;
        let cols = dims.cols() as usize;

        let mut grid = Grid::new(rows, cols);
        grid.fill_row(layout.ground_line, GROUND_GLYPH);

        let mut rng = SimpleRng::new(seed);
        let first_gap = rng.range_inclusive(spawn_gap_range(0));

        Self {
            dims,
            layout,
            grid,
            player: PlayerState::new(layout.ground_row, layout.player_col),
            obstacle: ObstacleState::new(first_gap, cols),
            rng,
            score: 0,
            difficulty: 0,
            frame: 0,
            game_over: false,
            events: ArrayVec::new(),
        }
    }

    /// Replace the first obstacle wait with a fixed number of frames.
    pub fn with_first_spawn_delay(mut self, frames: u32) -> Self {
        self.obstacle = ObstacleState::new(frames, self.dims.cols() as usize);
        self
    }

    pub fn dims(&self) -> Dimensions {
        self.dims
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    pub fn obstacle(&self) -> &ObstacleState {
        &self.obstacle
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn difficulty(&self) -> u32 {
        self.difficulty
    }

    /// Frames completed so far (including the collision frame)
    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn jump_phase(&self) -> JumpPhase {
        self.player.phase()
    }

    /// Events recorded during the most recent [`step`](Self::step).
    pub fn last_events(&self) -> &[SessionEvent] {
        &self.events
    }

    /// Poll `input` once and run one frame.
    pub fn poll_step(&mut self, input: &mut dyn InputSource) -> FrameOutcome {
        let jump_held = input.is_jump_held();
        self.step(jump_held)
    }

    /// Run one frame with the given jump signal.
    ///
    /// Once the session is over this does nothing and keeps returning
    /// [`FrameOutcome::GameOver`].
    pub fn step(&mut self, jump_held: bool) -> FrameOutcome {
        if self.game_over {
            return FrameOutcome::GameOver { score: self.score };
        }
        self.events.clear();

        scroll_world(
            &mut self.grid,
            self.layout.sky_row..=self.layout.ground_row,
            self.layout.ground_line,
        );

        if jump_held && self.player.request_jump() {
            self.record(SessionEvent::JumpStarted);
        }

        self.score = self.score.saturating_add(SCORE_PER_FRAME);
        self.write_hud();
        self.difficulty = difficulty_for_score(self.score, self.difficulty);

        match self.obstacle.advance(
            &mut self.grid,
            self.layout.ground_row,
            self.difficulty,
            &mut self.rng,
        ) {
            ObstacleStep::Spawned => self.record(SessionEvent::ObstacleSpawned),
            ObstacleStep::Finished { next_gap } => {
                self.record(SessionEvent::ObstacleCleared { next_gap })
            }
            ObstacleStep::Waiting | ObstacleStep::Drawn(_) => {}
        }

        if self.player.update() {
            self.record(SessionEvent::Landed);
        }

        self.frame += 1;

        if hits_obstacle(&self.grid, self.player.row(), self.player.col()) {
            self.game_over = true;
            self.record(SessionEvent::Collision);
            return FrameOutcome::GameOver { score: self.score };
        }

        let legs = LEG_GLYPHS[self.rng.next_range(LEG_GLYPHS.len() as u32) as usize];
        stamp_player(&mut self.grid, &self.player, legs);

        FrameOutcome::Running
    }

    // At most three events fit in one frame: a jump start or landing, an
    // obstacle event and a collision.
    fn record(&mut self, event: SessionEvent) {
        let pushed = self.events.try_push(event).is_ok();
        debug_assert!(pushed, "event list full");
    }

    // " SCORE: " plus at most ten digits fits in 32 bytes.
    fn write_hud(&mut self) {
        let mut text = ArrayString::<32>::new();
        let written = write!(text, " SCORE: {}", self.score).is_ok();
        debug_assert!(written, "HUD text overflow");
        self.grid.put_str(self.layout.hud_row, 0, &text);
    }
}
