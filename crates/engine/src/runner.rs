//! The fixed-cadence game loop.
//!
//! One iteration:
//!
//! 1. hand the current grid to the [`Display`]
//! 2. poll the [`InputSource`] once
//! 3. step the session
//! 4. wait for the next frame
//!
//! The loop ends on collision, or when the input reports a quit request.

use anyhow::Result;
use log::{debug, info};

use crate::core::{FrameOutcome, GameSession, Grid, InputSource, SessionEvent};
use crate::pacer::FramePacer;

/// Presentation collaborator: receives the full grid once per frame.
pub trait Display {
    fn present(&mut self, grid: &Grid) -> Result<()>;
}

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// The player hit an obstacle
    GameOver { score: u32 },
    /// The player quit before colliding
    Aborted { score: u32 },
}

impl RunOutcome {
    pub fn score(&self) -> u32 {
        match *self {
            RunOutcome::GameOver { score } | RunOutcome::Aborted { score } => score,
        }
    }
}

/// Drives a session with a given input, display and pacing.
pub struct Runner<I, D> {
    input: I,
    display: D,
    pacer: FramePacer,
}

impl<I: InputSource, D: Display> Runner<I, D> {
    pub fn new(input: I, display: D, pacer: FramePacer) -> Self {
        Self {
            input,
            display,
            pacer,
        }
    }

    pub fn input(&self) -> &I {
        &self.input
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    /// Give back the collaborators (e.g. to restore the terminal).
    pub fn into_parts(self) -> (I, D) {
        (self.input, self.display)
    }

    /// Run `session` until it ends.
    pub fn run(&mut self, session: &mut GameSession) -> Result<RunOutcome> {
        let dims = session.dims();
        info!(
            "session start: {}x{} grid, frame delay {:?}",
            dims.rows(),
            dims.cols(),
            self.pacer.delay()
        );

        loop {
            self.display.present(session.grid())?;

            let jump_held = self.input.is_jump_held();
            if self.input.quit_requested() {
                info!(
                    "player quit after {} frames, score {}",
                    session.frame(),
                    session.score()
                );
                return Ok(RunOutcome::Aborted {
                    score: session.score(),
                });
            }

            let outcome = session.step(jump_held);
            log_events(session);

            if let FrameOutcome::GameOver { score } = outcome {
                info!("game over after {} frames, score {}", session.frame(), score);
                return Ok(RunOutcome::GameOver { score });
            }

            self.pacer.wait();
        }
    }
}

fn log_events(session: &GameSession) {
    for event in session.last_events() {
        match event {
            SessionEvent::ObstacleSpawned => {
                debug!("frame {}: obstacle spawned", session.frame())
            }
            SessionEvent::ObstacleCleared { next_gap } => debug!(
                "frame {}: obstacle cleared, next in {} frames (difficulty {})",
                session.frame(),
                next_gap,
                session.difficulty()
            ),
            SessionEvent::JumpStarted => debug!("frame {}: jump", session.frame()),
            SessionEvent::Landed | SessionEvent::Collision => {}
        }
    }
}
