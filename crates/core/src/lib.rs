//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the whole runner simulation: the character grid, the
//! world scroll, obstacle spawning and clipping, jump physics, collision and
//! difficulty. It has **no dependencies** on terminals, clocks or I/O:
//!
//! - **Deterministic**: the same seed and input script produce the same run
//! - **Testable**: every frame step can be driven from a scripted [`InputSource`]
//! - **Allocation-free per frame**: the grid is allocated once per session
//!
//! # Module Structure
//!
//! - [`grid`]: `rows × cols` character canvas
//! - [`layout`]: sky band, ground row and player column derived from the size
//! - [`scroll`]: one-column world shift and band clearing
//! - [`obstacle`]: obstacle pattern, clipping and spawn cycle
//! - [`player`]: jump state machine and player glyphs
//! - [`collision`]: the 5-point hitbox
//! - [`difficulty`]: score-driven spawn-gap reduction
//! - [`rng`]: small LCG used for gaps and leg animation
//! - [`session`]: per-frame orchestration of everything above
//!
//! # Example
//!
//! ```
//! use tui_runner_core::{Dimensions, FrameOutcome, GameSession};
//!
//! let dims = Dimensions::new(30, 70).unwrap();
//! let mut session = GameSession::new(dims, 7).with_first_spawn_delay(1_000);
//!
//! for _ in 0..10 {
//!     assert_eq!(session.step(false), FrameOutcome::Running);
//! }
//! assert_eq!(session.score(), 20);
//! ```

pub mod collision;
pub mod difficulty;
pub mod error;
pub mod grid;
pub mod input;
pub mod layout;
pub mod obstacle;
pub mod player;
pub mod rng;
pub mod scroll;
pub mod session;

pub use tui_runner_types as types;

// Re-export commonly used types for convenience
pub use collision::{hitbox, hits_obstacle};
pub use difficulty::{difficulty_for_score, spawn_gap_range};
pub use error::ConfigError;
pub use grid::Grid;
pub use input::{InputSource, ScriptedInput};
pub use layout::{Dimensions, Layout};
pub use obstacle::{clip_span, stamp_obstacle, ClipSpan, ObstacleState, ObstacleStep, OBSTACLE_PATTERN};
pub use player::{stamp_player, PlayerState};
pub use rng::SimpleRng;
pub use scroll::{scroll_world, shift_left};
pub use session::{FrameOutcome, GameSession, SessionEvent};
