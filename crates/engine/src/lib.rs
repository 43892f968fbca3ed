//! Frame driver - runs a [`GameSession`](tui_runner_core::GameSession) at a fixed cadence
//!
//! The core knows nothing about time or terminals. This crate supplies the
//! loop around it:
//!
//! - [`runner`]: present → poll → step → wait, until collision or quit
//! - [`pacer`]: fixed frame delay with optional delta-time compensation
//! - [`config`]: environment-driven settings
//!
//! # Environment Variables
//!
//! - `RUNNER_FRAME_MS`: frame delay in milliseconds (default: 10)
//! - `RUNNER_SEED`: RNG seed (default: derived from the clock)
//! - `RUNNER_FIRST_SPAWN`: frames before the first obstacle (default: random)
//! - `RUNNER_FRAME_COMPENSATE`: `1`/`true` subtracts frame work from the delay
//! - `RUNNER_LOG_PATH`: write logs to this file (default: logging off)

pub mod config;
pub mod pacer;
pub mod runner;

pub use tui_runner_core as core;
pub use tui_runner_types as types;

pub use config::RunnerConfig;
pub use pacer::FramePacer;
pub use runner::{Display, RunOutcome, Runner};
