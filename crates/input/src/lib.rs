//! Terminal input module.
//!
//! Maps `crossterm` key events to [`RunnerAction`](crate::types::RunnerAction)s
//! and turns them into the per-frame "jump held" signal the core polls. Most
//! terminals never report key releases, so a held key is emulated with a
//! timeout after the last press or auto-repeat.

pub mod keyboard;
pub mod map;

pub use tui_runner_core as core;
pub use tui_runner_types as types;

pub use keyboard::{HeldKey, KeyboardInput};
pub use map::{action_for_key, should_quit};
