//! Terminal rendering for the runner.
//!
//! The core draws into a plain character grid. This crate turns that grid
//! into colored terminal output:
//!
//! - [`fb`]: styled framebuffer
//! - [`game_view`]: grid → framebuffer, pure and unit-testable
//! - [`renderer`]: framebuffer → terminal via crossterm, diffing between frames
//! - [`display`]: the engine-facing [`Display`](tui_runner_engine::Display)

pub mod display;
pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_runner_core as core;
pub use tui_runner_engine as engine;
pub use tui_runner_types as types;

pub use display::{terminal_size, TerminalDisplay};
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Palette};
pub use renderer::{changed_spans, encode_diff_into, encode_full_into, Span, TerminalRenderer};
