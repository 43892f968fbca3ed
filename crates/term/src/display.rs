//! The terminal as the engine's [`Display`].

use anyhow::Result;

use crate::core::{Grid, Layout};
use crate::engine::Display;
use crate::fb::FrameBuffer;
use crate::game_view::GameView;
use crate::renderer::TerminalRenderer;

/// Renders each presented grid through [`GameView`] and flushes it.
pub struct TerminalDisplay {
    renderer: TerminalRenderer,
    view: GameView,
    fb: FrameBuffer,
}

impl TerminalDisplay {
    pub fn new(layout: &Layout) -> Self {
        Self {
            renderer: TerminalRenderer::new(),
            view: GameView::new(layout),
            fb: FrameBuffer::new(0, 0),
        }
    }

    /// Switch the terminal into game mode.
    pub fn enter(&mut self) -> Result<()> {
        self.renderer.invalidate();
        self.renderer.enter()
    }

    /// Restore the terminal.
    pub fn exit(&mut self) -> Result<()> {
        self.renderer.exit()
    }
}

impl Display for TerminalDisplay {
    fn present(&mut self, grid: &Grid) -> Result<()> {
        self.view.render_into(grid, &mut self.fb);
        self.renderer.draw(&self.fb)
    }
}

/// Current terminal size as `(rows, cols)`.
pub fn terminal_size() -> Result<(u16, u16)> {
    let (cols, rows) = crossterm::terminal::size()?;
    Ok((rows, cols))
}
