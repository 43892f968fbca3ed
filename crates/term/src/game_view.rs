//! GameView: maps the core character grid into a styled framebuffer.
//!
//! This module is pure (no I/O). The grid is copied cell for cell, anchored at
//! the terminal origin; only colors are added.

use crate::core::{Grid, Layout};
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{
    ARMS_AIRBORNE, ARMS_GROUNDED, BODY_GLYPH, GROUND_GLYPH, HEAD_GLYPH, LEG_GLYPHS, OBSTACLE_GLYPH,
};

/// Colors for each kind of glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub empty: CellStyle,
    pub obstacle: CellStyle,
    pub ground: CellStyle,
    pub player: CellStyle,
    pub hud: CellStyle,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            empty: CellStyle::default(),
            obstacle: CellStyle::fg(Rgb::new(220, 80, 80)),
            ground: CellStyle::fg(Rgb::new(140, 110, 70)),
            player: CellStyle::fg(Rgb::new(240, 220, 80)).bold(),
            hud: CellStyle::fg(Rgb::new(255, 255, 255)).bold(),
        }
    }
}

/// Terminal view of a running session.
#[derive(Debug, Clone)]
pub struct GameView {
    ground_line: usize,
    hud_row: usize,
    palette: Palette,
}

impl GameView {
    pub fn new(layout: &Layout) -> Self {
        Self {
            ground_line: layout.ground_line,
            hud_row: layout.hud_row,
            palette: Palette::default(),
        }
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Render `grid` into an existing framebuffer, resizing it to match.
    ///
    /// This is the allocation-free hot path once the framebuffer has its size.
    pub fn render_into(&self, grid: &Grid, fb: &mut FrameBuffer) {
        fb.reshape(grid.rows(), grid.cols());

        for row in 0..grid.rows() {
            for (cell, &ch) in fb.row_mut(row).iter_mut().zip(grid.row(row)) {
                *cell = Cell {
                    ch,
                    style: self.style_for(row, ch),
                };
            }
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, grid: &Grid) -> FrameBuffer {
        let mut fb = FrameBuffer::new(grid.rows(), grid.cols());
        self.render_into(grid, &mut fb);
        fb
    }

    fn style_for(&self, row: usize, ch: char) -> CellStyle {
        if row == self.hud_row {
            return self.palette.hud;
        }
        if row >= self.ground_line && ch == GROUND_GLYPH {
            return self.palette.ground;
        }
        if ch == OBSTACLE_GLYPH {
            return self.palette.obstacle;
        }
        if is_player_glyph(ch) {
            return self.palette.player;
        }
        self.palette.empty
    }
}

fn is_player_glyph(ch: char) -> bool {
    ch == HEAD_GLYPH
        || ch == BODY_GLYPH
        || LEG_GLYPHS.contains(&ch)
        || ch == ARMS_AIRBORNE.0
        || ch == ARMS_AIRBORNE.1
        || ch == ARMS_GROUNDED.0
        || ch == ARMS_GROUNDED.1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Dimensions, GameSession};

    #[test]
    fn grid_glyphs_are_copied_verbatim() {
        let mut session = GameSession::new(Dimensions::new(30, 70).unwrap(), 3)
            .with_first_spawn_delay(1_000);
        session.step(false);

        let view = GameView::new(session.layout());
        let fb = view.render(session.grid());

        assert_eq!((fb.rows(), fb.cols()), (30, 70));
        for row in 0..30 {
            assert_eq!(fb.row_text(row), session.grid().row_string(row));
        }
    }

    #[test]
    fn glyphs_get_their_palette_entry() {
        let mut session = GameSession::new(Dimensions::new(30, 70).unwrap(), 3)
            .with_first_spawn_delay(1_000);
        session.step(false);
        let palette = Palette::default();
        let fb = GameView::new(session.layout()).render(session.grid());

        assert_eq!(fb.get(22, 14).unwrap().style, palette.player);
        assert_eq!(fb.get(25, 0).unwrap().style, palette.ground);
        assert_eq!(fb.get(29, 1).unwrap().style, palette.hud);
        assert_eq!(fb.get(5, 40).unwrap().style, palette.empty);
    }

    #[test]
    fn obstacle_above_ground_uses_obstacle_color() {
        let mut grid = Grid::new(30, 70);
        grid.set(20, 30, '#');
        grid.set(25, 30, '#');
        let layout = Layout::new(Dimensions::new(30, 70).unwrap());
        let palette = Palette::default();
        let fb = GameView::new(&layout).render(&grid);

        assert_eq!(fb.get(20, 30).unwrap().style, palette.obstacle);
        assert_eq!(fb.get(25, 30).unwrap().style, palette.ground);
    }
}
