//! TerminalRenderer: puts a [`FrameBuffer`] on the real terminal.
//!
//! The first frame (and any frame after a shape change) is written in full.
//! After that only the spans of cells that differ from the previous frame are
//! rewritten.
//!
//! Commands are queued into one byte buffer and written with a single flush.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};

/// Horizontal run of changed cells on one row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub row: usize,
    pub col: usize,
    pub len: usize,
}

pub struct TerminalRenderer {
    stdout: io::Stdout,
    shown: Option<FrameBuffer>,
    buf: Vec<u8>,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            shown: None,
            buf: Vec::with_capacity(16 * 1024),
        }
    }

    /// Raw mode, alternate screen, hidden cursor.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush()
    }

    /// Undo everything [`enter`](Self::enter) changed.
    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Make the next draw a full redraw.
    pub fn invalidate(&mut self) {
        self.shown = None;
    }

    pub fn draw(&mut self, fb: &FrameBuffer) -> Result<()> {
        self.buf.clear();
        match self.shown.as_ref().filter(|shown| shown.same_shape(fb)) {
            Some(shown) => encode_diff_into(shown, fb, &mut self.buf)?,
            None => encode_full_into(fb, &mut self.buf)?,
        }
        self.flush()?;

        match &mut self.shown {
            Some(shown) => shown.clone_from(fb),
            None => self.shown = Some(fb.clone()),
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

/// Queue a clear-and-redraw of the whole of `fb` into `out`.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    let mut pen = None;
    for row in 0..fb.rows() {
        move_to(out, row, 0)?;
        write_cells(out, fb.row(row), &mut pen)?;
    }
    reset(out)
}

/// Queue only the cells of `next` that differ from `prev`.
///
/// Both buffers must have the same shape.
pub fn encode_diff_into(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let mut pen = None;
    for span in changed_spans(prev, next) {
        move_to(out, span.row, span.col)?;
        write_cells(out, &next.row(span.row)[span.col..span.col + span.len], &mut pen)?;
    }
    reset(out)
}

/// Spans of horizontally adjacent cells where `next` differs from `prev`.
pub fn changed_spans(prev: &FrameBuffer, next: &FrameBuffer) -> Vec<Span> {
    let mut spans = Vec::new();

    for row in 0..next.rows() {
        let (old, new) = (prev.row(row), next.row(row));
        if old == new {
            continue;
        }

        let mut start = None;
        for (col, (a, b)) in old.iter().zip(new).enumerate() {
            match (a != b, start) {
                (true, None) => start = Some(col),
                (false, Some(s)) => {
                    spans.push(Span { row, col: s, len: col - s });
                    start = None;
                }
                _ => {}
            }
        }
        if let Some(s) = start {
            spans.push(Span { row, col: s, len: new.len() - s });
        }
    }
    spans
}

fn move_to(out: &mut Vec<u8>, row: usize, col: usize) -> Result<()> {
    out.queue(cursor::MoveTo(col as u16, row as u16))?;
    Ok(())
}

/// `pen` is the style the terminal is currently set to, if known.
fn write_cells(out: &mut Vec<u8>, cells: &[Cell], pen: &mut Option<CellStyle>) -> Result<()> {
    for cell in cells {
        if *pen != Some(cell.style) {
            set_style(out, cell.style)?;
            *pen = Some(cell.style);
        }
        out.queue(Print(cell.ch))?;
    }
    Ok(())
}

fn set_style(out: &mut Vec<u8>, style: CellStyle) -> Result<()> {
    out.queue(SetAttribute(Attribute::Reset))?;
    out.queue(SetForegroundColor(color(style.fg)))?;
    out.queue(SetBackgroundColor(color(style.bg)))?;
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    Ok(())
}

fn reset(out: &mut Vec<u8>) -> Result<()> {
    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

fn color(rgb: Option<Rgb>) -> Color {
    match rgb {
        Some(Rgb { r, g, b }) => Color::Rgb { r, g, b },
        None => Color::Reset,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn glyph(ch: char) -> Cell {
        Cell {
            ch,
            style: CellStyle::default(),
        }
    }

    #[test]
    fn adjacent_changes_form_one_span() {
        let a = FrameBuffer::new(2, 6);
        let mut b = a.clone();
        for col in 1..=3 {
            b.set(0, col, glyph('#'));
        }
        b.set(1, 5, glyph('#'));

        assert_eq!(
            changed_spans(&a, &b),
            vec![
                Span { row: 0, col: 1, len: 3 },
                Span { row: 1, col: 5, len: 1 },
            ]
        );
    }

    #[test]
    fn unchanged_frame_has_no_spans() {
        let a = FrameBuffer::new(4, 4);
        assert!(changed_spans(&a, &a.clone()).is_empty());
    }

    #[test]
    fn restyled_blank_counts_as_change() {
        let a = FrameBuffer::new(1, 3);
        let mut b = a.clone();
        b.set(0, 2, Cell {
            ch: ' ',
            style: CellStyle::default().bold(),
        });
        assert_eq!(changed_spans(&a, &b), vec![Span { row: 0, col: 2, len: 1 }]);
    }

    #[test]
    fn full_redraw_prints_every_glyph() {
        let mut fb = FrameBuffer::new(2, 2);
        fb.set(0, 0, glyph('A'));
        fb.set(0, 1, glyph('B'));
        fb.set(1, 0, glyph('C'));
        fb.set(1, 1, glyph('D'));

        let mut out = Vec::new();
        encode_full_into(&fb, &mut out).unwrap();
        let text = String::from_utf8_lossy(&out);
        for ch in ['A', 'B', 'C', 'D'] {
            assert!(text.contains(ch));
        }
    }

    #[test]
    fn diff_only_prints_changed_glyphs() {
        let mut a = FrameBuffer::new(1, 4);
        a.set(0, 0, glyph('X'));
        let mut b = a.clone();
        b.set(0, 3, glyph('Y'));

        let mut out = Vec::new();
        encode_diff_into(&a, &b, &mut out).unwrap();
        let text = String::from_utf8_lossy(&out);
        assert!(text.contains('Y'));
        assert!(!text.contains('X'));
    }
}
