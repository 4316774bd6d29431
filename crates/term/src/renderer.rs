//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! `enter` switches the terminal into raw mode on the alternate screen with
//! mouse capture enabled, so pointer releases reach the event mapper;
//! `exit` restores everything. Drawing diffs against the previously flushed
//! frame and only rewrites cells that changed.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    event::{DisableMouseCapture, EnableMouseCapture},
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{CellStyle, FrameBuffer, Rgb};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    last: Option<FrameBuffer>,
    buf: Vec<u8>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
            buf: Vec::with_capacity(16 * 1024),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(EnableMouseCapture)?;
        self.buf.queue(cursor::Hide)?;
        self.flush_buf()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(DisableMouseCapture)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Force the next draw to be a full redraw.
    ///
    /// Useful on terminal resize events.
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Draw a framebuffer, swapping it into internal state.
    ///
    /// Callers keep one `FrameBuffer` and pass it in every frame; the
    /// renderer diffs against the previous frame, flushes the changes, and
    /// swaps buffers so nothing is cloned.
    pub fn draw_swap(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        let mut prev = self.last.take().unwrap_or_else(|| FrameBuffer::new(0, 0));

        let full = prev.width() != fb.width() || prev.height() != fb.height();
        self.buf.clear();
        if full {
            self.buf.queue(terminal::Clear(terminal::ClearType::All))?;
        }
        encode_changes_into(&prev, fb, &mut self.buf)?;
        self.flush_buf()?;

        // Swap the drawn frame into `last` so the next frame diffs against
        // it; the caller reuses the old allocation.
        std::mem::swap(&mut prev, fb);
        self.last = Some(prev);
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Encode every cell of `next` that differs from `prev` into `out`.
///
/// Mismatched dimensions (including an empty `prev`) degrade to a full
/// encode, because no cell of `next` has an equal counterpart.
fn encode_changes_into(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let mut style: Option<CellStyle> = None;
    let mut cursor_at: Option<(u16, u16)> = None;

    for y in 0..next.height() {
        for x in 0..next.width() {
            let cell = next.get(x, y).unwrap_or_default();
            if prev.get(x, y) == Some(cell) {
                continue;
            }

            if cursor_at != Some((x, y)) {
                out.queue(cursor::MoveTo(x, y))?;
            }
            if style != Some(cell.style) {
                apply_style_into(out, cell.style)?;
                style = Some(cell.style);
            }
            out.queue(Print(cell.ch))?;
            cursor_at = Some((x + 1, y));
        }
    }

    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

fn apply_style_into(out: &mut Vec<u8>, style: CellStyle) -> Result<()> {
    out.queue(SetForegroundColor(rgb_to_color(style.fg)))?;
    out.queue(SetBackgroundColor(rgb_to_color(style.bg)))?;
    out.queue(SetAttribute(Attribute::Reset))?;
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    if style.dim {
        out.queue(SetAttribute(Attribute::Dim))?;
    }
    Ok(())
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fb::Cell;

    fn cell(ch: char) -> Cell {
        Cell {
            ch,
            style: CellStyle::default(),
        }
    }

    #[test]
    fn test_full_encode_emits_every_cell() {
        let prev = FrameBuffer::new(0, 0);
        let mut next = FrameBuffer::new(2, 1);
        next.set(0, 0, cell('A'));
        next.set(1, 0, cell('B'));

        let mut out = Vec::new();
        encode_changes_into(&prev, &next, &mut out).unwrap();

        let text = String::from_utf8_lossy(&out).into_owned();
        assert!(text.contains('A'));
        assert!(text.contains('B'));
    }

    #[test]
    fn test_identical_frames_encode_no_cells() {
        let mut prev = FrameBuffer::new(3, 1);
        prev.set(1, 0, cell('A'));
        let next = prev.clone();

        let mut out = Vec::new();
        encode_changes_into(&prev, &next, &mut out).unwrap();

        assert!(!String::from_utf8_lossy(&out).contains('A'));
    }

    #[test]
    fn test_changed_cell_is_reencoded() {
        let mut prev = FrameBuffer::new(3, 1);
        prev.set(1, 0, cell('A'));
        let mut next = prev.clone();
        next.set(1, 0, cell('Z'));

        let mut out = Vec::new();
        encode_changes_into(&prev, &next, &mut out).unwrap();

        let text = String::from_utf8_lossy(&out).into_owned();
        assert!(text.contains('Z'));
        assert!(!text.contains('A'));
    }

    #[test]
    fn test_rgb_to_color() {
        let rgb = Rgb::new(1, 2, 3);
        assert_eq!(rgb_to_color(rgb), Color::Rgb { r: 1, g: 2, b: 3 });
    }
}
