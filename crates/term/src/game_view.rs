//! GameView: maps a `core::GameSession` onto a terminal framebuffer.
//!
//! This module is pure (no I/O) and unit-testable. The board is anchored at
//! the terminal origin so tile rects, and therefore pointer coordinates,
//! need no translation between input and rendering.

use tui_memory_core::{GameSession, Tile};
use tui_memory_types::{Face, Rect, SURFACE_H, SURFACE_W};

use crate::assets::{Sprite, SpriteAtlas};
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Renders the board, score readout, and end banner.
pub struct GameView {
    atlas: SpriteAtlas,
}

impl GameView {
    pub fn new(atlas: SpriteAtlas) -> Self {
        Self { atlas }
    }

    /// Render the current session into an existing framebuffer.
    ///
    /// This is the allocation-free hot path. Callers reuse one framebuffer
    /// across frames; it only reallocates when the terminal is resized.
    pub fn render_into(&self, session: &GameSession, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        for tile in session.board().tiles() {
            self.draw_tile(fb, tile);
        }

        self.draw_score(fb, session);

        if session.is_over() {
            self.draw_end_banner(fb);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, session: &GameSession, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(session, viewport, &mut fb);
        fb
    }

    fn draw_tile(&self, fb: &mut FrameBuffer, tile: &Tile) {
        let rect = tile.rect();
        let border = CellStyle {
            fg: Rgb::new(130, 130, 140),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };
        draw_frame(fb, rect, border);

        match tile.face() {
            Face::Hidden => self.fill_back(fb, rect),
            Face::Revealed => self.draw_face(fb, rect, self.atlas.face(tile.face_id())),
        }
    }

    /// Cover the tile interior with the shared back pattern.
    fn fill_back(&self, fb: &mut FrameBuffer, rect: Rect) {
        let back = self.atlas.back();
        let style = CellStyle {
            fg: back.color,
            bg: Rgb::new(20, 20, 28),
            bold: false,
            dim: true,
        };
        let interior = Rect::new(rect.x + 1, rect.y + 1, rect.w.saturating_sub(2), rect.h.saturating_sub(2));
        fb.fill_rect(interior, back.glyph, style);
    }

    /// Draw a revealed face sprite centered in the tile.
    fn draw_face(&self, fb: &mut FrameBuffer, rect: Rect, sprite: Sprite) {
        let style = CellStyle {
            fg: sprite.color,
            bg: Rgb::new(20, 20, 28),
            bold: true,
            dim: false,
        };
        let interior = Rect::new(rect.x + 1, rect.y + 1, rect.w.saturating_sub(2), rect.h.saturating_sub(2));
        fb.fill_rect(interior, ' ', CellStyle { bold: false, ..style });

        let center = rect.center();
        fb.put_char(center.x, center.y, sprite.glyph, style);
    }

    /// Score readout at the top of the reserved column.
    fn draw_score(&self, fb: &mut FrameBuffer, session: &GameSession) {
        let board = session.board();
        let tile_w = SURFACE_W / board.cols() as u16;
        let panel_x = board.reserved_column() as u16 * tile_w + 2;

        let label = CellStyle {
            fg: Rgb::new(220, 220, 220),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        let value = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };

        fb.put_str(panel_x, 0, "SCORE", label);
        fb.put_u32(panel_x, 1, session.score(), value);
    }

    /// Centered end-of-game banner.
    fn draw_end_banner(&self, fb: &mut FrameBuffer) {
        let text = "Success!";
        let text_w = text.chars().count() as u16;
        let x = SURFACE_W.saturating_sub(text_w) / 2;
        let y = SURFACE_H / 2;

        let style = CellStyle {
            fg: Rgb::new(0, 120, 40),
            bg: Rgb::new(240, 240, 240),
            bold: true,
            dim: false,
        };
        fb.put_str(x, y, text, style);
    }
}

/// Draw a box-drawing border along the edges of `rect`.
fn draw_frame(fb: &mut FrameBuffer, rect: Rect, style: CellStyle) {
    if rect.w < 2 || rect.h < 2 {
        return;
    }
    let (x, y, w, h) = (rect.x, rect.y, rect.w, rect.h);

    fb.put_char(x, y, '┌', style);
    fb.put_char(x + w - 1, y, '┐', style);
    fb.put_char(x, y + h - 1, '└', style);
    fb.put_char(x + w - 1, y + h - 1, '┘', style);

    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, '─', style);
        fb.put_char(x + dx, y + h - 1, '─', style);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '│', style);
        fb.put_char(x + w - 1, y + dy, '│', style);
    }
}
