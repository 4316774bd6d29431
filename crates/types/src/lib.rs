//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making
//! them usable in any context (core logic, rendering, input mapping).
//!
//! # Board Layout
//!
//! The playing surface is a fixed grid of terminal cells, divided evenly
//! into the tile grid:
//!
//! - **Surface**: 50 columns x 20 rows of terminal cells
//! - **Grid**: 4 rows x 5 columns, with the last column reserved for the
//!   score readout (no tile is ever placed there)
//! - **Playable tiles**: 4 x (5 - 1) = 16 tiles, i.e. 8 pairs
//!
//! The surface is anchored at the terminal origin, so pointer coordinates
//! from mouse events map directly onto tile regions with no translation.
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed timestep interval (~60 FPS) |
//! | `MISMATCH_DELAY_MS` | 500 | Grace period before a losing pair re-hides |
//!
//! The mismatch delay is measured in elapsed real time rather than frame
//! counts, so the visible ~0.5s grace period holds at any frame pacing.

/// Tile grid rows
pub const BOARD_ROWS: u8 = 4;

/// Tile grid columns, including the reserved score column
pub const BOARD_COLS: u8 = 5;

/// Column index that never receives a tile (score display area)
pub const RESERVED_COLUMN: u8 = BOARD_COLS - 1;

/// Playing surface width in terminal cells
pub const SURFACE_W: u16 = 50;

/// Playing surface height in terminal cells
pub const SURFACE_H: u16 = 20;

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Elapsed real time before a mismatched pair flips back to hidden (500ms)
pub const MISMATCH_DELAY_MS: u32 = 500;

/// A position on the playing surface, in terminal cell coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: u16,
    pub y: u16,
}

impl Point {
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned region of the playing surface.
///
/// `x`/`y` is the top-left corner; `w`/`h` are in cells. Containment is
/// half-open: the right and bottom edges belong to the neighbouring region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub w: u16,
    pub h: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, w: u16, h: u16) -> Self {
        Self { x, y, w, h }
    }

    /// Check whether a point falls inside this region.
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x - self.x < self.w && p.y >= self.y && p.y - self.y < self.h
    }

    /// Center of the region (rounded toward the top-left).
    pub fn center(&self) -> Point {
        Point::new(self.x + self.w / 2, self.y + self.h / 2)
    }
}

/// Identifier for a tile's revealed face.
///
/// Each id appears on exactly two tiles of a board. The hidden face is a
/// single shared back sprite and needs no per-tile identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FaceId(pub u8);

impl FaceId {
    /// Index into face lookup tables (sprite atlas).
    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

/// Which side of a tile is currently showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Face {
    Hidden,
    Revealed,
}

/// Game-level input events, decoupled from any terminal backend.
///
/// The input crate maps raw terminal events into these; the session and the
/// driver loop consume them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Close/quit request. Handled by the driver loop, not the session.
    Quit,
    /// Primary pointer button released at the given surface position.
    PointerRelease(Point),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_layout_has_even_playable_count() {
        let playable = (BOARD_ROWS as u16) * (BOARD_COLS as u16 - 1);
        assert_eq!(playable, 16);
        assert_eq!(playable % 2, 0);
        assert!(RESERVED_COLUMN < BOARD_COLS);
    }

    #[test]
    fn surface_divides_evenly_into_default_grid() {
        assert_eq!(SURFACE_W % BOARD_COLS as u16, 0);
        assert_eq!(SURFACE_H % BOARD_ROWS as u16, 0);
    }

    #[test]
    fn mismatch_delay_is_half_a_second() {
        // Acceptance target: the losing pair stays visible ~0.5s, the same
        // wall-clock duration as 30 frames at the nominal 60Hz rate.
        assert_eq!(MISMATCH_DELAY_MS, 500);
        assert!(TICK_MS * 30 <= MISMATCH_DELAY_MS);
    }

    #[test]
    fn rect_contains_is_half_open() {
        let r = Rect::new(10, 5, 10, 5);
        assert!(r.contains(Point::new(10, 5)));
        assert!(r.contains(Point::new(19, 9)));
        assert!(!r.contains(Point::new(20, 5)));
        assert!(!r.contains(Point::new(10, 10)));
        assert!(!r.contains(Point::new(9, 5)));
    }

    #[test]
    fn rect_center() {
        let r = Rect::new(0, 0, 10, 5);
        assert_eq!(r.center(), Point::new(5, 2));

        let odd = Rect::new(4, 4, 3, 3);
        assert_eq!(odd.center(), Point::new(5, 5));
    }
}
