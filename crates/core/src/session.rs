//! GameSession module - the per-frame state machine
//!
//! The session owns the board and advances it from exactly two inputs:
//! pointer events and elapsed real time. All transitions are total -
//! positions that miss, re-selections, and input after the game ends are
//! no-ops, never errors.
//!
//! The driver loop calls `handle_event` for each polled event, renders,
//! then calls `update` with the elapsed milliseconds since the last tick.

use arrayvec::ArrayVec;

use tui_memory_types::{Face, GameEvent, Point, MISMATCH_DELAY_MS};

use crate::board::Board;

/// Session lifecycle.
///
/// `Finished` is terminal: no further input is processed and the score
/// freezes. The driver keeps rendering (end banner) until the player quits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Playing,
    Finished,
}

/// Complete game state for one sitting.
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    /// Indices of revealed-but-unresolved tiles, oldest first.
    selected: ArrayVec<usize, 2>,
    /// Elapsed real time since a losing pair was completed.
    mismatch_timer_ms: u32,
    /// Total session time accumulated from `update` calls.
    elapsed_ms: u64,
    /// Whole elapsed seconds. Monotonic while playing, frozen once finished.
    score: u32,
    phase: Phase,
}

impl GameSession {
    /// Create a session over a default board shuffled with `seed`.
    pub fn new(seed: u32) -> Self {
        Self::with_board(Board::new(seed))
    }

    /// Create a session around a preconstructed board (custom layouts).
    pub fn with_board(board: Board) -> Self {
        Self {
            board,
            selected: ArrayVec::new(),
            mismatch_timer_ms: 0,
            elapsed_ms: 0,
            score: 0,
            phase: Phase::Playing,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Whole elapsed seconds since the session started.
    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// True once every pair has been matched.
    pub fn is_over(&self) -> bool {
        self.phase == Phase::Finished
    }

    /// Indices of the currently selected tiles, oldest first.
    pub fn selected(&self) -> &[usize] {
        &self.selected
    }

    /// Process one input event.
    ///
    /// Only pointer releases drive the session. Quit requests belong to the
    /// driver loop and fall through as no-ops here.
    pub fn handle_event(&mut self, event: GameEvent) {
        if self.phase == Phase::Finished {
            return;
        }
        if let GameEvent::PointerRelease(position) = event {
            self.select_at(position);
        }
    }

    /// Reveal the hidden tile under `position`, if the selection has room.
    fn select_at(&mut self, position: Point) {
        if self.selected.len() >= 2 {
            return;
        }
        let Some(index) = self.board.hit_test(position) else {
            return;
        };
        if self.board.tile(index).face() != Face::Hidden {
            return;
        }
        // Never double-add the same tile instance.
        if self.selected.contains(&index) {
            return;
        }
        self.board.tile_mut(index).flip();
        self.selected.push(index);
    }

    /// Advance the session by `elapsed_ms` of real time.
    ///
    /// Recomputes the score from total elapsed time, resolves a completed
    /// selection pair, then checks for the end of the game.
    pub fn update(&mut self, elapsed_ms: u32) {
        if self.phase == Phase::Finished {
            return;
        }

        self.elapsed_ms += u64::from(elapsed_ms);
        self.score = (self.elapsed_ms / 1000) as u32;

        if self.selected.len() == 2 {
            self.resolve_pair(elapsed_ms);
        }

        if self.board.all_matched() {
            self.phase = Phase::Finished;
        }
    }

    /// Resolve the two selected tiles: a match stays revealed and frees the
    /// selection at once; a mismatch re-hides after the grace delay.
    fn resolve_pair(&mut self, elapsed_ms: u32) {
        let (first, second) = (self.selected[0], self.selected[1]);

        if self.board.tile(first).face_id() == self.board.tile(second).face_id() {
            self.selected.clear();
            self.mismatch_timer_ms = 0;
            return;
        }

        self.mismatch_timer_ms += elapsed_ms;
        if self.mismatch_timer_ms >= MISMATCH_DELAY_MS {
            self.board.tile_mut(first).flip();
            self.board.tile_mut(second).flip();
            self.selected.clear();
            self.mismatch_timer_ms = 0;
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(1)
    }
}
