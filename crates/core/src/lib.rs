//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the whole memory-game state machine. It has **zero
//! dependencies** on UI, timing sources, or I/O, making it:
//!
//! - **Deterministic**: the same seed produces the same tile layout
//! - **Testable**: every rule is exercised headlessly, with time passed in
//! - **Portable**: any frontend that can deliver pointer positions and
//!   elapsed milliseconds can drive a game
//!
//! # Module Structure
//!
//! - [`board`]: tile grid construction, paired-face dealing, hit testing
//! - [`session`]: per-frame state machine (selection, mismatch delay, score,
//!   win detection)
//! - [`rng`]: seeded LCG used to shuffle the face deck
//!
//! # Game Rules
//!
//! - The board deals `N/2` distinct faces, each onto exactly two tiles,
//!   shuffled across the playable grid.
//! - A pointer release on a hidden tile reveals it, up to two at a time.
//! - Two revealed tiles with equal faces stay revealed for good; unequal
//!   faces flip back to hidden after a short real-time grace period.
//! - The score counts whole elapsed seconds and freezes when every tile is
//!   revealed.
//!
//! # Example
//!
//! ```
//! use tui_memory_core::GameSession;
//! use tui_memory_types::GameEvent;
//!
//! let mut game = GameSession::new(12345);
//!
//! // Reveal whatever tile sits under the first tile's center.
//! let center = game.board().tiles()[0].rect().center();
//! game.handle_event(GameEvent::PointerRelease(center));
//!
//! game.update(16);
//! assert!(!game.is_over());
//! ```

pub mod board;
pub mod rng;
pub mod session;

pub use board::{Board, SetupError, Tile};
pub use rng::SimpleRng;
pub use session::{GameSession, Phase};
