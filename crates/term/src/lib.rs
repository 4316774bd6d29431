//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal gameplay. It renders
//! into a styled-cell framebuffer that is then flushed to a terminal
//! backend, keeping the draw logic pure and testable.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Resolve face artwork once at setup ([`assets::SpriteAtlas`]), never
//!   during the frame loop
//! - Flush only cells that changed since the previous frame

pub mod assets;
pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_memory_core as core;
pub use tui_memory_types as types;

pub use assets::{Sprite, SpriteAtlas};
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::TerminalRenderer;
