//! Terminal input module (engine-facing).
//!
//! This module is intentionally free of I/O and state. It maps raw
//! `crossterm` events into [`tui_memory_types::GameEvent`] values; the
//! driver loop owns polling and decides what to do with a quit request.

pub mod map;

pub use tui_memory_types as types;

pub use map::{map_event, should_quit};
