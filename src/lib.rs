//! Terminal memory game (workspace facade crate).
//!
//! This package keeps the `tui_memory::{core,input,term,types}` public API
//! stable while the implementation lives in dedicated crates under
//! `crates/`.

pub use tui_memory_core as core;
pub use tui_memory_input as input;
pub use tui_memory_term as term;
pub use tui_memory_types as types;
