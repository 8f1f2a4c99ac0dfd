//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::UiAction`] and keeps the
//! board cursor used for keyboard play. Mouse clicks are hit-tested by the
//! terminal view and fed to [`Cursor::set`].

pub mod cursor;
pub mod map;

pub use tui_memory_types as types;

pub use cursor::Cursor;
pub use map::{handle_key_event, should_quit};
