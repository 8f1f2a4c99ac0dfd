//! Terminal rendering for the memory board.
//!
//! Renders a [`core::GameSnapshot`] into a plain framebuffer and flushes it
//! with crossterm. There is no widget toolkit: layout is computed by
//! [`GameView`] and the same layout answers mouse hit-tests.

pub mod fb;
pub mod game_view;
pub mod glyphs;
pub mod renderer;

pub use tui_memory_core as core;
pub use tui_memory_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, BoardLayout, GameView, Viewport};
pub use glyphs::{glyph_for, symbol_pool};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
