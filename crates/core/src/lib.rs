//! Memory game engine.
//!
//! Owns the paired-tile board, the two-tile selection, the move and time
//! counters, and the deadline that flips a mismatched pair back. Nothing here
//! reads the clock or the terminal: the front end feeds in selections and
//! elapsed milliseconds, then reads a [`GameSnapshot`] and drains
//! [`types::GameEvent`]s. Layouts come from a caller-supplied seed, so a seed
//! replays the same sequence of boards.
//!
//! # Module Structure
//!
//! - [`board`]: rows x cols grid of paired tiles
//! - [`game_state`]: the engine (selection, matching, counters, deadlines)
//! - [`rng`]: seeded LCG and pair dealing
//! - [`snapshot`]: read-only view for renderers
//! - [`error`]: board setup errors
//! - [`config`]: environment-driven settings
//!
//! # Game Rules
//!
//! - Each symbol sits on exactly two tiles, shuffled at the start of a game
//! - A move is two reveals; equal symbols stay face up as a matched pair
//! - A mismatched pair stays visible for 500ms, then flips back; input is
//!   ignored until then
//! - The game is won when every tile is matched; the clock stops
//!
//! # Example
//!
//! ```
//! use tui_memory_core::{Board, GameState};
//! use tui_memory_types::{SelectOutcome, SymbolId};
//!
//! let (a, b) = (SymbolId(0), SymbolId(1));
//! let mut game = GameState::new(12345);
//! game.load_board(Board::from_symbols(2, 2, &[a, b, a, b]).unwrap());
//!
//! assert_eq!(game.select_tile(0, 0), SelectOutcome::Revealed);
//! assert_eq!(game.select_tile(1, 0), SelectOutcome::Matched { won: false });
//! assert_eq!(game.move_count(), 1);
//! ```
//!
//! # Timing
//!
//! Call [`GameState::advance`](game_state::GameState::advance) every frame with
//! the elapsed milliseconds; it fires the one-second tick and mismatch
//! resolution when their deadlines pass.

pub mod board;
pub mod config;
pub mod error;
pub mod game_state;
pub mod rng;
pub mod snapshot;

pub use tui_memory_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, Tile};
pub use config::GameConfig;
pub use error::{MemoryError, Result};
pub use game_state::GameState;
pub use rng::SimpleRng;
pub use snapshot::{GameSnapshot, TileSnapshot};
