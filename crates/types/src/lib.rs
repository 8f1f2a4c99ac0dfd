//! Core types shared across the workspace
//! This crate contains pure data types with no external dependencies

/// Default board dimensions (4 rows x 5 columns, 10 pairs)
pub const DEFAULT_ROWS: u8 = 4;
pub const DEFAULT_COLS: u8 = 5;

/// Game timing constants (in milliseconds)
pub const TICK_MS: u32 = 16;
pub const SECOND_MS: u32 = 1000;
pub const MISMATCH_DELAY_MS: u32 = 500;

/// A tile coordinate on the board.
///
/// Rows grow downward, columns grow to the right. `(0, 0)` is the top-left tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Position {
    pub row: u8,
    pub col: u8,
}

impl Position {
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Opaque pairing key. Two tiles match when their symbols are equal.
///
/// The engine never interprets the value; mapping a symbol to a glyph or image
/// is the presentation layer's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SymbolId(pub u16);

impl std::fmt::Display for SymbolId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Face state of a single tile
///
/// - **Hidden**: face down, selectable
/// - **Revealed**: face up as part of the current turn
/// - **Matched**: paired and permanently face up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TileState {
    #[default]
    Hidden,
    Revealed,
    Matched,
}

impl TileState {
    /// Whether the tile's symbol is visible to the player
    pub fn is_face_up(&self) -> bool {
        !matches!(self, TileState::Hidden)
    }
}

/// Board-level game status. `Won` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameStatus {
    #[default]
    InProgress,
    Won,
}

/// Result of a `select_tile` call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    /// The call was a no-op (finished game, full selection, bad position,
    /// or a tile that is not hidden)
    Ignored,
    /// First tile of the turn was revealed
    Revealed,
    /// Second tile matched the first; `won` is set on the final pair
    Matched { won: bool },
    /// Second tile did not match; both stay revealed until resolution
    Mismatched,
}

/// Engine-side events consumed by the presentation layer.
///
/// Emitted in the order the transitions happen and drained with
/// `GameState::drain_events`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    TileRevealed(Position),
    /// Two revealed tiles did not match and will be hidden after the delay
    MismatchPending(Position, Position),
    TilesHidden(Position, Position),
    TilesMatched(Position, Position),
    /// Emitted exactly once per game, on the move that matches the last pair
    GameWon { move_count: u32, elapsed_seconds: u32 },
}

/// Cursor movement direction on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Player actions produced by the input layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    /// Move the board cursor one tile
    Move(Direction),
    /// Select the tile under the cursor
    Select,
    /// Start a new game with the same board size
    Restart,
}
