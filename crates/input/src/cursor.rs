//! Board cursor for keyboard play.
//!
//! The cursor is presentation state: the engine never sees it, it only receives
//! the position when the player selects.

use crate::types::{Direction, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    pos: Position,
}

impl Cursor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn position(&self) -> Position {
        self.pos
    }

    /// Move one tile, wrapping around the board edges.
    pub fn step(&mut self, dir: Direction, rows: u8, cols: u8) {
        if rows == 0 || cols == 0 {
            return;
        }
        self.clamp(rows, cols);

        let Position { row, col } = self.pos;
        self.pos = match dir {
            Direction::Up => Position::new(if row == 0 { rows - 1 } else { row - 1 }, col),
            Direction::Down => Position::new((row + 1) % rows, col),
            Direction::Left => Position::new(row, if col == 0 { cols - 1 } else { col - 1 }),
            Direction::Right => Position::new(row, (col + 1) % cols),
        };
    }

    /// Jump to a position (e.g. a mouse click). Ignored if off the board.
    pub fn set(&mut self, pos: Position, rows: u8, cols: u8) {
        if pos.row < rows && pos.col < cols {
            self.pos = pos;
        }
    }

    /// Keep the cursor on the board after a resize or a new board size
    pub fn clamp(&mut self, rows: u8, cols: u8) {
        self.pos.row = self.pos.row.min(rows.saturating_sub(1));
        self.pos.col = self.pos.col.min(cols.saturating_sub(1));
    }
}
