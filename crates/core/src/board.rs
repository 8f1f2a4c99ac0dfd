//! Board module - the grid of paired tiles
//!
//! The board is a rows x cols grid stored as a flat, row-major `Vec<Tile>`.
//! Dimensions are fixed once the board is built; a new game builds a new board.
//! Coordinates: `Position { row, col }` with `(0, 0)` at the top-left.
//!
//! Every board satisfies the pairing invariant: each symbol present appears on
//! exactly two tiles. Constructors validate it, and nothing outside the crate can
//! change a tile's symbol afterwards.

use crate::error::{MemoryError, Result};
use crate::types::{Position, SymbolId, TileState};

/// A single grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tile {
    pub position: Position,
    pub symbol: SymbolId,
    pub state: TileState,
}

impl Tile {
    pub fn new(position: Position, symbol: SymbolId) -> Self {
        Self {
            position,
            symbol,
            state: TileState::Hidden,
        }
    }

    pub fn is_hidden(&self) -> bool {
        self.state == TileState::Hidden
    }

    pub fn is_matched(&self) -> bool {
        self.state == TileState::Matched
    }
}

/// The game board - rows x cols tiles using flat array storage
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Board {
    rows: u8,
    cols: u8,
    /// Flat array of tiles, row-major order (row * cols + col)
    tiles: Vec<Tile>,
}

impl Board {
    /// Build a board from symbols laid out in row-major order.
    ///
    /// Fails unless the cell count is even and non-zero, `symbols` fills the grid
    /// exactly, and every symbol appears exactly twice.
    pub fn from_symbols(rows: u8, cols: u8, symbols: &[SymbolId]) -> Result<Self> {
        let cells = Self::cell_count(rows, cols)?;
        if symbols.len() != cells {
            return Err(MemoryError::LayoutSize {
                expected: cells,
                actual: symbols.len(),
            });
        }

        let mut sorted = symbols.to_vec();
        sorted.sort_unstable();
        for run in sorted.chunk_by(|a, b| a == b) {
            if run.len() != 2 {
                return Err(MemoryError::UnpairedSymbol {
                    symbol: run[0],
                    count: run.len(),
                });
            }
        }

        let tiles = symbols
            .iter()
            .enumerate()
            .map(|(i, &symbol)| {
                let position = Position::new((i / cols as usize) as u8, (i % cols as usize) as u8);
                Tile::new(position, symbol)
            })
            .collect();

        Ok(Self { rows, cols, tiles })
    }

    /// Validate dimensions and return the number of cells
    pub fn cell_count(rows: u8, cols: u8) -> Result<usize> {
        let cells = rows as usize * cols as usize;
        if cells == 0 || cells % 2 != 0 {
            return Err(MemoryError::InvalidDimensions { rows, cols });
        }
        Ok(cells)
    }

    /// Calculate flat index from a position
    #[inline(always)]
    fn index(&self, pos: Position) -> Option<usize> {
        if pos.row >= self.rows || pos.col >= self.cols {
            return None;
        }
        Some(pos.row as usize * self.cols as usize + pos.col as usize)
    }

    pub fn rows(&self) -> u8 {
        self.rows
    }

    pub fn cols(&self) -> u8 {
        self.cols
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn total_pairs(&self) -> usize {
        self.tiles.len() / 2
    }

    /// Get tile at position, `None` if out of bounds
    pub fn get(&self, pos: Position) -> Option<&Tile> {
        self.index(pos).map(|i| &self.tiles[i])
    }

    /// Set the state of the tile at `pos`. Returns false if out of bounds.
    pub(crate) fn set_state(&mut self, pos: Position, state: TileState) -> bool {
        match self.index(pos) {
            Some(i) => {
                self.tiles[i].state = state;
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.index(pos).is_some()
    }

    /// All tiles in row-major order
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn matched_count(&self) -> usize {
        self.tiles.iter().filter(|t| t.is_matched()).count()
    }

    /// True when the board is non-empty and every tile is matched
    pub fn all_matched(&self) -> bool {
        !self.tiles.is_empty() && self.tiles.iter().all(Tile::is_matched)
    }

    /// Symbols in row-major order
    pub fn symbols(&self) -> impl Iterator<Item = SymbolId> + '_ {
        self.tiles.iter().map(|t| t.symbol)
    }
}
