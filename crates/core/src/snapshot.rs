//! Read-only view of the engine for renderers.
//!
//! A snapshot never leaks the symbol of a hidden tile, so a front end cannot
//! accidentally draw a face-down tile's face.

use arrayvec::ArrayVec;

use crate::types::{GameStatus, Position, SymbolId, TileState};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileSnapshot {
    pub position: Position,
    pub state: TileState,
    /// `Some` only for revealed or matched tiles
    pub symbol: Option<SymbolId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GameSnapshot {
    pub rows: u8,
    pub cols: u8,
    /// Row-major tiles
    pub tiles: Vec<TileSnapshot>,
    pub selection: ArrayVec<Position, 2>,
    /// Pair waiting to be flipped back, if a mismatch is pending
    pub pending_mismatch: Option<[Position; 2]>,
    pub status: GameStatus,
    pub move_count: u32,
    pub elapsed_seconds: u32,
    pub matched_pairs: u32,
    pub total_pairs: u32,
    pub episode_id: u32,
    pub seed: u32,
}

impl GameSnapshot {
    pub fn tile(&self, pos: Position) -> Option<&TileSnapshot> {
        if pos.row >= self.rows || pos.col >= self.cols {
            return None;
        }
        self.tiles
            .get(pos.row as usize * self.cols as usize + pos.col as usize)
    }

    pub fn is_won(&self) -> bool {
        self.status == GameStatus::Won
    }

    /// Whether `pos` is part of a pending mismatch
    pub fn is_mismatched(&self, pos: Position) -> bool {
        self.pending_mismatch
            .map(|pair| pair.contains(&pos))
            .unwrap_or(false)
    }

    /// Whether a new selection would currently be accepted
    pub fn accepts_input(&self) -> bool {
        !self.is_won() && self.pending_mismatch.is_none() && !self.tiles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_snapshot_is_empty() {
        let snap = GameSnapshot::default();
        assert_eq!(snap.tiles.len(), 0);
        assert!(!snap.is_won());
        assert!(!snap.accepts_input());
        assert!(snap.tile(Position::new(0, 0)).is_none());
    }

    #[test]
    fn test_is_mismatched() {
        let mut snap = GameSnapshot::default();
        let pair = [Position::new(0, 0), Position::new(1, 1)];
        snap.pending_mismatch = Some(pair);
        assert!(snap.is_mismatched(Position::new(1, 1)));
        assert!(!snap.is_mismatched(Position::new(0, 1)));
    }
}
