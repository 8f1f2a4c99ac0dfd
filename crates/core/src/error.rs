//! Error types for board setup.
//!
//! Selections never fail: an invalid `select_tile` is a silent no-op. Only board
//! construction reports errors to the caller.

use thiserror::Error;

use crate::types::SymbolId;

/// Errors raised while building a board
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MemoryError {
    #[error("symbol pool too small: {needed} distinct symbols needed, {available} available")]
    InsufficientSymbols { needed: usize, available: usize },

    #[error("invalid board dimensions {rows}x{cols}: cell count must be even and non-zero")]
    InvalidDimensions { rows: u8, cols: u8 },

    #[error("layout has {actual} symbols, board needs {expected}")]
    LayoutSize { expected: usize, actual: usize },

    #[error("symbol {symbol} appears {count} times, expected exactly 2")]
    UnpairedSymbol { symbol: SymbolId, count: usize },
}

pub type Result<T> = std::result::Result<T, MemoryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insufficient_symbols_message() {
        let err = MemoryError::InsufficientSymbols {
            needed: 10,
            available: 4,
        };
        assert_eq!(
            err.to_string(),
            "symbol pool too small: 10 distinct symbols needed, 4 available"
        );
    }

    #[test]
    fn test_unpaired_symbol_message_names_symbol() {
        let err = MemoryError::UnpairedSymbol {
            symbol: SymbolId(7),
            count: 3,
        };
        assert!(err.to_string().contains("#7"));
        assert!(err.to_string().contains("3 times"));
    }
}
