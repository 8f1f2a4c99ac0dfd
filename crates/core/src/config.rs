//! Game configuration read from environment variables.
//!
//! - `MEMORY_ROWS` / `MEMORY_COLS`: board size (default 4x5)
//! - `MEMORY_SEED`: shuffle seed (default: derived from the system clock)
//! - `MEMORY_MISMATCH_DELAY_MS`: how long a mismatched pair stays visible (default 500)
//! - `MEMORY_LOG_PATH`: file to write logs to (default: logging disabled)
//!
//! Values that fail to parse fall back to their defaults.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::types::{DEFAULT_COLS, DEFAULT_ROWS, MISMATCH_DELAY_MS};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub rows: u8,
    pub cols: u8,
    pub seed: u32,
    pub mismatch_delay_ms: u32,
    pub log_path: Option<String>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            seed: 1,
            mismatch_delay_ms: MISMATCH_DELAY_MS,
            log_path: None,
        }
    }
}

impl GameConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (the environment, or a map in tests)
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let parse_u8 = |key: &str, default: u8| {
            lookup(key)
                .and_then(|s| s.trim().parse().ok())
                .unwrap_or(default)
        };
        let parse_u32 = |key: &str| lookup(key).and_then(|s| s.trim().parse::<u32>().ok());

        let rows = parse_u8("MEMORY_ROWS", DEFAULT_ROWS);
        let cols = parse_u8("MEMORY_COLS", DEFAULT_COLS);
        let seed = parse_u32("MEMORY_SEED").unwrap_or_else(clock_seed);
        let mismatch_delay_ms = parse_u32("MEMORY_MISMATCH_DELAY_MS").unwrap_or(MISMATCH_DELAY_MS);

        let log_path = lookup("MEMORY_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        Self {
            rows,
            cols,
            seed,
            mismatch_delay_ms,
            log_path,
        }
    }

    pub fn cell_count(&self) -> usize {
        self.rows as usize * self.cols as usize
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
        .unwrap_or(1)
}
