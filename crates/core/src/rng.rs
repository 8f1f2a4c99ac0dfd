//! RNG module - seeded shuffling for board layouts
//!
//! The engine never touches ambient randomness. Every layout comes from a
//! `SimpleRng` seeded by the caller, so the same seed always deals the same
//! sequence of boards (first game, restart, restart, ...).

use crate::types::SymbolId;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Scales by multiplication so the result depends on the high bits; the low
    /// bits of an LCG cycle with a short period.
    pub fn next_range(&mut self, max: u32) -> u32 {
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    /// Shuffle a slice using Fisher-Yates
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

/// Take the first `pairs` distinct symbols of `pool`, in pool order.
///
/// Repeated entries in the pool are skipped rather than counted twice. Returns
/// `None` when the pool holds fewer than `pairs` distinct symbols.
pub fn take_distinct(pool: &[SymbolId], pairs: usize) -> Option<Vec<SymbolId>> {
    let mut picked: Vec<SymbolId> = Vec::with_capacity(pairs);
    for &symbol in pool {
        if picked.len() == pairs {
            break;
        }
        if !picked.contains(&symbol) {
            picked.push(symbol);
        }
    }
    (picked.len() == pairs).then_some(picked)
}

/// Count distinct symbols in a pool
pub fn distinct_count(pool: &[SymbolId]) -> usize {
    let mut seen: Vec<SymbolId> = pool.to_vec();
    seen.sort_unstable();
    seen.dedup();
    seen.len()
}

/// Duplicate each symbol and shuffle the resulting multiset.
///
/// The output is a row-major layout ready for `Board::from_symbols`.
pub fn deal_pairs(symbols: &[SymbolId], rng: &mut SimpleRng) -> Vec<SymbolId> {
    let mut layout: Vec<SymbolId> = symbols.iter().flat_map(|&s| [s, s]).collect();
    rng.shuffle(&mut layout);
    layout
}
