//! Game state module - the memory game engine
//!
//! `GameState` owns the board, the current selection, the counters and the
//! pending mismatch resolution. Every mutation goes through its methods, which
//! run to completion on `&mut self`; there is no interior mutability and no
//! background timer.
//!
//! # Turn flow
//!
//! 1. `select_tile` reveals a hidden tile and appends it to the selection.
//! 2. The second reveal completes a move. Equal symbols become `Matched` at once;
//!    unequal ones stay `Revealed` and a resolution deadline is armed.
//! 3. While the deadline is armed the selection is full, so every further
//!    `select_tile` is ignored. `advance` (or a direct `resolve_mismatch`) flips
//!    the pair back and clears the selection.
//!
//! # Timing
//!
//! The front end calls [`GameState::advance`] every frame with the elapsed
//! milliseconds. It counts down the mismatch deadline and fires
//! [`GameState::tick`] once per full second until the game is won.

use arrayvec::ArrayVec;

use crate::board::{Board, Tile};
use crate::config::GameConfig;
use crate::error::{MemoryError, Result};
use crate::rng::{deal_pairs, distinct_count, take_distinct, SimpleRng};
use crate::snapshot::{GameSnapshot, TileSnapshot};
use crate::types::*;

/// A mismatched pair waiting to be flipped back
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PendingMismatch {
    pair: [Position; 2],
    remaining_ms: u32,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    /// Pool from the last `initialize`, reused by `restart`
    symbols: Vec<SymbolId>,
    selection: ArrayVec<Position, 2>,
    pending: Option<PendingMismatch>,
    /// Events not yet drained by the presentation layer
    events: Vec<GameEvent>,
    rng: SimpleRng,
    seed: u32,
    status: GameStatus,
    move_count: u32,
    elapsed_seconds: u32,
    /// Milliseconds accumulated toward the next one-second tick
    second_timer_ms: u32,
    mismatch_delay_ms: u32,
    /// Monotonic game id (increments on every initialize/restart)
    episode_id: u32,
    started: bool,
}

impl GameState {
    /// Create an engine with the given RNG seed. No board until `initialize`.
    pub fn new(seed: u32) -> Self {
        Self {
            board: Board::default(),
            symbols: Vec::new(),
            selection: ArrayVec::new(),
            pending: None,
            events: Vec::new(),
            rng: SimpleRng::new(seed),
            seed,
            status: GameStatus::InProgress,
            move_count: 0,
            elapsed_seconds: 0,
            second_timer_ms: 0,
            mismatch_delay_ms: MISMATCH_DELAY_MS,
            episode_id: 0,
            started: false,
        }
    }

    /// Create an engine from configuration (seed and mismatch delay).
    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(config.seed).with_mismatch_delay_ms(config.mismatch_delay_ms)
    }

    pub fn with_mismatch_delay_ms(mut self, delay_ms: u32) -> Self {
        self.mismatch_delay_ms = delay_ms;
        self
    }

    /// Deal a new shuffled board.
    ///
    /// Uses the first `rows * cols / 2` distinct symbols of `pool`, in pool
    /// order, each placed twice. On error the current game is left untouched.
    pub fn initialize(&mut self, rows: u8, cols: u8, pool: &[SymbolId]) -> Result<()> {
        let cells = Board::cell_count(rows, cols)?;
        let needed = cells / 2;
        let picked = take_distinct(pool, needed).ok_or(MemoryError::InsufficientSymbols {
            needed,
            available: distinct_count(pool),
        })?;

        let layout = deal_pairs(&picked, &mut self.rng);
        let board = Board::from_symbols(rows, cols, &layout)?;

        self.symbols = pool.to_vec();
        self.start_episode(board);
        Ok(())
    }

    /// Start a game on a prebuilt board (fixed layouts, tests, demos).
    ///
    /// `restart` afterwards reshuffles the symbols found on this board.
    pub fn load_board(&mut self, board: Board) {
        let mut symbols: Vec<SymbolId> = board.symbols().collect();
        symbols.sort_unstable();
        symbols.dedup();
        self.symbols = symbols;
        self.start_episode(board);
    }

    /// Deal a fresh board with the same dimensions and pool.
    ///
    /// The shuffle continues the RNG stream, so a restart produces a new layout
    /// that is still reproducible from the original seed.
    pub fn restart(&mut self) -> Result<()> {
        let pool = self.symbols.clone();
        self.initialize(self.board.rows(), self.board.cols(), &pool)
    }

    fn start_episode(&mut self, board: Board) {
        if let Some(pending) = self.pending.take() {
            log::debug!(
                "discarding pending mismatch resolution for {} {}",
                pending.pair[0],
                pending.pair[1]
            );
        }

        self.board = board;
        self.selection.clear();
        self.events.clear();
        self.status = GameStatus::InProgress;
        self.move_count = 0;
        self.elapsed_seconds = 0;
        self.second_timer_ms = 0;
        self.episode_id = self.episode_id.wrapping_add(1);
        self.started = true;

        log::info!(
            "episode {} started: {}x{} board, {} pairs",
            self.episode_id,
            self.board.rows(),
            self.board.cols(),
            self.board.total_pairs()
        );
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_won(&self) -> bool {
        self.status == GameStatus::Won
    }

    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    pub fn elapsed_seconds(&self) -> u32 {
        self.elapsed_seconds
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    /// Seed the engine was created with
    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn mismatch_delay_ms(&self) -> u32 {
        self.mismatch_delay_ms
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn tile(&self, row: u8, col: u8) -> Option<&Tile> {
        self.board.get(Position::new(row, col))
    }

    /// Tiles revealed this turn, in selection order
    pub fn selection(&self) -> &[Position] {
        &self.selection
    }

    /// The mismatched pair awaiting resolution, if any
    pub fn pending_mismatch(&self) -> Option<[Position; 2]> {
        self.pending.map(|p| p.pair)
    }

    pub fn matched_pairs(&self) -> usize {
        self.board.matched_count() / 2
    }

    pub fn total_pairs(&self) -> usize {
        self.board.total_pairs()
    }

    /// Whether `select_tile` at `pos` would be accepted right now
    pub fn is_selectable(&self, pos: Position) -> bool {
        self.status == GameStatus::InProgress
            && !self.selection.is_full()
            && self.board.get(pos).map(|t| t.is_hidden()).unwrap_or(false)
    }

    /// Reveal the tile at (row, col).
    ///
    /// Returns `SelectOutcome::Ignored` without touching any state when the game
    /// is won, a mismatch is pending, the position is off the board, or the tile
    /// is not hidden.
    pub fn select_tile(&mut self, row: u8, col: u8) -> SelectOutcome {
        let pos = Position::new(row, col);
        if !self.is_selectable(pos) {
            log::trace!("ignored selection at {}", pos);
            return SelectOutcome::Ignored;
        }

        self.board.set_state(pos, TileState::Revealed);
        self.selection.push(pos);
        self.events.push(GameEvent::TileRevealed(pos));

        if !self.selection.is_full() {
            return SelectOutcome::Revealed;
        }

        self.move_count = self.move_count.saturating_add(1);
        let pair = [self.selection[0], self.selection[1]];
        let first = self.board.get(pair[0]).map(|t| t.symbol);
        let second = self.board.get(pair[1]).map(|t| t.symbol);

        if first == second {
            self.board.set_state(pair[0], TileState::Matched);
            self.board.set_state(pair[1], TileState::Matched);
            self.selection.clear();
            self.events.push(GameEvent::TilesMatched(pair[0], pair[1]));
            log::debug!("move {}: matched {} {}", self.move_count, pair[0], pair[1]);

            if self.board.all_matched() {
                self.status = GameStatus::Won;
                self.events.push(GameEvent::GameWon {
                    move_count: self.move_count,
                    elapsed_seconds: self.elapsed_seconds,
                });
                log::info!(
                    "episode {} won in {} moves, {}s",
                    self.episode_id,
                    self.move_count,
                    self.elapsed_seconds
                );
                return SelectOutcome::Matched { won: true };
            }
            SelectOutcome::Matched { won: false }
        } else {
            self.pending = Some(PendingMismatch {
                pair,
                remaining_ms: self.mismatch_delay_ms,
            });
            self.events.push(GameEvent::MismatchPending(pair[0], pair[1]));
            log::debug!(
                "move {}: mismatch {} {}, hiding in {}ms",
                self.move_count,
                pair[0],
                pair[1],
                self.mismatch_delay_ms
            );
            SelectOutcome::Mismatched
        }
    }

    /// Flip a pending mismatched pair back face down and clear the selection.
    ///
    /// Returns false if nothing was pending.
    pub fn resolve_mismatch(&mut self) -> bool {
        let Some(pending) = self.pending.take() else {
            return false;
        };

        let [a, b] = pending.pair;
        self.board.set_state(a, TileState::Hidden);
        self.board.set_state(b, TileState::Hidden);
        self.selection.clear();
        self.events.push(GameEvent::TilesHidden(a, b));
        log::trace!("hid {} {}", a, b);
        true
    }

    /// Advance the elapsed-seconds counter by one. No-op once won.
    pub fn tick(&mut self) -> bool {
        if !self.started || self.status == GameStatus::Won {
            return false;
        }
        self.elapsed_seconds = self.elapsed_seconds.saturating_add(1);
        true
    }

    /// Main scheduler step - run deadlines that fall within `elapsed_ms`.
    ///
    /// Returns true if any tile state or counter changed.
    pub fn advance(&mut self, elapsed_ms: u32) -> bool {
        if !self.started {
            return false;
        }

        let mut changed = false;

        if let Some(pending) = self.pending.as_mut() {
            pending.remaining_ms = pending.remaining_ms.saturating_sub(elapsed_ms);
            if pending.remaining_ms == 0 {
                changed |= self.resolve_mismatch();
            }
        }

        if self.status == GameStatus::InProgress {
            self.second_timer_ms = self.second_timer_ms.saturating_add(elapsed_ms);
            while self.second_timer_ms >= SECOND_MS {
                self.second_timer_ms -= SECOND_MS;
                changed |= self.tick();
            }
        }

        changed
    }

    /// Drain queued events in emission order.
    ///
    /// The queue holds every event since the last drain, up to a handful per
    /// turn, and is only emptied here or when a new game starts. Callers that
    /// ignore events should still drain once per frame.
    pub fn drain_events(&mut self) -> std::vec::Drain<'_, GameEvent> {
        self.events.drain(..)
    }

    pub fn has_events(&self) -> bool {
        !self.events.is_empty()
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.rows = self.board.rows();
        out.cols = self.board.cols();
        out.tiles.clear();
        out.tiles.extend(self.board.tiles().iter().map(|t| TileSnapshot {
            position: t.position,
            state: t.state,
            symbol: t.state.is_face_up().then_some(t.symbol),
        }));
        out.selection.clear();
        out.selection.extend(self.selection.iter().copied());
        out.pending_mismatch = self.pending_mismatch();
        out.status = self.status;
        out.move_count = self.move_count;
        out.elapsed_seconds = self.elapsed_seconds;
        out.matched_pairs = self.matched_pairs() as u32;
        out.total_pairs = self.total_pairs() as u32;
        out.episode_id = self.episode_id;
        out.seed = self.seed;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
