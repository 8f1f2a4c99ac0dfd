//! End-to-end turns through the public engine API

use tui_memory::core::{Board, GameState, MemoryError};
use tui_memory::types::{GameEvent, GameStatus, Position, SelectOutcome, SymbolId, TileState};

const A: SymbolId = SymbolId(0);
const B: SymbolId = SymbolId(1);

fn positions_of(game: &GameState, symbol: SymbolId) -> Vec<Position> {
    game.board()
        .tiles()
        .iter()
        .filter(|t| t.symbol == symbol)
        .map(|t| t.position)
        .collect()
}

fn state_at(game: &GameState, pos: Position) -> TileState {
    game.tile(pos.row, pos.col).unwrap().state
}

#[test]
fn test_two_by_two_game_is_won_on_the_last_pair() {
    let mut game = GameState::new(7);
    game.initialize(2, 2, &[A, B]).unwrap();

    let a = positions_of(&game, A);
    let b = positions_of(&game, B);
    assert_eq!(a.len(), 2);
    assert_eq!(b.len(), 2);

    game.select_tile(a[0].row, a[0].col);
    assert_eq!(
        game.select_tile(a[1].row, a[1].col),
        SelectOutcome::Matched { won: false }
    );
    assert_eq!(state_at(&game, a[0]), TileState::Matched);
    assert_eq!(state_at(&game, a[1]), TileState::Matched);
    assert_eq!(game.move_count(), 1);
    assert_eq!(game.status(), GameStatus::InProgress);

    game.select_tile(b[0].row, b[0].col);
    assert_eq!(
        game.select_tile(b[1].row, b[1].col),
        SelectOutcome::Matched { won: true }
    );
    assert_eq!(game.move_count(), 2);
    assert_eq!(game.status(), GameStatus::Won);
    assert!(game.is_won());
}

#[test]
fn test_mismatch_blocks_input_until_resolved() {
    let mut game = GameState::new(1);
    game.load_board(Board::from_symbols(2, 2, &[A, B, A, B]).unwrap());

    game.select_tile(0, 0);
    assert_eq!(game.select_tile(0, 1), SelectOutcome::Mismatched);
    assert_eq!(game.tile(0, 0).unwrap().state, TileState::Revealed);
    assert_eq!(game.tile(0, 1).unwrap().state, TileState::Revealed);
    assert_eq!(game.move_count(), 1);

    // Selection is full: (1,0) stays hidden.
    assert_eq!(game.select_tile(1, 0), SelectOutcome::Ignored);
    assert_eq!(game.tile(1, 0).unwrap().state, TileState::Hidden);

    game.advance(game.mismatch_delay_ms());
    assert_eq!(game.tile(0, 0).unwrap().state, TileState::Hidden);
    assert_eq!(game.tile(0, 1).unwrap().state, TileState::Hidden);
    assert!(game.selection().is_empty());

    assert_eq!(game.select_tile(1, 0), SelectOutcome::Revealed);
}

#[test]
fn test_mismatch_round_trip_leaves_other_tiles_alone() {
    let mut game = GameState::new(1);
    game.load_board(Board::from_symbols(2, 3, &[A, A, B, B, SymbolId(2), SymbolId(2)]).unwrap());

    // Match A first so there is a non-hidden bystander.
    game.select_tile(0, 0);
    game.select_tile(0, 1);

    game.select_tile(0, 2);
    game.select_tile(1, 1);
    assert!(game.pending_mismatch().is_some());
    assert!(game.resolve_mismatch());

    let states: Vec<TileState> = game.board().tiles().iter().map(|t| t.state).collect();
    assert_eq!(
        states,
        vec![
            TileState::Matched,
            TileState::Matched,
            TileState::Hidden,
            TileState::Hidden,
            TileState::Hidden,
            TileState::Hidden,
        ]
    );
    assert_eq!(game.move_count(), 2);
}

#[test]
fn test_selecting_face_up_tiles_changes_nothing() {
    let mut game = GameState::new(1);
    game.load_board(Board::from_symbols(2, 2, &[A, B, A, B]).unwrap());

    game.select_tile(0, 0);
    game.select_tile(1, 0);
    game.select_tile(0, 1);
    let before = game.snapshot();

    // Matched tile, revealed tile, off-board position.
    for (r, c) in [(0, 0), (1, 0), (0, 1), (5, 5)] {
        assert_eq!(game.select_tile(r, c), SelectOutcome::Ignored);
    }
    assert_eq!(game.snapshot(), before);
}

#[test]
fn test_tick_after_win_is_noop() {
    let mut game = GameState::new(1);
    game.load_board(Board::from_symbols(1, 2, &[A, A]).unwrap());
    game.tick();
    game.select_tile(0, 0);
    game.select_tile(0, 1);
    assert!(game.is_won());

    assert!(!game.tick());
    game.advance(10_000);
    assert_eq!(game.elapsed_seconds(), 1);
}

#[test]
fn test_events_follow_the_turn() {
    let mut game = GameState::new(1);
    game.load_board(Board::from_symbols(2, 2, &[A, B, A, B]).unwrap());
    let p = Position::new;

    game.select_tile(0, 0);
    game.select_tile(0, 1);
    game.advance(game.mismatch_delay_ms());
    game.select_tile(0, 0);
    game.select_tile(1, 0);
    game.select_tile(0, 1);
    game.select_tile(1, 1);

    let events: Vec<GameEvent> = game.drain_events().collect();
    assert_eq!(
        events,
        vec![
            GameEvent::TileRevealed(p(0, 0)),
            GameEvent::TileRevealed(p(0, 1)),
            GameEvent::MismatchPending(p(0, 0), p(0, 1)),
            GameEvent::TilesHidden(p(0, 0), p(0, 1)),
            GameEvent::TileRevealed(p(0, 0)),
            GameEvent::TileRevealed(p(1, 0)),
            GameEvent::TilesMatched(p(0, 0), p(1, 0)),
            GameEvent::TileRevealed(p(0, 1)),
            GameEvent::TileRevealed(p(1, 1)),
            GameEvent::TilesMatched(p(0, 1), p(1, 1)),
            GameEvent::GameWon {
                move_count: 2,
                elapsed_seconds: 0
            },
        ]
    );
    assert!(!game.has_events());
}

#[test]
fn test_reinitialize_during_pending_mismatch_starts_clean() {
    let mut game = GameState::new(3);
    game.load_board(Board::from_symbols(2, 2, &[A, B, A, B]).unwrap());
    game.select_tile(0, 0);
    game.select_tile(0, 1);

    game.initialize(2, 2, &[A, B]).unwrap();
    assert!(game.pending_mismatch().is_none());

    // The old deadline must not flip anything on the new board.
    game.select_tile(0, 0);
    game.advance(10 * game.mismatch_delay_ms());
    assert_eq!(game.tile(0, 0).unwrap().state, TileState::Revealed);
    assert_eq!(game.move_count(), 0);
}

#[test]
fn test_pool_too_small_is_reported() {
    let mut game = GameState::new(1);
    assert_eq!(
        game.initialize(4, 5, &[A, B, SymbolId(2)]),
        Err(MemoryError::InsufficientSymbols {
            needed: 10,
            available: 3
        })
    );
    assert!(!game.started());
}

#[test]
fn test_same_seed_deals_same_board() {
    let pool: Vec<SymbolId> = (0..10).map(SymbolId).collect();
    let mut a = GameState::new(99);
    let mut b = GameState::new(99);
    a.initialize(4, 5, &pool).unwrap();
    b.initialize(4, 5, &pool).unwrap();
    assert_eq!(a.board(), b.board());
}
