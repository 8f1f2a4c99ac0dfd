//! Terminal memory game runner (default binary).
//!
//! Uses crossterm for keyboard and mouse input and the framebuffer renderer
//! from `tui_memory::term`. The engine is driven from this loop only: one
//! `advance` per frame, then the queued events are drained into the log.

use std::fs::File;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind, MouseButton, MouseEventKind};

use tui_memory::core::{GameConfig, GameSnapshot, GameState};
use tui_memory::input::{handle_key_event, should_quit, Cursor};
use tui_memory::term::{symbol_pool, FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_memory::types::{GameEvent, UiAction, TICK_MS};

fn main() -> Result<()> {
    let config = GameConfig::from_env();
    init_logging(&config)?;

    let mut game = GameState::from_config(&config);
    game.initialize(config.rows, config.cols, &symbol_pool())
        .with_context(|| format!("cannot deal a {}x{} board", config.rows, config.cols))?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut game);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(err) = &result {
        log::error!("game loop failed: {err:#}");
    }
    result
}

/// Logs go to `MEMORY_LOG_PATH` when set; the terminal itself is owned by
/// the renderer, so there is no stderr fallback.
fn init_logging(config: &GameConfig) -> Result<()> {
    let Some(path) = &config.log_path else {
        return Ok(());
    };
    let file = File::create(path).with_context(|| format!("cannot open log file {path}"))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    log::info!(
        "config: {}x{} board, seed {}, mismatch delay {}ms",
        config.rows,
        config.cols,
        config.seed,
        config.mismatch_delay_ms
    );
    Ok(())
}

fn run(term: &mut TerminalRenderer, game: &mut GameState) -> Result<()> {
    let view = GameView::default();
    let mut cursor = Cursor::new();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();

    let tick_duration = Duration::from_millis(TICK_MS as u64);
    let mut last_tick = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);
        game.snapshot_into(&mut snap);
        view.render_into(&snap, Some(cursor.position()), viewport, &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        apply_action(game, &mut cursor, action);
                    }
                }
                Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                    if let Some(pos) = view.tile_at(&snap, viewport, mouse.column, mouse.row) {
                        cursor.set(pos, snap.rows, snap.cols);
                        game.select_tile(pos.row, pos.col);
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        let elapsed = last_tick.elapsed();
        if elapsed >= tick_duration {
            last_tick = Instant::now();
            game.advance(u32::try_from(elapsed.as_millis()).unwrap_or(u32::MAX));
        }

        for event in game.drain_events() {
            log_event(event);
        }
    }
}

fn apply_action(game: &mut GameState, cursor: &mut Cursor, action: UiAction) {
    let (rows, cols) = (game.board().rows(), game.board().cols());
    match action {
        UiAction::Move(dir) => cursor.step(dir, rows, cols),
        UiAction::Select => {
            let pos = cursor.position();
            game.select_tile(pos.row, pos.col);
        }
        UiAction::Restart => match game.restart() {
            Ok(()) => cursor.clamp(rows, cols),
            Err(err) => log::warn!("restart failed: {err}"),
        },
    }
}

fn log_event(event: GameEvent) {
    match event {
        GameEvent::GameWon {
            move_count,
            elapsed_seconds,
        } => log::info!("won in {move_count} moves, {elapsed_seconds}s"),
        other => log::debug!("{other:?}"),
    }
}
