//! Terminal dodge-game runner (default binary).
//!
//! Fixed-timestep scheduler loop: render the current snapshot, poll input
//! until the next tick deadline, then step the simulation by one tick.
//! A finished session is never stepped again; the loop keeps the final frame
//! on screen until a quit key.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_dodge::core::{GameSnapshot, GameState};
use tui_dodge::input::{handle_key_event, should_quit};
use tui_dodge::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_dodge::types::TICK_MS;

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// Seed the spawn RNG from the wall clock; everything below main takes an
/// explicit seed.
fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut game_state = GameState::new(clock_seed());
    game_state.start();

    let view = GameView::default();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render. The first pass paints the scene before any tick has run.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        game_state.snapshot_into(&mut snap);
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if should_quit(key) {
                        return Ok(());
                    }

                    if let Some(action) = handle_key_event(key) {
                        // No-op once the game is over; the guard lives in
                        // the state itself.
                        game_state.apply_action(action);
                    }
                }
            }
        }

        // Tick. After game over this is a no-op, so a deadline that lands
        // together with the ending frame cannot advance anything.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            game_state.tick(TICK_MS);
        }
    }
}
