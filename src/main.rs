//! Terminal memory-game runner (default binary).
//!
//! One frame per tick: poll input, render, advance the session by the
//! elapsed real time. The session keeps rendering after the win (frozen
//! score, end banner) until the player quits.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event};

use tui_memory::core::GameSession;
use tui_memory::input::map_event;
use tui_memory::term::{FrameBuffer, GameView, SpriteAtlas, TerminalRenderer, Viewport};
use tui_memory::types::{GameEvent, TICK_MS};

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut session = GameSession::new(entropy_seed());

    // Resolve face artwork up front; a board the atlas cannot draw aborts
    // here, before the frame loop starts.
    let atlas = SpriteAtlas::for_board(session.board())?;
    let view = GameView::new(atlas);

    let mut fb = FrameBuffer::new(0, 0);
    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&session, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until the next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            let raw = event::read()?;
            if let Event::Resize(..) = raw {
                term.invalidate();
            }
            match map_event(&raw) {
                Some(GameEvent::Quit) => return Ok(()),
                Some(ev) => session.handle_event(ev),
                None => {}
            }
        }

        // Tick with the real elapsed time, so score and the mismatch delay
        // stay correct under frame-rate variation.
        let elapsed = last_tick.elapsed();
        if elapsed >= tick_duration {
            last_tick = Instant::now();
            session.update(elapsed.as_millis() as u32);
        }
    }
}

/// Seed the shuffle from wall-clock time, one layout per run.
fn entropy_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u32)
        .unwrap_or(1)
}
