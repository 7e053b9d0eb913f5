//! Terminal falling-block game (default binary).
//!
//! Fixed 50ms tick: render, poll at most one key without blocking, advance
//! gravity, sleep out the rest of the tick. No flags, no config file.

use std::thread;
use std::time::{Duration, Instant};

use anyhow::Result;
use log::{info, warn, LevelFilter};

use blockfall::core::{GameConfig, GameState, SimpleRng};
use blockfall::input::poll_action;
use blockfall::logging;
use blockfall::term::{final_message, FrameBuffer, GameView, TerminalRenderer, TerminalSession, Viewport};

fn main() -> Result<()> {
    let log_path = logging::default_log_path();
    if let Err(err) = logging::init(&log_path, LevelFilter::Debug) {
        // Playing without a log file is fine.
        eprintln!("blockfall: logging disabled: {err:#}");
    }

    let rng = SimpleRng::from_clock();
    info!("starting with seed {}", rng.state());
    let mut game = GameState::with_rng(rng, GameConfig::default());

    let session = TerminalSession::enter()?;
    let result = run(&mut game);
    // Restore before printing so the message lands on the normal screen.
    if let Err(err) = session.exit() {
        warn!("terminal restore failed: {err:#}");
    }
    result?;

    let snap = game.snapshot();
    println!("\n  {}\n", final_message(&snap));
    info!("exited: score={} lines={}", snap.score, snap.lines);
    Ok(())
}

fn run(game: &mut GameState) -> Result<()> {
    let view = GameView::default();
    let mut term = TerminalRenderer::new();
    let mut fb = FrameBuffer::new(0, 0);
    let tick = Duration::from_millis(game.config().tick_ms as u64);

    game.start();

    while !game.game_over() {
        let tick_start = Instant::now();

        draw(game, &view, &mut term, &mut fb)?;
        let action = poll_action()?;
        game.step(action);

        if let Some(rest) = tick.checked_sub(tick_start.elapsed()) {
            thread::sleep(rest);
        }
    }

    // Final frame with the GAME OVER overlay.
    term.invalidate();
    draw(game, &view, &mut term, &mut fb)?;
    // Let the overlay show before leaving the alternate screen.
    thread::sleep(Duration::from_millis(600));
    Ok(())
}

fn draw(
    game: &GameState,
    view: &GameView,
    term: &mut TerminalRenderer,
    fb: &mut FrameBuffer,
) -> Result<()> {
    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    view.render_into(&game.snapshot(), Viewport::new(w, h), fb);
    term.draw_swap(fb)
}
