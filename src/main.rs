//! Terminal runner (default binary).
//!
//! Drives the core from a single loop: crossterm key events feed
//! `apply_action`, and the gravity deadline from the game's own timer feeds
//! `gravity_tick`. Rendering happens only when the host state changed.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use blockfall::core::Game;
use blockfall::input::{handle_key_event, should_quit, should_restart};
use blockfall::term::{LoopTimer, StageView, TermHost, TermScreen, Viewport};

fn main() -> Result<()> {
    let mut screen = TermScreen::new();
    screen.enter()?;

    let result = run(&mut screen);

    // Always try to restore terminal state.
    let _ = screen.exit();
    result
}

fn run(screen: &mut TermScreen) -> Result<()> {
    let view = StageView::default();
    let mut game = new_session();
    let mut last_tick = Instant::now();
    let mut force_draw = true;

    loop {
        if force_draw || game.renderer_mut().take_dirty() {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            let fb = view.render(game.renderer(), Viewport::new(w, h));
            screen.draw(&fb)?;
            force_draw = false;
        }

        // Poll input until the next gravity deadline. With the timer
        // cancelled (game over) there is no deadline, only input.
        let timeout = match game.timer().interval_ms() {
            Some(ms) => Duration::from_millis(ms as u64)
                .checked_sub(last_tick.elapsed())
                .unwrap_or(Duration::ZERO),
            None => Duration::from_millis(50),
        };

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if game.is_over() {
                        if should_restart(key) {
                            game = new_session();
                            last_tick = Instant::now();
                            force_draw = true;
                        }
                    } else if let Some(action) = handle_key_event(key) {
                        game.apply_action(action);
                    }
                }
                Event::Resize(..) => {
                    screen.invalidate();
                    force_draw = true;
                }
                _ => {}
            }
        }

        if let Some(ms) = game.timer().interval_ms() {
            if last_tick.elapsed() >= Duration::from_millis(ms as u64) {
                last_tick = Instant::now();
                game.gravity_tick();
            }
        }
    }
}

fn new_session() -> Game<TermHost, LoopTimer> {
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or(1);
    let mut game = Game::new(seed, TermHost::new(), LoopTimer::new());
    game.start();
    game
}
