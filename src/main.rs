//! Terminal Snake runner (default binary).
//!
//! Reads single keypresses in raw mode, ticks the engine every `TICK_MS`, and
//! redraws the whole screen through the framebuffer renderer whenever the
//! picture changes.

use std::fs::File;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use crossterm::terminal;
use simplelog::{Config, LevelFilter, WriteLogger};

use tui_snake::core::{Game, GameEvent, GameSnapshot};
use tui_snake::input::{handle_key_event, replay_answer, should_quit};
use tui_snake::term::{
    install_panic_hook, FrameBuffer, GameView, TerminalGuard, TerminalRenderer, Viewport,
};
use tui_snake::types::TICK_MS;

const LOG_FILE: &str = "tui-snake.log";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Restarted,
    Quit,
}

fn main() -> Result<()> {
    init_logging();
    install_panic_hook();

    let mut term = TerminalGuard::acquire()?;
    let result = run(&mut term);
    if let Err(e) = &result {
        log::error!("game loop failed: {e:#}");
    }

    let restored = term.release();
    result?;
    restored
}

/// Log to a file in the temp dir; stdout belongs to the game screen.
fn init_logging() {
    let path = std::env::temp_dir().join(LOG_FILE);
    match File::create(&path) {
        Ok(file) => {
            let _ = WriteLogger::init(LevelFilter::Info, Config::default(), file);
        }
        Err(e) => eprintln!("logging disabled ({}): {e}", path.display()),
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let seed = clock_seed();
    log::info!("session start (seed {seed})");

    let mut game = Game::new(seed);
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();
    let mut drawn: Option<(u64, Viewport)> = None;

    let tick_duration = Duration::from_millis(TICK_MS as u64);
    let mut last_tick = Instant::now();

    loop {
        // Render only when the picture or the terminal size changed.
        game.snapshot_into(&mut snap);
        let (w, h) = terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);
        let key = (snap.fingerprint(), viewport);
        if drawn != Some(key) {
            view.render_into(&snap, viewport, &mut fb);
            term.draw(&fb)?;
            drawn = Some(key);
        }

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    match handle_key(&mut game, key) {
                        Flow::Continue => {}
                        Flow::Restarted => last_tick = Instant::now(),
                        Flow::Quit => {
                            log::info!("quit at score {}", game.score());
                            return Ok(());
                        }
                    }
                }
                Event::Resize(..) => {
                    term.invalidate();
                    drawn = None;
                }
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            game.tick();
        }

        log_event(&mut game);
    }
}

fn handle_key(game: &mut Game, key: KeyEvent) -> Flow {
    if game.is_running() {
        if should_quit(key) {
            return Flow::Quit;
        }
        if let Some(action) = handle_key_event(key) {
            game.apply_action(action);
        }
        return Flow::Continue;
    }

    // Intro screen: any key except quit starts the first round.
    if game.episode_id() == 0 {
        if should_quit(key) {
            return Flow::Quit;
        }
        game.restart();
        return Flow::Restarted;
    }

    match replay_answer(key) {
        Some(true) => {
            game.restart();
            Flow::Restarted
        }
        Some(false) => Flow::Quit,
        None => Flow::Continue,
    }
}

fn log_event(game: &mut Game) {
    match game.take_last_event() {
        Some(GameEvent::Started { episode }) => log::info!("round {episode} started"),
        Some(GameEvent::Ended {
            episode,
            score,
            reason,
        }) => log::info!("round {episode} ended: {} (score {score})", reason.as_str()),
        None => {}
    }
}
