//! Terminal runner (default binary).
//!
//! Frame-driven host loop: poll input until the next frame is due, forward
//! intents to the engine, tick it with a monotonic timestamp, then render a
//! snapshot. Configuration comes from `STACKFALL_*` environment variables.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event};

use stackfall::config::AppConfig;
use stackfall::core::{GameSnapshot, GameState};
use stackfall::event_log::FileEventLog;
use stackfall::input::{handle_key_event, should_quit};
use stackfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

fn main() -> Result<()> {
    let config = AppConfig::from_env();

    let mut log = match config.log_path.as_deref().map(FileEventLog::open) {
        Some(Ok(log)) => Some(log),
        Some(Err(err)) => {
            eprintln!("[stackfall] event log disabled: {err:#}");
            None
        }
        None => None,
    };

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config, log.as_mut());

    // Always try to restore terminal state.
    if let Err(err) = term.exit() {
        eprintln!("[stackfall] failed to restore terminal: {err:#}");
    }
    if let Some(log) = log.as_mut() {
        if let Err(err) = log.flush() {
            eprintln!("[stackfall] {err:#}");
        }
    }
    if let Err(err) = &result {
        eprintln!("[stackfall] {err:#}");
    }
    result
}

fn run(term: &mut TerminalRenderer, config: &AppConfig, mut log: Option<&mut FileEventLog>) -> Result<()> {
    let clock = Instant::now();
    let now_ms = || clock.elapsed().as_millis() as u64;

    let mut game = GameState::new(config.game);
    let start = now_ms();
    if let Some(log) = log.as_deref_mut() {
        log.start_session(start, &game)?;
    }
    let anchored = game.tick(start);
    if let Some(log) = log.as_deref_mut() {
        log.record_tick(start, anchored)?;
    }

    let view = GameView::default();
    let mut snapshot = GameSnapshot::default();
    let mut fb = FrameBuffer::default();

    let frame = Duration::from_millis(config.frame_ms);
    let mut last_frame = Instant::now();

    loop {
        // Render.
        game.snapshot_into(&mut snapshot);
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&snapshot, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        // Input until the next frame is due.
        let mut timeout = frame.saturating_sub(last_frame.elapsed());
        while event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(intent) = handle_key_event(key) {
                        let applied = game.apply_intent(intent);
                        if let Some(log) = log.as_deref_mut() {
                            let ts = now_ms();
                            log.record_intent(ts, intent, applied)?;
                            log.observe(ts, &mut game)?;
                        }
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
            timeout = frame.saturating_sub(last_frame.elapsed());
        }

        // Tick.
        last_frame = Instant::now();
        let ts = now_ms();
        let changed = game.tick(ts);
        if let Some(log) = log.as_deref_mut() {
            log.record_tick(ts, changed)?;
            log.observe(ts, &mut game)?;
        }
    }
}
