//! Terminal snake runner (default binary).
//!
//! One frame: poll input without blocking, advance the session, render, then
//! sleep out the rest of the frame. Logs go to a file because the terminal
//! belongs to the renderer.

use std::env;
use std::fs::File;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use simplelog::{Config, LevelFilter, WriteLogger};

use tui_snake::core::{GameSession, SnakeConfig};
use tui_snake::input::{InputSource, TerminalInput};
use tui_snake::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_snake::types::{SessionState, FRAME_MS};

const DEFAULT_LOG_PATH: &str = "tui-snake.log";

fn main() -> Result<()> {
    init_logging()?;

    let config = SnakeConfig::from_env().context("invalid snake configuration")?;
    let mut session = GameSession::new(config).context("failed to create game session")?;
    log::info!("starting tui-snake (seed {})", session.seed());

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut session);

    // Always try to restore terminal state.
    let _ = term.exit();

    match &result {
        Ok(()) => log::info!("exiting after {} game(s)", session.games_started()),
        Err(err) => log::error!("exiting on error: {err:#}"),
    }
    result
}

fn init_logging() -> Result<()> {
    let path = env::var("SNAKE_LOG_PATH").unwrap_or_else(|_| DEFAULT_LOG_PATH.to_string());
    let level = match env::var("SNAKE_LOG_LEVEL") {
        Ok(raw) => raw
            .parse::<LevelFilter>()
            .with_context(|| format!("invalid SNAKE_LOG_LEVEL {raw:?}"))?,
        Err(_) => LevelFilter::Info,
    };

    let file = File::create(&path).with_context(|| format!("cannot create log file {path}"))?;
    WriteLogger::init(level, Config::default(), file).context("logger already initialized")?;
    Ok(())
}

fn run(term: &mut TerminalRenderer, session: &mut GameSession) -> Result<()> {
    let view = GameView::default();
    let mut input = TerminalInput::new();
    let mut fb = FrameBuffer::new(0, 0);

    let frame_budget = Duration::from_millis(FRAME_MS as u64);
    let mut last_frame = Instant::now();

    loop {
        let started = Instant::now();
        let elapsed_ms = u32::try_from(started.duration_since(last_frame).as_millis())
            .unwrap_or(u32::MAX);
        last_frame = started;

        let event = input.poll_event()?;
        for e in session.frame(event, elapsed_ms)? {
            log::debug!("{e:?}");
        }

        if session.state() == SessionState::Exit {
            return Ok(());
        }

        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(session, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        if let Some(rest) = frame_budget.checked_sub(started.elapsed()) {
            thread::sleep(rest);
        }
    }
}
