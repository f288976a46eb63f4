//! Terminal falling blocks runner (default binary).
//!
//! One loop iteration is one engine tick: render, wait for a key until the tick
//! deadline, sleep out the rest of the tick, then feed the resulting command (or
//! `Command::None`) to the engine.

use std::fs::File;
use std::sync::Mutex;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use tracing::info;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

use falling_blocks::core::{Game, GameConfig, SimpleRng};
use falling_blocks::input::{map_key, should_quit, TickClock};
use falling_blocks::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use falling_blocks::types::{Command, DEFAULT_TICK_US};

fn main() -> Result<()> {
    init_logging()?;

    let config = GameConfig::from_env();
    let seed = config.seed.unwrap_or_else(clock_seed);
    let mut game = Game::new(config, SimpleRng::new(seed)).context("invalid game configuration")?;
    info!(rows = config.rows, cols = config.cols, seed, "starting game");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut game);

    // Always try to restore terminal state.
    let _ = term.exit();
    result?;

    info!(score = game.score(), lines = game.lines_cleared(), "game finished");
    println!("Final score: {}", game.score());
    Ok(())
}

fn run(term: &mut TerminalRenderer, game: &mut Game<SimpleRng>) -> Result<()> {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut clock = TickClock::new(tick_duration(), Instant::now());

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(game, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        if game.is_game_over() {
            return Ok(());
        }

        let mut command = Command::None;
        if event::poll(clock.remaining(Instant::now()))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    command = map_key(key).unwrap_or_default();
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // One key per tick; the rest of the period is slept out.
        let rest = clock.remaining(Instant::now());
        if !rest.is_zero() {
            std::thread::sleep(rest);
        }
        clock.advance(Instant::now());
        game.tick(command);
    }
}

fn tick_duration() -> Duration {
    let micros = std::env::var("FALLING_BLOCKS_TICK_US")
        .ok()
        .and_then(|s| s.trim().parse::<u64>().ok())
        .filter(|&us| us > 0)
        .unwrap_or(DEFAULT_TICK_US);
    Duration::from_micros(micros)
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

/// Stderr shares the terminal with the game screen, so logs only go to a file.
fn init_logging() -> Result<()> {
    let Ok(path) = std::env::var("FALLING_BLOCKS_LOG_PATH") else {
        return Ok(());
    };
    let file = File::create(&path).with_context(|| format!("cannot open log file {path}"))?;
    let filter = std::env::var("FALLING_BLOCKS_LOG")
        .ok()
        .and_then(|level| EnvFilter::try_new(level).ok())
        .unwrap_or_else(|| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .with(filter)
        .init();
    Ok(())
}
