use std::{
    fs::File,
    io::{stdout, Stdout},
    time::{Duration, Instant},
};

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, Terminal};

use blockfall::config::FRAME_MS;
use blockfall::game::{GameAction, GameSession};
use blockfall::input::{map_key, should_quit};
use blockfall::render::render;

const LOG_FILE: &str = "blockfall.log";

// ============================================================================
// Logging
// ============================================================================

/// Logs go to a file so they never land on the alternate screen. Nothing is
/// installed unless `RUST_LOG` is set.
fn init_logging() -> Result<()> {
    if std::env::var_os("RUST_LOG").is_none() {
        return Ok(());
    }
    let file = File::create(LOG_FILE).with_context(|| format!("creating {LOG_FILE}"))?;
    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()
        .context("installing logger")?;
    Ok(())
}

// ============================================================================
// Main Loop
// ============================================================================

fn run(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    let mut game = GameSession::new();
    let frame = Duration::from_millis(FRAME_MS);
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|f| render(f, &game))?;

        let timeout = frame.checked_sub(last_tick.elapsed()).unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if should_quit(key) {
                        return Ok(());
                    }
                    match map_key(key.code) {
                        Some(GameAction::Restart) => game.restart(),
                        Some(action) if game.is_running() => game.apply(action),
                        _ => {}
                    }
                }
            }
        }

        let elapsed = last_tick.elapsed();
        if elapsed >= frame {
            game.tick(elapsed.as_millis() as u64);
            last_tick = Instant::now();
        }

        for event in game.take_events() {
            log::debug!("{event:?}");
        }
    }
}

fn main() -> Result<()> {
    init_logging()?;
    log::info!("starting blockfall");

    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    let result = run(&mut terminal);

    // Always try to restore terminal state.
    let _ = disable_raw_mode();
    let _ = stdout().execute(LeaveAlternateScreen);
    result
}
