//! Emoji Tic-Tac-Toe - terminal renderer
//!
//! Draws a [`GameEngine`](emoji_tictactoe::GameEngine) with emoji markers,
//! highlights the winning line, and throws confetti on a win.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod config;
mod confetti;
mod input;
mod ui;

use anyhow::{Context, Result};
use app::App;
use clap::Parser;
use cli::Cli;
use config::TuiConfig;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::time::Instant;
use tracing::{error, info, instrument};
use tracing_subscriber::EnvFilter;

type Tui = Terminal<CrosstermBackend<Stdout>>;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = cli.load_config()?;
    init_tracing(&config)?;

    info!("Starting Emoji Tic-Tac-Toe");

    let mut terminal = setup_terminal()?;
    let mut app = App::new(config);
    let res = run_app(&mut terminal, &mut app);
    restore_terminal(&mut terminal)?;

    let snapshot = serde_json::to_string(&app.engine().snapshot())?;
    info!(%snapshot, "Exiting");

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

/// Logs to a file so output does not interfere with the TUI.
fn init_tracing(config: &TuiConfig) -> Result<()> {
    let logging = config.logging();
    let log_file = std::fs::File::create(logging.file())
        .with_context(|| format!("Failed to create log file {}", logging.file().display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(logging.filter())),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

fn setup_terminal() -> Result<Tui> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

fn restore_terminal(terminal: &mut Tui) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

#[instrument(skip_all)]
fn run_app(terminal: &mut Tui, app: &mut App) -> Result<()> {
    let tick = app.config().animation().tick();

    while !app.should_quit() {
        let now = Instant::now();
        app.tick(now);
        terminal.draw(|f| ui::draw(f, app, now))?;

        if event::poll(tick)?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key.code, Instant::now());
        }
    }

    info!("User quit");
    Ok(())
}
