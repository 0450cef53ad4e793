//! Rewind - terminal tic-tac-toe with time travel.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use rewind_tui::{App, Cli, RestoreGuard, TuiConfig, restore_terminal};
use std::io;
use tracing::{error, info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => TuiConfig::from_file(path)?,
        None => TuiConfig::default(),
    }
    .with_overrides(cli.descending, cli.log_file.clone());

    init_tracing(&config)?;
    info!(?config, "Starting rewind");

    run(&config)
}

/// Sends logs to a file so they do not interfere with the TUI.
fn init_tracing(config: &TuiConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file()).with_context(|| {
        format!("Failed to create log file {}", config.log_file().display())
    })?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    Ok(())
}

#[instrument(skip_all)]
fn run(config: &TuiConfig) -> Result<()> {
    enable_raw_mode()?;
    let _restore = RestoreGuard::new(restore_terminal);
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config.list_order());
    let res = event_loop(&mut terminal, &mut app);

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!(moves = app.engine().history().len() - 1, "Exiting");

    res
}

fn event_loop(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    while !app.should_quit() {
        let entries = app.entries()?;
        terminal.draw(|frame| rewind_tui::draw(frame, app, &entries))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key.code)?;
        }
    }
    Ok(())
}
