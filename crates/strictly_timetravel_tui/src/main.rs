//! Strictly Timetravel - terminal front end
//!
//! Interactive tic-tac-toe with a jumpable move history, plus a headless
//! `replay` command for scripting.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod input;
mod replay;
mod settings;
mod ui;

use anyhow::Result;
use app::App;
use clap::Parser;
use cli::{Cli, Command};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use settings::Settings;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{error, info, instrument};
use tracing_subscriber::{EnvFilter, fmt::MakeWriter};

const DEFAULT_FILTER: &str = "info,strictly_timetravel=debug";

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let settings = load_settings(&cli.config, env_filter(), io::stderr)?;
    let settings = if cli.report_draws {
        settings.with_report_draws(true)
    } else {
        settings
    };

    match cli.command.unwrap_or(Command::Play {
        log_file: None,
        no_hints: false,
    }) {
        Command::Play { log_file, no_hints } => run_play(settings, log_file, no_hints),
        Command::Replay { actions, json } => run_replay(settings, &actions, json),
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Load settings with a temporary subscriber in scope.
///
/// The command's own subscriber depends on the settings (the log file), so
/// it can only be installed afterwards.
fn load_settings<W>(path: &Path, filter: EnvFilter, writer: W) -> Result<Settings>
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .finish();

    let settings = tracing::subscriber::with_default(subscriber, || Settings::load(path))?;
    Ok(settings)
}

/// Run `enter`; if it fails, call `abort` to undo any partial setup.
fn enter_or_abort<T>(enter: impl FnOnce() -> io::Result<T>, abort: impl FnOnce()) -> io::Result<T> {
    enter().inspect_err(|_| abort())
}

fn open_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enter_or_abort(
        || {
            enable_raw_mode()?;
            let mut stdout = io::stdout();
            execute!(stdout, EnterAlternateScreen)?;
            Terminal::new(CrosstermBackend::new(stdout))
        },
        || {
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            let _ = disable_raw_mode();
        },
    )
}

/// Run the interactive terminal UI
fn run_play(settings: Settings, log_file: Option<PathBuf>, no_hints: bool) -> Result<()> {
    let settings = match log_file {
        Some(path) => settings.with_log_file(path),
        None => settings,
    };
    let settings = if no_hints {
        settings.with_show_hints(false)
    } else {
        settings
    };

    // Log to a file so output doesn't interfere with the TUI
    let log = std::fs::File::create(settings.log_file())?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::sync::Arc::new(log))
        .with_ansi(false)
        .try_init();

    info!(?settings, "Starting Strictly Timetravel TUI");

    let mut terminal = open_terminal()?;

    let mut app = App::new(settings);
    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("Exiting");
    res
}

/// Draw, wait for a key, dispatch it; until the user quits.
#[instrument(skip_all)]
fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    while !app.should_quit() {
        terminal.draw(|f| ui::draw(f, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                app.handle_key(key.code)?;
            }
        }
    }
    Ok(())
}

/// Run the headless replay command
fn run_replay(settings: Settings, actions: &[String], json: bool) -> Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(io::stderr)
        .try_init();

    replay::run(actions, json, &settings)
}
