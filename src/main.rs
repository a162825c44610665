//! A terminal dictionary: word of the day, search, and a grid of definitions.
//!
//! Run the binary to launch the interactive screen. Pass a word to look it up
//! immediately.

mod app;
mod config;
mod core;
mod ui;

use std::io::{self, Stdout};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{error, info};
use tracing_appender::{non_blocking::WorkerGuard, rolling};

use crate::app::{
    command::Command,
    controller::FetchController,
    event::{spawn_event_reader, AppEvent},
    handler,
    state::AppState,
};
use crate::config::AppConfig;
use crate::core::client::{DictionaryClient, HttpDictionaryClient};

// ───────────────────────────────────────── CLI ───────────────

#[derive(Parser, Debug)]
#[command(name = env!("CARGO_PKG_NAME"), version, about = "Terminal dictionary with a word of the day")]
struct Cli {
    /// Word to look up at startup.
    word: Option<String>,

    /// Dictionary API base URL (overrides the config file).
    #[arg(long)]
    api_url: Option<String>,

    /// Dictionary API key (overrides the config file and WORDGRID_API_KEY).
    #[arg(long)]
    api_key: Option<String>,

    /// Skip fetching a word of the day at startup.
    #[arg(long)]
    no_random: bool,

    /// Directory for log files.
    #[arg(long)]
    log_dir: Option<PathBuf>,

    /// Write the effective configuration to the config file and exit.
    #[arg(long)]
    write_config: bool,
}

type Tui = Terminal<CrosstermBackend<Stdout>>;

// ───────────────────────────────────────── logging ───────────

/// Log to a daily rolling file; the terminal belongs to the UI.
/// The returned guard must be held for the app lifetime.
fn init_logging(log_dir: &Path) -> Result<WorkerGuard> {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    std::fs::create_dir_all(log_dir)
        .with_context(|| format!("creating log directory {}", log_dir.display()))?;
    let file_appender = rolling::RollingFileAppender::builder()
        .rotation(rolling::Rotation::DAILY)
        .filename_prefix(env!("CARGO_PKG_NAME"))
        .filename_suffix("log")
        .build(log_dir)
        .context("opening log file")?;
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,wordgrid=debug"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    Ok(guard)
}

// ───────────────────────────────────────── terminal ──────────

fn setup_terminal() -> Result<Tui> {
    enable_raw_mode()?;
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

// ───────────────────────────────────────── event loop ────────

async fn run(
    terminal: &mut Tui,
    state: &mut AppState,
    client: Arc<dyn DictionaryClient>,
    initial_word: Option<String>,
    fetch_random: bool,
) -> Result<()> {
    let mut events = spawn_event_reader(Duration::from_millis(100));
    let (mut controller, mut updates) = FetchController::new(client);

    if fetch_random {
        controller.load_random_word(state);
    }
    if let Some(word) = initial_word {
        state.search_input = word.clone();
        controller.execute(state, Command::Search(Some(word)));
    }

    loop {
        terminal.draw(|frame| ui::draw(frame, state))?;

        tokio::select! {
            Some(event) = events.recv() => {
                match event {
                    AppEvent::Key(k) => {
                        if let Some(command) = handler::handle_key(state, k) {
                            controller.execute(state, command);
                        }
                    }
                    AppEvent::Resize => {}
                    AppEvent::Tick => state.tick = state.tick.wrapping_add(1),
                }
            }

            Some(update) = updates.recv() => {
                // Apply everything already queued before the next redraw.
                controller.apply(state, update);
                while let Ok(update) = updates.try_recv() {
                    controller.apply(state, update);
                }
            }

            else => break,
        }

        if state.should_quit {
            break;
        }
    }

    controller.shutdown();
    Ok(())
}

// ───────────────────────────────────────── main ─────────────

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_dir = cli.log_dir.clone().unwrap_or_else(config::default_log_dir);
    let _log_guard = match init_logging(&log_dir) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("warning: logging disabled: {e:#}");
            None
        }
    };
    info!(version = env!("CARGO_PKG_VERSION"), "starting");

    let mut user_config = AppConfig::load().with_api_key_override(cli.api_key.clone());
    if let Some(url) = cli.api_url.clone() {
        user_config.api.base_url = url;
    }
    if cli.write_config {
        let path = user_config.save()?;
        info!(path = %path.display(), "wrote config");
        println!("wrote {}", path.display());
        return Ok(());
    }
    if user_config.api.key.is_none() {
        info!("no API key configured; requests may be rejected");
    }
    let client: Arc<dyn DictionaryClient> =
        Arc::new(HttpDictionaryClient::new(&user_config.client_config())?);

    let mut state = AppState::new(user_config);
    let mut terminal = setup_terminal()?;

    let result = run(
        &mut terminal,
        &mut state,
        client,
        cli.word,
        !cli.no_random,
    )
    .await;

    // Always hand the terminal back, even when the loop failed.
    let restored = restore_terminal(&mut terminal);
    info!("exiting");
    merge_teardown(result, restored)
}

/// The loop's error wins; a restore failure is reported only when the loop
/// succeeded, and logged otherwise.
fn merge_teardown(result: Result<()>, restored: Result<()>) -> Result<()> {
    match (result, restored) {
        (Err(e), Err(restore_err)) => {
            error!(error = %format!("{restore_err:#}"), "failed to restore terminal");
            Err(e)
        }
        (Err(e), Ok(())) => Err(e),
        (Ok(()), restored) => restored,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[test]
    fn loop_error_survives_a_failed_restore() {
        let merged = merge_teardown(Err(anyhow!("draw failed")), Err(anyhow!("tty gone")));
        assert_eq!(merged.unwrap_err().to_string(), "draw failed");
    }

    #[test]
    fn restore_error_surfaces_after_a_clean_loop() {
        let merged = merge_teardown(Ok(()), Err(anyhow!("tty gone")));
        assert_eq!(merged.unwrap_err().to_string(), "tty gone");
        assert!(merge_teardown(Ok(()), Ok(())).is_ok());
    }

    #[test]
    fn cli_accepts_write_config() {
        let cli = Cli::try_parse_from(["wordgrid", "--write-config", "--api-url", "http://x"]).unwrap();
        assert!(cli.write_config);
        assert_eq!(cli.api_url.as_deref(), Some("http://x"));
        assert!(cli.word.is_none());
    }
}
