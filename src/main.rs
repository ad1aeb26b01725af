//! # Persona CLI Entry Point
//!
//! This is the main entry point for the Persona TUI application.
//!
//! ## Overview
//!
//! Persona asks a remote analysis server what a BlueSky account reveals about
//! its owner and shows the answer: an MBTI type, a spirit animal and a short
//! portrait, in Chinese, Japanese or English.
//!
//! ## Usage
//!
//! ```bash
//! # Interactive, against the default server (http://localhost:5000)
//! persona
//!
//! # Pick the server, language and pre-filled handle
//! persona --server https://persona.example --lang en --handle alice.bsky.social
//!
//! # One analysis without the TUI, printed to stdout
//! persona --print --handle alice.bsky.social
//!
//! # Save the effective settings to the config file
//! persona --lang cn --write-config
//! ```
//!
//! ## Key Bindings
//!
//! - Type - Edit the handle
//! - `Backspace` / `Ctrl+u` - Delete a character / clear the handle
//! - `Enter` - Analyze (ignored while an analysis is running)
//! - `Tab` - Next language
//! - `F1` / `F2` / `F3` - 中文 / 日本語 / English
//! - `Esc` / `Ctrl+c` - Quit
//!
//! While a notice is shown, `Enter` or `Esc` dismisses it.

use persona::analysis::{AnalysisService, HttpAnalysisService};
use persona::config::Config;
use persona::i18n::LanguageCode;
use persona::logging;
use persona::ui::{
    self, AnalysisRequestController, App, InteractionState, Rejection, RequestLifecycle,
};

use anyhow::{bail, Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io;
use std::panic;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// Trait for reading terminal events (allows dependency injection for testing)
trait EventReader {
    fn read_event(&mut self, timeout: Duration) -> Result<Option<Event>>;
}

/// Production event reader that uses crossterm's event polling + read
struct CrosstermEventReader;

impl EventReader for CrosstermEventReader {
    fn read_event(&mut self, timeout: Duration) -> Result<Option<Event>> {
        if event::poll(timeout).context("Failed to poll for events")? {
            Ok(Some(
                event::read().context("Failed to read keyboard event")?,
            ))
        } else {
            Ok(None)
        }
    }
}

/// Persona - MBTI type and spirit animal for a BlueSky handle
#[derive(Parser, Debug)]
#[command(name = "persona")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Reveal the personality behind a BlueSky handle", long_about = None)]
struct Args {
    /// Base URL of the analysis server
    #[arg(short, long, value_name = "URL")]
    server: Option<String>,

    /// Interface and analysis language
    #[arg(short, long, value_enum)]
    lang: Option<LanguageCode>,

    /// Handle to pre-fill (or to analyze with --print)
    #[arg(long, value_name = "HANDLE")]
    handle: Option<String>,

    /// Request timeout in seconds
    #[arg(long, value_name = "SECS")]
    timeout: Option<u64>,

    /// Path to the configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Path to the log file
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,

    /// Run one analysis without the TUI and print the result
    #[arg(long, conflicts_with = "write_config")]
    print: bool,

    /// Write the effective configuration to the config file and exit
    #[arg(long)]
    write_config: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse();

    let log_path = match args.log_file.clone() {
        Some(path) => Ok(path),
        None => logging::default_log_path(),
    };
    if let Err(e) = log_path.and_then(|path| logging::init(&path)) {
        eprintln!("Warning: Could not initialize logging: {}", e);
    }

    // Set up panic hook to ensure terminal is restored on panic
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        // Try to restore terminal state
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);

        // Call the original panic hook
        original_hook(panic_info);
    }));

    // Run the application and ensure cleanup happens
    let result = run_application(args).await;

    // Restore panic hook
    let _ = panic::take_hook();

    result
}

/// Load the config file and apply command-line overrides.
fn effective_config(args: &Args) -> Result<Config> {
    let mut config = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load(),
    };

    if let Some(server) = &args.server {
        config.server_url = server.clone();
    }
    if let Some(lang) = args.lang {
        config.language = lang;
    }
    if let Some(handle) = &args.handle {
        config.handle = handle.clone();
    }
    if let Some(timeout) = args.timeout {
        config.timeout_secs = timeout;
    }

    Ok(config)
}

async fn run_application(args: Args) -> Result<()> {
    let config = effective_config(&args)?;

    if args.write_config {
        let path = match args.config {
            Some(path) => path,
            None => Config::config_path()?,
        };
        config.save_to(&path)?;
        println!("Wrote configuration to {}", path.display());
        return Ok(());
    }

    let service = Arc::new(HttpAnalysisService::new(
        &config.server_url,
        config.timeout(),
    )?);
    tracing::info!(endpoint = %service.endpoint(), lang = %config.language, "starting");

    let state = InteractionState::new(config.handle, config.language);

    if args.print {
        return run_headless(service, state).await;
    }

    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode for terminal")?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to setup terminal")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let mut app = App::new(service, state);

    // Run the app and ensure cleanup happens even on error
    let mut event_reader = CrosstermEventReader;
    let run_result = run_app(&mut terminal, &mut app, &mut event_reader).await;

    // Restore terminal (always runs, even if run_app failed)
    let cleanup_result = cleanup_terminal(&mut terminal);

    // Return the first error that occurred, or Ok if both succeeded
    run_result?;
    cleanup_result?;

    Ok(())
}

/// Analyze the configured handle once and print the projected view.
async fn run_headless<S: AnalysisService>(service: Arc<S>, mut state: InteractionState) -> Result<()> {
    let controller = AnalysisRequestController::new(service);

    match controller.submit(&mut state).await {
        Ok(()) => {}
        Err(Rejection::EmptyHandle) => {
            let view = ui::project(&state);
            let message = view.notice.map(|n| n.text).unwrap_or_default();
            bail!("{}", message);
        }
        Err(Rejection::InFlight) => bail!("An analysis is already running"),
    }

    if let RequestLifecycle::Failed(message) = state.lifecycle() {
        bail!("{}", message);
    }

    let view = ui::project(&state);

    println!("{}", ui::view::plain_text(&view));
    Ok(())
}

/// Clean up terminal state
fn cleanup_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;

    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to restore terminal")?;

    terminal.show_cursor().context("Failed to show cursor")?;

    Ok(())
}

async fn run_app<B, S>(
    terminal: &mut Terminal<B>,
    app: &mut App<S>,
    event_reader: &mut dyn EventReader,
) -> Result<()>
where
    B: Backend,
    B::Error: Send + Sync + 'static,
    S: AnalysisService,
{
    loop {
        // Apply analyses that finished while we were waiting for input
        app.poll_completions();

        let view = app.view();
        let tick = app.tick;
        terminal
            .draw(|f| ui::render(f, &view, tick))
            .context("Failed to draw terminal UI")?;

        // Poll faster while busy so the spinner animates
        let poll_timeout = if app.state.is_busy() {
            Duration::from_millis(80)
        } else {
            Duration::from_millis(250)
        };

        let event = event_reader.read_event(poll_timeout)?;
        app.on_tick();

        if let Some(Event::Key(key)) = event {
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
