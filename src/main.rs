//! Contact Form TUI - terminal contact form with live validation

use anyhow::Result;
use contact_form_tui::app::App;
use contact_form_tui::config::ContactFormConfig;
use contact_form_tui::ui;
use crossterm::{
    cursor::Show,
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::{self, File, OpenOptions};
use std::io;
use std::sync::Mutex;
use std::time::Duration;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const LOG_FILE_NAME: &str = "contact-form-tui.log";
const POLL_INTERVAL: Duration = Duration::from_millis(100);

fn main() -> Result<()> {
    let (config, config_error) = match ContactFormConfig::load() {
        Ok(config) => (config, None),
        Err(err) => (ContactFormConfig::default(), Some(err)),
    };

    init_logging(&config);
    if let Some(err) = config_error {
        tracing::warn!("Failed to load config, using defaults: {err:#}");
    }

    install_panic_hook();

    let result = {
        let _guard = TerminalGuard::enter()?;
        let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
        let mut app = App::new(&config);
        run_app(&mut terminal, &mut app)
    };

    // Handle any errors
    if let Err(err) = result {
        tracing::error!("Exiting after error: {err:?}");
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    Ok(())
}

/// Raw mode and the alternate screen, undone on drop
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode()?;
        if let Err(err) = execute!(io::stdout(), EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(err.into());
        }
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        restore_terminal();
    }
}

/// Best effort; also called from the panic hook
fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen, Show);
}

/// Restore the terminal before the default hook prints the panic message
fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        restore_terminal();
        tracing::error!("panic: {info}");
        default_hook(info);
    }));
}

/// Log to a file under the data dir; the alternate screen owns the terminal
fn init_logging(config: &ContactFormConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| config.log_filter().into());
    let registry = tracing_subscriber::registry().with(filter);

    match open_log_file() {
        Some(file) => registry
            .with(
                fmt::layer()
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
            .init(),
        None => registry.with(fmt::layer().with_writer(io::stderr)).init(),
    }
}

fn open_log_file() -> Option<File> {
    let dir = ContactFormConfig::log_dir()?;
    fs::create_dir_all(&dir).ok()?;
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join(LOG_FILE_NAME))
        .ok()
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    tracing::info!("contact form started");
    loop {
        terminal.draw(|frame| ui::draw(frame, app))?;

        if event::poll(POLL_INTERVAL)? {
            match event::read()? {
                // Windows reports releases too
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key)?,
                Event::Resize(_width, _height) => {
                    // Layout is recalculated on next draw
                }
                _ => {}
            }
        }

        if app.should_quit() {
            tracing::info!("contact form closed");
            return Ok(());
        }
    }
}
