//! Terminal setup and teardown
//!
//! This module handles initializing and restoring the terminal state,
//! including setting up the panic hook to restore the terminal on crash.

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::panic;
use std::time::Duration;

use crate::config::paths::KioskPaths;
use crate::config::settings::Settings;
use crate::journal::JournalLogger;

use super::app::App;
use super::event::EventHandler;
use super::handler::handle_event;

/// Type alias for our terminal
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Fastest tick the kiosk accepts from settings
const MIN_TICK_MS: u64 = 16;

/// Initialize the terminal for TUI mode
pub fn init_terminal() -> Result<Tui> {
    // Restore the terminal before the panic message is printed
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal_impl();
        original_hook(panic_info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;

    Ok(terminal)
}

/// Restore the terminal to its original state
pub fn restore_terminal() -> Result<()> {
    restore_terminal_impl()?;
    Ok(())
}

fn restore_terminal_impl() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Tick interval from settings, floored at `MIN_TICK_MS`
pub fn tick_rate(settings: &Settings) -> Duration {
    Duration::from_millis(settings.tick_rate_ms.max(MIN_TICK_MS))
}

/// Run the kiosk until the citizen quits
pub fn run_tui(settings: Settings, paths: &KioskPaths) -> Result<()> {
    let journal = settings
        .journal_enabled
        .then(|| JournalLogger::new(paths.journal_file()));
    let events = EventHandler::new(tick_rate(&settings));
    let mut app = App::new(settings, journal);

    let mut terminal = init_terminal()?;
    let result = event_loop(&mut terminal, &mut app, &events);

    // Restore even when the loop failed, then report the first error
    let restored = restore_terminal();
    result?;
    restored
}

fn event_loop(terminal: &mut Tui, app: &mut App, events: &EventHandler) -> Result<()> {
    while !app.should_quit {
        terminal.draw(|frame| super::views::render(frame, app))?;
        handle_event(app, events.next()?)?;
    }
    Ok(())
}
