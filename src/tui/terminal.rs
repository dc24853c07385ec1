//! Terminal setup and teardown
//!
//! This module handles initializing and restoring the terminal state,
//! including setting up the panic hook to restore the terminal on crash.

use anyhow::Result;
use chrono::Local;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::panic;
use std::time::Instant;
use tracing::info;

use crate::config::{RosterPaths, Settings};
use crate::error::RosterError;
use crate::render::Page;

use super::app::App;
use super::event::{Event, EventHandler};
use super::handler::handle_event;

/// Type alias for our terminal
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initialize the terminal for TUI mode
pub fn init_terminal() -> Result<Tui> {
    // Set up panic hook to restore terminal on panic
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

/// Run the TUI application
pub fn run_tui(page: Page, settings: &Settings, paths: &RosterPaths) -> Result<()> {
    let mut terminal = init_terminal()?;

    let mut app = App::new(page, settings, paths, Local::now().date_naive());
    let events = EventHandler::new(settings.tick_rate());
    let mut last_tick = Instant::now();
    info!("TUI started");

    let outcome: Result<()> = loop {
        if let Err(e) = terminal.draw(|frame| super::views::render(frame, &mut app)) {
            break Err(e.into());
        }

        let event = match events.next() {
            Ok(event) => event,
            Err(e) => break Err(RosterError::Tui(format!("Event channel closed: {}", e)).into()),
        };

        if let Event::Tick = event {
            let now = Instant::now();
            app.tick(now.duration_since(last_tick));
            last_tick = now;
        }
        if let Err(e) = handle_event(&mut app, event) {
            break Err(e);
        }

        if app.should_quit {
            break Ok(());
        }
    };

    restore_terminal()?;
    info!("TUI stopped");

    outcome
}
