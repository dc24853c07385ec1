//! Event handler for the TUI
//!
//! Routes keyboard events to the app based on the current state.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::models::{ActionKind, FilterCategory};

use super::app::App;
use super::event::Event;
use super::widgets::Notification;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick => Ok(()),
        Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return Ok(());
    }

    // Help overlay swallows everything but its own toggles
    if app.show_help {
        if matches!(key.code, KeyCode::Char('?') | KeyCode::Esc | KeyCode::Char('q')) {
            app.toggle_help();
        }
        return Ok(());
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        KeyCode::Char('?') => app.toggle_help(),
        KeyCode::Char('s') => match app.save_page() {
            Ok(()) => app.notifications.push(Notification::success(format!(
                "Page saved to {}",
                app.paths.page_file().display()
            ))),
            Err(e) => app.notifications.push(Notification::error(e.to_string())),
        },

        // Filters
        KeyCode::Char('1') => app.apply_filter(FilterCategory::All),
        KeyCode::Char('2') => app.apply_filter(FilterCategory::Paid),
        KeyCode::Char('3') => app.apply_filter(FilterCategory::Pending),
        KeyCode::Char('4') => app.apply_filter(FilterCategory::Unpaid),
        KeyCode::Tab => app.cycle_filter(),

        // Navigation
        KeyCode::Char('j') | KeyCode::Down => app.move_down(),
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),
        KeyCode::Enter | KeyCode::Char(' ') => app.activate(),

        // Card actions
        KeyCode::Char('r') => app.press_action(ActionKind::Reminder),
        KeyCode::Char('m') => app.press_action(ActionKind::MarkPaid),

        _ => {}
    }

    Ok(())
}
