//! TUI Views module
//!
//! Contains the filter bar, the roster list, the status bar and the help
//! overlay.

pub mod filter_bar;
pub mod help;
pub mod roster;
pub mod status_bar;

use ratatui::Frame;

use super::app::App;
use super::layout::{toast_rect, AppLayout};
use super::widgets::NotificationWidget;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &mut App) {
    let layout = AppLayout::new(frame.area());

    filter_bar::render(frame, app, layout.filter_bar);
    roster::render(frame, app, layout.roster);
    status_bar::render(frame, app, layout.status_bar);

    if let Some(notification) = app.notifications.current() {
        let area = toast_rect(44, 4, layout.roster);
        frame.render_widget(NotificationWidget::new(notification), area);
    }

    if app.show_help {
        help::render(frame);
    }
}
