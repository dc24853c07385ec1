//! Layout definitions for the TUI
//!
//! Defines the overall layout structure: filter bar, roster list, status bar.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions for the TUI
pub struct AppLayout {
    /// Filter buttons along the top
    pub filter_bar: Rect,
    /// Month sections and cards
    pub roster: Rect,
    /// Status bar at the bottom
    pub status_bar: Rect,
}

impl AppLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Filter bar
                Constraint::Min(3),    // Roster
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        Self {
            filter_bar: vertical[0],
            roster: vertical[1],
            status_bar: vertical[2],
        }
    }
}

/// Create a centered rect for overlays
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Area for a toast in the top-right corner
pub fn toast_rect(width: u16, height: u16, r: Rect) -> Rect {
    let width = width.min(r.width);
    let height = height.min(r.height);
    Rect::new(r.x + r.width - width, r.y, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_splits_full_area() {
        let layout = AppLayout::new(Rect::new(0, 0, 80, 24));
        assert_eq!(layout.filter_bar.height, 3);
        assert_eq!(layout.status_bar.height, 1);
        assert_eq!(layout.roster.height, 20);
    }

    #[test]
    fn test_toast_rect_fits() {
        let area = Rect::new(0, 0, 30, 4);
        let toast = toast_rect(40, 3, area);
        assert_eq!(toast.width, 30);
        assert_eq!(toast.x, 0);
    }
}
