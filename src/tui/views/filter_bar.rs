//! Filter bar view
//!
//! One button per category; the active one is highlighted.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::render::RenderTree;
use crate::tui::app::App;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = Vec::new();

    for (i, button) in app.page().filter_buttons().iter().enumerate() {
        let style = if button.active {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        spans.push(Span::styled(
            format!(" {} {} ", i + 1, button.category.caption()),
            style,
        ));
        spans.push(Span::raw("  "));
    }

    let block = Block::default()
        .title(" Payments ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White));

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}
