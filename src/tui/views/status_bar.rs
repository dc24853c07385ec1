//! Status bar view
//!
//! Shows the active filter, visible card count, pending timers and key hints

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::render::RenderTree;
use crate::tui::app::App;

/// Render the status bar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let page = app.page();
    let filter = app.controller.active_filter().unwrap_or_default();
    let visible = page.cards_in_layout().count();
    let total = page.card_ids().len();

    let mut spans = vec![
        Span::styled(" Filter: ", Style::default().fg(Color::White)),
        Span::styled(
            filter.caption(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" │ "),
        Span::styled(
            format!("{}/{} shown", visible, total),
            Style::default().fg(Color::White),
        ),
    ];

    let pending = app.controller.scheduler().pending();
    if pending > 0 {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(
            format!("{} timer(s)", pending),
            Style::default().fg(Color::Yellow),
        ));
    }

    let hints = " q:Quit  ?:Help  1-4:Filter  r:Remind  m:Paid ";

    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding_len = (area.width as usize)
        .saturating_sub(left_len)
        .saturating_sub(hints.len());
    spans.push(Span::raw(" ".repeat(padding_len.max(1))));
    spans.push(Span::styled(hints, Style::default().fg(Color::White)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
