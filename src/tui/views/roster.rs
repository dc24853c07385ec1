//! Roster view
//!
//! Month sections with their student cards. Cards that are fading render
//! dimmed until they settle or leave layout.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

use crate::models::{ActionButton, Card, MonthSection, PaymentStatus, Swatch};
use crate::render::{Page, RenderTree};
use crate::tui::app::{App, RosterRow};

pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let page = app.page();
    let selected_card = app.controller.selected_card();

    let items: Vec<ListItem> = app
        .rows()
        .into_iter()
        .filter_map(|row| match row {
            RosterRow::Section(id) => page.section(id).map(|s| section_item(page, s)),
            RosterRow::Card(id) => page
                .card(id)
                .map(|c| card_item(page, c, selected_card == Some(c.id))),
        })
        .collect();

    let block = Block::default()
        .title(" Students ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("▶ ");

    let mut state = ListState::default()
        .with_selected(Some(app.selected_index))
        .with_offset(app.scroll_offset);

    frame.render_stateful_widget(list, area, &mut state);
    app.scroll_offset = state.offset();
}

fn section_item<'a>(page: &Page, section: &'a MonthSection) -> ListItem<'a> {
    let summary = page.section_summary(section.id);
    let icon = if section.icon_rotated { "▾" } else { "▸" };

    ListItem::new(Line::from(vec![
        Span::styled(
            format!("{} {:<12}", icon, section.title),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(
                " paid {}  pending {}  unpaid {}",
                summary.paid, summary.pending, summary.unpaid
            ),
            Style::default().fg(Color::Gray),
        ),
    ]))
}

fn status_color(status: Option<PaymentStatus>) -> Color {
    match status {
        Some(PaymentStatus::Paid) => Color::Green,
        Some(PaymentStatus::Pending) => Color::Yellow,
        Some(PaymentStatus::Unpaid) => Color::Red,
        None => Color::Gray,
    }
}

fn swatch_color(swatch: Swatch) -> Color {
    match swatch {
        Swatch::Success => Color::Green,
        Swatch::White => Color::White,
    }
}

fn button_span(button: &ActionButton) -> Span<'static> {
    let mut style = Style::default().fg(Color::Cyan);
    if let Some(bg) = button.style.background {
        style = style.bg(swatch_color(bg)).fg(Color::Black);
    }
    if let Some(fg) = button.style.foreground {
        style = style.fg(swatch_color(fg));
    }
    if button.style.border.is_some() {
        style = style.add_modifier(Modifier::BOLD);
    }
    Span::styled(format!("[{}]", button.face), style)
}

fn card_item<'a>(page: &Page, card: &'a Card, selected: bool) -> ListItem<'a> {
    let status = card.badge.as_ref().and_then(|badge| badge.status());
    let badge_text = card
        .badge
        .as_ref()
        .map(|badge| badge.text.as_str())
        .unwrap_or("");

    let marker = if selected { "● " } else { "  " };
    let mut spans = vec![
        Span::raw(format!("  {}", marker)),
        Span::styled(format!("{:<24}", card.name), Style::default().fg(Color::White)),
        Span::styled(
            format!("{:<10}", badge_text),
            Style::default().fg(status_color(status)),
        ),
    ];
    for button in page.buttons_for(card.id) {
        spans.push(Span::raw(" "));
        spans.push(button_span(button));
    }

    let mut line = Line::from(spans);
    if card.visual.opacity < 1.0 {
        for span in line.spans.iter_mut() {
            span.style = span.style.fg(Color::DarkGray);
        }
    }
    ListItem::new(line)
}
