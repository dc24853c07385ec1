//! Roster display formatting
//!
//! Formats cards and month sections for terminal output.

use crate::models::{Card, SectionId};
use crate::render::{Page, RenderTree};

fn status_text(card: &Card) -> &str {
    match &card.badge {
        Some(badge) if !badge.text.is_empty() => &badge.text,
        _ => "-",
    }
}

fn section_title<'a>(page: &'a Page, card: &Card) -> &'a str {
    card.section
        .and_then(|id| page.section(id))
        .map(|section| section.title.as_str())
        .unwrap_or("")
}

fn actions_text(page: &Page, card: &Card) -> String {
    page.buttons_for(card.id)
        .map(|button| format!("[{}]", button.face))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format cards as a table
pub fn format_card_list<'a>(page: &Page, cards: impl IntoIterator<Item = &'a Card>) -> String {
    let cards: Vec<&Card> = cards.into_iter().collect();
    if cards.is_empty() {
        return "No cards visible.".to_string();
    }

    let name_width = cards
        .iter()
        .map(|c| c.name.chars().count())
        .max()
        .unwrap_or(4)
        .max(4);

    let section_width = cards
        .iter()
        .map(|c| section_title(page, c).chars().count())
        .max()
        .unwrap_or(5)
        .max(5);

    let status_width = cards
        .iter()
        .map(|c| status_text(c).chars().count())
        .max()
        .unwrap_or(6)
        .max(6);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<name_width$}  {:<section_width$}  {:<status_width$}  {}\n",
        "Name",
        "Month",
        "Status",
        "Actions",
        name_width = name_width,
        section_width = section_width,
        status_width = status_width,
    ));
    output.push_str(&format!(
        "{:-<name_width$}  {:-<section_width$}  {:-<status_width$}  {:-<7}\n",
        "",
        "",
        "",
        "",
        name_width = name_width,
        section_width = section_width,
        status_width = status_width,
    ));

    for card in &cards {
        output.push_str(&format!(
            "{:<name_width$}  {:<section_width$}  {:<status_width$}  {}\n",
            card.name,
            section_title(page, card),
            status_text(card),
            actions_text(page, card),
            name_width = name_width,
            section_width = section_width,
            status_width = status_width,
        ));
    }

    output.push_str(&format!("\n{} card(s)\n", cards.len()));
    output
}

/// Format month sections with their status counts
pub fn format_section_list(page: &Page, current: Option<SectionId>) -> String {
    let sections: Vec<_> = page.sections().collect();
    if sections.is_empty() {
        return "No sections found.".to_string();
    }

    let title_width = sections
        .iter()
        .map(|s| s.title.chars().count())
        .max()
        .unwrap_or(5)
        .max(5);

    let mut output = String::new();
    output.push_str(&format!(
        "   {:<8}  {:<title_width$}  {:>5}  {:>7}  {:>6}  {:>5}\n",
        "Key",
        "Month",
        "Paid",
        "Pending",
        "Unpaid",
        "Total",
        title_width = title_width,
    ));
    output.push_str(&format!(
        "   {:-<8}  {:-<title_width$}  {:->5}  {:->7}  {:->6}  {:->5}\n",
        "",
        "",
        "",
        "",
        "",
        "",
        title_width = title_width,
    ));

    for section in sections {
        let summary = page.section_summary(section.id);
        let marker = if Some(section.id) == current { '*' } else { ' ' };
        let icon = if section.icon_rotated { '▾' } else { '▸' };
        output.push_str(&format!(
            "{}{} {:<8}  {:<title_width$}  {:>5}  {:>7}  {:>6}  {:>5}\n",
            marker,
            icon,
            section.key,
            section.title,
            summary.paid,
            summary.pending,
            summary.unpaid,
            summary.total(),
            title_width = title_width,
        ));
    }

    output
}
