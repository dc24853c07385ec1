//! In-memory roster page
//!
//! `Page` is the concrete render tree used by the CLI, the TUI and the tests.
//! Building methods bump the structural revision so bindings can be refreshed.

use crate::config::LabelSettings;
use crate::error::{RosterError, RosterResult};
use crate::models::{
    ActionButton, ActionButtonId, ActionKind, Card, CardId, FilterButton, FilterCategory,
    MonthSection, PaymentStatus, SectionId, SectionSummary, StatusBadge,
};

use super::tree::RenderTree;

#[derive(Debug, Clone)]
pub struct Page {
    cards: Vec<Card>,
    buttons: Vec<ActionButton>,
    sections: Vec<MonthSection>,
    filters: Vec<FilterButton>,
    revision: u64,
    /// Section most recently scrolled into view
    scroll_anchor: Option<SectionId>,
    /// Number of scroll requests served so far
    scroll_requests: u64,
}

impl Default for Page {
    fn default() -> Self {
        Self::new()
    }
}

impl Page {
    /// An empty page with the full filter bar, "All" active
    pub fn new() -> Self {
        let filters = FilterCategory::ALL
            .iter()
            .map(|category| FilterButton {
                active: *category == FilterCategory::All,
                ..FilterButton::new(*category)
            })
            .collect();

        Self {
            cards: Vec::new(),
            buttons: Vec::new(),
            sections: Vec::new(),
            filters,
            revision: 0,
            scroll_anchor: None,
            scroll_requests: 0,
        }
    }

    /// Append a month section
    pub fn add_section(&mut self, key: impl Into<String>, title: impl Into<String>) -> SectionId {
        let section = MonthSection::new(key, title);
        let id = section.id;
        self.sections.push(section);
        self.revision += 1;
        id
    }

    /// Append a student card with a status badge
    pub fn add_card(
        &mut self,
        name: impl Into<String>,
        status: Option<PaymentStatus>,
        section: Option<SectionId>,
        labels: &LabelSettings,
    ) -> RosterResult<CardId> {
        if let Some(section_id) = section {
            if self.section(section_id).is_none() {
                return Err(RosterError::section_not_found(section_id.to_string()));
            }
        }

        let text = status.map(|s| s.label(labels).to_string()).unwrap_or_default();
        let card = Card::new(name, StatusBadge::new(status, text), section);
        let id = card.id;
        self.cards.push(card);
        self.revision += 1;
        Ok(id)
    }

    /// Attach an action button to an existing card
    pub fn add_action(
        &mut self,
        card: CardId,
        kind: ActionKind,
        labels: &LabelSettings,
    ) -> RosterResult<ActionButtonId> {
        if self.card(card).is_none() {
            return Err(RosterError::card_not_found(card.to_string()));
        }

        let button = ActionButton::new(card, kind, labels);
        let id = button.id;
        self.buttons.push(button);
        self.revision += 1;
        Ok(id)
    }

    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    pub fn sections(&self) -> impl Iterator<Item = &MonthSection> {
        self.sections.iter()
    }

    /// Cards belonging to a section, in document order
    pub fn cards_in_section(&self, section: SectionId) -> impl Iterator<Item = &Card> {
        self.cards
            .iter()
            .filter(move |card| card.section == Some(section))
    }

    /// Cards not grouped under any section
    pub fn loose_cards(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter().filter(|card| card.section.is_none())
    }

    /// Cards currently taking part in layout
    pub fn cards_in_layout(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter().filter(|card| card.visual.is_in_layout())
    }

    /// Buttons attached to a card, in document order
    pub fn buttons_for(&self, card: CardId) -> impl Iterator<Item = &ActionButton> {
        self.buttons.iter().filter(move |button| button.card == card)
    }

    /// The card's button of the given kind, if it has one
    pub fn button_of_kind(&self, card: CardId, kind: ActionKind) -> Option<ActionButtonId> {
        self.buttons_for(card)
            .find(|button| button.kind == kind)
            .map(|button| button.id)
    }

    /// Find a card by student name (case-insensitive)
    pub fn find_card(&self, name: &str) -> RosterResult<CardId> {
        let needle = name.trim().to_lowercase();
        self.cards
            .iter()
            .find(|card| card.name.to_lowercase() == needle)
            .map(|card| card.id)
            .ok_or_else(|| RosterError::card_not_found(name))
    }

    /// Find a card by student name within one section
    pub fn find_card_in(&self, name: &str, section: SectionId) -> RosterResult<CardId> {
        let needle = name.trim().to_lowercase();
        self.cards_in_section(section)
            .find(|card| card.name.to_lowercase() == needle)
            .map(|card| card.id)
            .ok_or_else(|| RosterError::card_not_found(name))
    }

    /// The category whose filter button carries the active marker
    pub fn active_filter(&self) -> Option<FilterCategory> {
        self.filters
            .iter()
            .find(|button| button.active)
            .map(|button| button.category)
    }

    /// Count the cards of a section by the status their badges present
    pub fn section_summary(&self, section: SectionId) -> SectionSummary {
        let mut summary = SectionSummary::default();
        for card in self.cards_in_section(section) {
            summary.record(card.badge.as_ref().and_then(StatusBadge::status));
        }
        summary
    }

    pub fn scroll_anchor(&self) -> Option<SectionId> {
        self.scroll_anchor
    }

    pub fn scroll_requests(&self) -> u64 {
        self.scroll_requests
    }
}

impl RenderTree for Page {
    fn revision(&self) -> u64 {
        self.revision
    }

    fn card_ids(&self) -> Vec<CardId> {
        self.cards.iter().map(|card| card.id).collect()
    }

    fn card(&self, id: CardId) -> Option<&Card> {
        self.cards.iter().find(|card| card.id == id)
    }

    fn card_mut(&mut self, id: CardId) -> Option<&mut Card> {
        self.cards.iter_mut().find(|card| card.id == id)
    }

    fn filter_buttons(&self) -> &[FilterButton] {
        &self.filters
    }

    fn filter_buttons_mut(&mut self) -> &mut [FilterButton] {
        &mut self.filters
    }

    fn action_button_ids(&self) -> Vec<ActionButtonId> {
        self.buttons.iter().map(|button| button.id).collect()
    }

    fn action_button(&self, id: ActionButtonId) -> Option<&ActionButton> {
        self.buttons.iter().find(|button| button.id == id)
    }

    fn action_button_mut(&mut self, id: ActionButtonId) -> Option<&mut ActionButton> {
        self.buttons.iter_mut().find(|button| button.id == id)
    }

    fn section_ids(&self) -> Vec<SectionId> {
        self.sections.iter().map(|section| section.id).collect()
    }

    fn section(&self, id: SectionId) -> Option<&MonthSection> {
        self.sections.iter().find(|section| section.id == id)
    }

    fn section_mut(&mut self, id: SectionId) -> Option<&mut MonthSection> {
        self.sections.iter_mut().find(|section| section.id == id)
    }

    fn scroll_into_view(&mut self, id: SectionId) -> RosterResult<()> {
        if self.section(id).is_none() {
            return Err(RosterError::section_not_found(id.to_string()));
        }
        self.scroll_anchor = Some(id);
        self.scroll_requests += 1;
        Ok(())
    }

    fn section_by_key(&self, key: &str) -> Option<SectionId> {
        self.sections
            .iter()
            .find(|section| section.key == key)
            .map(|section| section.id)
    }
}
