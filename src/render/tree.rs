//! The render tree query interface
//!
//! Controllers never own page elements. They reach cards, buttons and
//! sections through this trait, which is all they need from the page.

use crate::error::RosterResult;
use crate::models::{
    ActionButton, ActionButtonId, Card, CardId, FilterButton, MonthSection, SectionId,
};

pub trait RenderTree {
    /// Structural revision; bumps whenever elements are added or removed
    fn revision(&self) -> u64;

    /// All cards in document order
    fn card_ids(&self) -> Vec<CardId>;
    fn card(&self, id: CardId) -> Option<&Card>;
    fn card_mut(&mut self, id: CardId) -> Option<&mut Card>;

    fn filter_buttons(&self) -> &[FilterButton];
    fn filter_buttons_mut(&mut self) -> &mut [FilterButton];

    /// All action buttons in document order
    fn action_button_ids(&self) -> Vec<ActionButtonId>;
    fn action_button(&self, id: ActionButtonId) -> Option<&ActionButton>;
    fn action_button_mut(&mut self, id: ActionButtonId) -> Option<&mut ActionButton>;

    /// All sections in document order
    fn section_ids(&self) -> Vec<SectionId>;
    fn section(&self, id: SectionId) -> Option<&MonthSection>;
    fn section_mut(&mut self, id: SectionId) -> Option<&mut MonthSection>;

    /// Bring a section into the viewport
    fn scroll_into_view(&mut self, id: SectionId) -> RosterResult<()>;

    /// Look a section up by its element key (`month-N`)
    fn section_by_key(&self, key: &str) -> Option<SectionId> {
        self.section_ids()
            .into_iter()
            .find(|id| self.section(*id).is_some_and(|s| s.key == key))
    }
}
