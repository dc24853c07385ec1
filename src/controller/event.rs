//! Clicks delivered to the controller and what they did

use crate::models::{ActionButtonId, CardId, FilterCategory, SectionId};

use super::actions::ActionOutcome;
use super::filter::FilterPass;

/// A click on an interactive element of the page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Click {
    Filter(FilterCategory),
    Action(ActionButtonId),
    Card(CardId),
    SectionHeader(SectionId),
}

/// Whether a click continues to the element enclosing its target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Propagation {
    Continue,
    Stopped,
}

/// Effect of a dispatched click
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    Filtered(FilterPass),
    Action(ActionOutcome),
    CardSelected(CardId),
    SectionToggled { section: SectionId, expanded: bool },
}

impl Effect {
    /// Action buttons sit inside a card; their clicks never reach it
    pub fn propagation(&self) -> Propagation {
        match self {
            Self::Action(_) => Propagation::Stopped,
            _ => Propagation::Continue,
        }
    }
}
