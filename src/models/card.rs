//! Student card model
//!
//! A card is one student's row on the roster. Its payment status lives in a
//! status badge sub-element; its visual state is what the filter animates.

use super::ids::{CardId, SectionId};
use super::status::PaymentStatus;
use crate::error::{RosterError, RosterResult};

/// Base class every status badge carries
pub const STATUS_BASE_CLASS: &str = "payment-status";

/// The status sub-element of a card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusBadge {
    /// Whitespace-separated class list, e.g. `payment-status status-paid`
    pub class_list: String,
    /// Text shown in the badge
    pub text: String,
}

impl StatusBadge {
    /// Build a badge presenting the given status (or none)
    pub fn new(status: Option<PaymentStatus>, text: impl Into<String>) -> Self {
        let class_list = match status {
            Some(status) => format!("{} {}", STATUS_BASE_CLASS, status.class_tag()),
            None => STATUS_BASE_CLASS.to_string(),
        };
        Self {
            class_list,
            text: text.into(),
        }
    }

    pub fn status(&self) -> Option<PaymentStatus> {
        PaymentStatus::from_class_list(&self.class_list)
    }

    /// Rewrite both the classification and the display text
    pub fn present(&mut self, status: PaymentStatus, text: impl Into<String>) {
        self.class_list = format!("{} {}", STATUS_BASE_CLASS, status.class_tag());
        self.text = text.into();
    }
}

/// Whether the card takes part in layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    InLayout,
    Removed,
}

/// Position/scale offset applied to a card
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub translate_y: f32,
    pub scale: f32,
}

impl Transform {
    /// Resting position of a visible card
    pub const REST: Transform = Transform {
        translate_y: 0.0,
        scale: 1.0,
    };

    /// Offset a card fades out towards
    pub const EXIT: Transform = Transform {
        translate_y: 20.0,
        scale: 0.95,
    };
}

/// Transient animation state of a card
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardVisual {
    pub presence: Presence,
    pub opacity: f32,
    pub transform: Transform,
}

impl CardVisual {
    /// A card rendered normally
    pub const VISIBLE: CardVisual = CardVisual {
        presence: Presence::InLayout,
        opacity: 1.0,
        transform: Transform::REST,
    };

    pub fn is_in_layout(&self) -> bool {
        self.presence == Presence::InLayout
    }

    /// In layout, fully opaque and at the resting transform
    pub fn is_at_rest(&self) -> bool {
        self.is_in_layout() && self.opacity >= 1.0 && self.transform == Transform::REST
    }

    /// Start of the fade-out: still in layout, transparent and offset
    pub fn begin_exit(&mut self) {
        self.opacity = 0.0;
        self.transform = Transform::EXIT;
    }

    /// End of the fade-in
    pub fn settle_visible(&mut self) {
        self.opacity = 1.0;
        self.transform = Transform::REST;
    }
}

impl Default for CardVisual {
    fn default() -> Self {
        Self::VISIBLE
    }
}

/// One student row
#[derive(Debug, Clone)]
pub struct Card {
    pub id: CardId,
    pub name: String,
    /// Status sub-element; `None` models a card rendered without one
    pub badge: Option<StatusBadge>,
    pub section: Option<SectionId>,
    pub visual: CardVisual,
}

impl Card {
    pub fn new(name: impl Into<String>, badge: StatusBadge, section: Option<SectionId>) -> Self {
        Self {
            id: CardId::new(),
            name: name.into(),
            badge: Some(badge),
            section,
            visual: CardVisual::default(),
        }
    }

    /// Read the presented payment status.
    ///
    /// Fails when the card has no status badge at all; a badge without a
    /// recognised tag yields `Ok(None)`.
    pub fn payment_status(&self) -> RosterResult<Option<PaymentStatus>> {
        self.badge
            .as_ref()
            .map(StatusBadge::status)
            .ok_or_else(|| RosterError::status_not_found(self.name.clone()))
    }

    pub fn badge_mut(&mut self) -> RosterResult<&mut StatusBadge> {
        let name = &self.name;
        self.badge
            .as_mut()
            .ok_or_else(|| RosterError::status_not_found(name.clone()))
    }
}
