//! Action buttons attached to student cards
//!
//! The kind of a button is fixed when the button is built. Faces and styles
//! are derived from the kind, never from the text currently shown.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{ActionButtonId, CardId};
use crate::config::LabelSettings;

/// What an action button does when clicked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    /// Send a payment reminder (cosmetic acknowledgement only)
    Reminder,
    /// Mark the student's payment as received
    MarkPaid,
}

/// Icon shown in front of a button label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Envelope,
    Check,
    CheckDouble,
}

impl Icon {
    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Envelope => "✉",
            Self::Check => "✓",
            Self::CheckDouble => "✓✓",
        }
    }
}

/// Icon plus label of a button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonFace {
    pub icon: Icon,
    pub label: String,
}

impl ButtonFace {
    pub fn new(icon: Icon, label: impl Into<String>) -> Self {
        Self {
            icon,
            label: label.into(),
        }
    }
}

impl fmt::Display for ButtonFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.icon.glyph(), self.label)
    }
}

/// Named colours a button style can point at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swatch {
    Success,
    White,
}

/// Inline style overrides; `None` means the stylesheet default
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ButtonStyle {
    pub background: Option<Swatch>,
    pub foreground: Option<Swatch>,
    pub border: Option<Swatch>,
}

impl ButtonStyle {
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

impl ActionKind {
    /// Face the button shows while idle
    pub fn resting_face(&self, labels: &LabelSettings) -> ButtonFace {
        match self {
            Self::Reminder => ButtonFace::new(Icon::Envelope, &labels.remind),
            Self::MarkPaid => ButtonFace::new(Icon::Check, &labels.mark_paid),
        }
    }

    /// Face the button shows right after a click
    pub fn acknowledged_face(&self, labels: &LabelSettings) -> ButtonFace {
        match self {
            Self::Reminder => ButtonFace::new(Icon::Check, &labels.sent),
            Self::MarkPaid => ButtonFace::new(Icon::CheckDouble, &labels.done),
        }
    }

    /// Apply the success treatment for this kind
    pub fn apply_success(&self, style: &mut ButtonStyle) {
        style.background = Some(Swatch::Success);
        if *self == Self::Reminder {
            style.foreground = Some(Swatch::White);
            style.border = Some(Swatch::Success);
        }
    }

    /// Clear exactly the overrides `apply_success` sets
    pub fn clear_success(&self, style: &mut ButtonStyle) {
        style.background = None;
        if *self == Self::Reminder {
            style.foreground = None;
            style.border = None;
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "reminder" | "remind" => Some(Self::Reminder),
            "mark_paid" | "markpaid" | "payment" => Some(Self::MarkPaid),
            _ => None,
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Reminder => write!(f, "reminder"),
            Self::MarkPaid => write!(f, "mark_paid"),
        }
    }
}

/// A button on a card
#[derive(Debug, Clone)]
pub struct ActionButton {
    pub id: ActionButtonId,
    /// Owning card
    pub card: CardId,
    pub kind: ActionKind,
    /// Face to return to after a cosmetic revert
    pub resting: ButtonFace,
    pub face: ButtonFace,
    pub style: ButtonStyle,
}

impl ActionButton {
    pub fn new(card: CardId, kind: ActionKind, labels: &LabelSettings) -> Self {
        let resting = kind.resting_face(labels);
        Self {
            id: ActionButtonId::new(),
            card,
            kind,
            face: resting.clone(),
            resting,
            style: ButtonStyle::default(),
        }
    }

    /// Showing something other than its resting look
    pub fn is_acknowledged(&self) -> bool {
        self.face != self.resting || !self.style.is_default()
    }

    pub fn acknowledge(&mut self, labels: &LabelSettings) {
        self.face = self.kind.acknowledged_face(labels);
        self.kind.apply_success(&mut self.style);
    }

    pub fn revert(&mut self) {
        self.face = self.resting.clone();
        self.kind.clear_success(&mut self.style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reminder_round_trip() {
        let labels = LabelSettings::default();
        let mut button = ActionButton::new(CardId::new(), ActionKind::Reminder, &labels);
        assert!(!button.is_acknowledged());

        button.acknowledge(&labels);
        assert_eq!(button.face.to_string(), "✓ Sent");
        assert_eq!(button.style.foreground, Some(Swatch::White));
        assert_eq!(button.style.border, Some(Swatch::Success));

        button.revert();
        assert_eq!(button.face.to_string(), "✉ Remind");
        assert!(button.style.is_default());
        assert!(!button.is_acknowledged());
    }

    #[test]
    fn test_mark_paid_only_touches_background() {
        let labels = LabelSettings::default();
        let mut button = ActionButton::new(CardId::new(), ActionKind::MarkPaid, &labels);
        button.style.foreground = Some(Swatch::White);

        button.acknowledge(&labels);
        assert_eq!(button.face.to_string(), "✓✓ Done");
        assert_eq!(button.style.border, None);

        button.revert();
        assert_eq!(button.style.background, None);
        assert_eq!(button.style.foreground, Some(Swatch::White));
        assert_eq!(button.face.to_string(), "✓ Payment");
    }

    #[test]
    fn test_kind_parse() {
        assert_eq!(ActionKind::parse("Reminder"), Some(ActionKind::Reminder));
        assert_eq!(ActionKind::parse("mark-paid"), Some(ActionKind::MarkPaid));
        assert_eq!(ActionKind::parse("refund"), None);
    }

    #[test]
    fn test_kind_serde_snake_case() {
        let json = serde_json::to_string(&ActionKind::MarkPaid).unwrap();
        assert_eq!(json, "\"mark_paid\"");
    }
}
