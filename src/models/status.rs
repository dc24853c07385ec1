//! Payment status and filter categories
//!
//! A card's status is never stored as an enum on the card itself; it is read
//! back from the classification tags on the card's status badge.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::LabelSettings;

/// Payment status presented on a card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Paid,
    Pending,
    Unpaid,
}

impl PaymentStatus {
    pub const ALL: [PaymentStatus; 3] = [Self::Paid, Self::Pending, Self::Unpaid];

    /// The classification tag carried by a status badge
    pub fn class_tag(&self) -> &'static str {
        match self {
            Self::Paid => "status-paid",
            Self::Pending => "status-pending",
            Self::Unpaid => "status-unpaid",
        }
    }

    /// Read the status out of a whitespace-separated class list.
    ///
    /// The first recognised tag wins; a list with no tag has no status.
    pub fn from_class_list(class_list: &str) -> Option<Self> {
        class_list.split_whitespace().find_map(|class| {
            Self::ALL
                .iter()
                .copied()
                .find(|status| status.class_tag() == class)
        })
    }

    /// Parse a status from user input
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "paid" => Some(Self::Paid),
            "pending" | "waiting" => Some(Self::Pending),
            "unpaid" | "not_paid" | "not-paid" => Some(Self::Unpaid),
            _ => None,
        }
    }

    /// Display text for this status
    pub fn label<'a>(&self, labels: &'a LabelSettings) -> &'a str {
        match self {
            Self::Paid => &labels.paid,
            Self::Pending => &labels.pending,
            Self::Unpaid => &labels.unpaid,
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Paid => write!(f, "paid"),
            Self::Pending => write!(f, "pending"),
            Self::Unpaid => write!(f, "unpaid"),
        }
    }
}

/// The filter applied to the card list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterCategory {
    #[default]
    All,
    Paid,
    Pending,
    Unpaid,
}

impl FilterCategory {
    /// Button order in the filter bar
    pub const ALL: [FilterCategory; 4] = [Self::All, Self::Paid, Self::Pending, Self::Unpaid];

    /// Whether a card with the given status belongs to this filter
    pub fn admits(&self, status: Option<PaymentStatus>) -> bool {
        matches!(
            (self, status),
            (Self::All, _)
                | (Self::Paid, Some(PaymentStatus::Paid))
                | (Self::Pending, Some(PaymentStatus::Pending))
                | (Self::Unpaid, Some(PaymentStatus::Unpaid))
        )
    }

    /// Parse a category from user input
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "all" | "*" => Some(Self::All),
            other => PaymentStatus::parse(other).map(Self::from),
        }
    }

    /// Caption shown on the filter button
    pub fn caption(&self) -> &'static str {
        match self {
            Self::All => "All students",
            Self::Paid => "Paid",
            Self::Pending => "Pending",
            Self::Unpaid => "Not paid",
        }
    }

    /// The next category in button order, wrapping around
    pub fn next(&self) -> Self {
        let idx = Self::ALL.iter().position(|c| c == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }
}

impl From<PaymentStatus> for FilterCategory {
    fn from(status: PaymentStatus) -> Self {
        match status {
            PaymentStatus::Paid => Self::Paid,
            PaymentStatus::Pending => Self::Pending,
            PaymentStatus::Unpaid => Self::Unpaid,
        }
    }
}

impl fmt::Display for FilterCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Paid => write!(f, "paid"),
            Self::Pending => write!(f, "pending"),
            Self::Unpaid => write!(f, "unpaid"),
        }
    }
}

/// One button in the exclusive filter group
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterButton {
    pub category: FilterCategory,
    pub active: bool,
}

impl FilterButton {
    pub fn new(category: FilterCategory) -> Self {
        Self {
            category,
            active: false,
        }
    }
}
