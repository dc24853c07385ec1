//! Month sections
//!
//! Sections are rendered newest month first, so `month-1` is December and
//! `month-12` is January.

use super::ids::SectionId;
use super::status::PaymentStatus;

/// Build the element key of the section at the given index
pub fn month_key(index: i32) -> String {
    format!("month-{}", index)
}

/// A collapsible month group of cards
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthSection {
    pub id: SectionId,
    /// Element key, e.g. `month-3`
    pub key: String,
    pub title: String,
    pub expanded: bool,
    /// Rotation marker of the header's collapse icon
    pub icon_rotated: bool,
}

impl MonthSection {
    pub fn new(key: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: SectionId::new(),
            key: key.into(),
            title: title.into(),
            expanded: false,
            icon_rotated: false,
        }
    }
}

/// Card counts of a section by presented status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SectionSummary {
    pub paid: usize,
    pub pending: usize,
    pub unpaid: usize,
    /// Cards whose badge carries no recognised status
    pub unknown: usize,
}

impl SectionSummary {
    pub fn record(&mut self, status: Option<PaymentStatus>) {
        match status {
            Some(PaymentStatus::Paid) => self.paid += 1,
            Some(PaymentStatus::Pending) => self.pending += 1,
            Some(PaymentStatus::Unpaid) => self.unpaid += 1,
            None => self.unknown += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.paid + self.pending + self.unpaid + self.unknown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_key() {
        assert_eq!(month_key(3), "month-3");
        assert_eq!(month_key(12), "month-12");
    }

    #[test]
    fn test_new_section_is_collapsed() {
        let section = MonthSection::new("month-1", "December");
        assert!(!section.expanded);
        assert!(!section.icon_rotated);
    }

    #[test]
    fn test_summary_counts() {
        let mut summary = SectionSummary::default();
        summary.record(Some(PaymentStatus::Paid));
        summary.record(Some(PaymentStatus::Paid));
        summary.record(Some(PaymentStatus::Unpaid));
        summary.record(None);
        assert_eq!(summary.paid, 2);
        assert_eq!(summary.unpaid, 1);
        assert_eq!(summary.total(), 4);
    }
}
