//! Month section toggling and the startup expansion of the current month

use chrono::Datelike;
use tracing::{debug, info, warn};

use crate::config::TimingSettings;
use crate::error::{RosterError, RosterResult};
use crate::models::{month_key, SectionId};
use crate::render::RenderTree;
use crate::scheduler::{Deferred, Scheduler, TimerTarget};

/// Flip a section open or closed; returns the new `expanded` state
pub fn toggle_section<T: RenderTree>(
    tree: &mut T,
    scheduler: &mut Scheduler,
    timing: &TimingSettings,
    id: SectionId,
) -> RosterResult<bool> {
    let section = tree
        .section_mut(id)
        .ok_or_else(|| {
            warn!(section = %id, "Section not found");
            RosterError::section_not_found(id.to_string())
        })?;

    section.expanded = !section.expanded;
    section.icon_rotated = !section.icon_rotated;
    let expanded = section.expanded;
    debug!(section = %section.key, expanded, "Toggled section");

    if expanded {
        scheduler.schedule(timing.scroll_delay(), Deferred::ScrollIntoView(id));
    } else if scheduler.supersedes() {
        scheduler.cancel_target(TimerTarget::Section(id));
    }

    Ok(expanded)
}

/// Key of the section holding the given date's month.
///
/// Sections count down from December, so the index is `12 - month0`:
/// January is `month-12`, October is `month-3`, December is `month-1`.
pub fn current_month_key<D: Datelike>(today: &D) -> String {
    month_key(12 - today.month0() as i32)
}

/// Expand the current month's section without scrolling.
///
/// A page with no such section is left alone.
pub fn expand_current_month<T: RenderTree, D: Datelike>(
    tree: &mut T,
    today: &D,
) -> Option<SectionId> {
    let key = current_month_key(today);
    let Some(id) = tree.section_by_key(&key) else {
        debug!(%key, "No section for the current month");
        return None;
    };

    let section = tree.section_mut(id)?;
    section.expanded = true;
    section.icon_rotated = true;
    info!(%key, title = %section.title, "Expanded current month");
    Some(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::Page;
    use chrono::NaiveDate;
    use std::time::Duration;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_month_index_mapping_is_pinned() {
        assert_eq!(current_month_key(&date(2026, 10, 16)), "month-3");
        assert_eq!(current_month_key(&date(2025, 1, 31)), "month-12");
        assert_eq!(current_month_key(&date(2025, 12, 1)), "month-1");
        assert_eq!(current_month_key(&date(2024, 2, 29)), "month-11");
    }

    #[test]
    fn test_toggle_parity() {
        let mut page = Page::new();
        let id = page.add_section("month-2", "November");
        let mut scheduler = Scheduler::default();
        let timing = TimingSettings::default();

        assert!(toggle_section(&mut page, &mut scheduler, &timing, id).unwrap());
        assert!(page.section(id).unwrap().icon_rotated);
        assert!(!toggle_section(&mut page, &mut scheduler, &timing, id).unwrap());

        let section = page.section(id).unwrap();
        assert!(!section.expanded);
        assert!(!section.icon_rotated);
    }

    #[test]
    fn test_expand_schedules_scroll_and_collapse_cancels_it() {
        let mut page = Page::new();
        let id = page.add_section("month-4", "September");
        let mut scheduler = Scheduler::default();
        let timing = TimingSettings::default();

        toggle_section(&mut page, &mut scheduler, &timing, id).unwrap();
        assert_eq!(scheduler.next_due(), Some(Duration::from_millis(300)));

        toggle_section(&mut page, &mut scheduler, &timing, id).unwrap();
        assert!(scheduler.is_idle());
    }

    #[test]
    fn test_expand_current_month_sets_markers_without_scroll() {
        let mut page = Page::new();
        page.add_section("month-1", "December");
        let october = page.add_section("month-3", "October");

        let expanded = expand_current_month(&mut page, &date(2026, 10, 16));
        assert_eq!(expanded, Some(october));

        let section = page.section(october).unwrap();
        assert!(section.expanded);
        assert!(section.icon_rotated);
        assert_eq!(page.scroll_requests(), 0);
    }

    #[test]
    fn test_expand_current_month_missing_is_noop() {
        let mut page = Page::new();
        let december = page.add_section("month-1", "December");

        assert_eq!(expand_current_month(&mut page, &date(2026, 5, 2)), None);
        assert!(!page.section(december).unwrap().expanded);
    }

    #[test]
    fn test_unknown_section_is_not_found() {
        let mut page = Page::new();
        let mut scheduler = Scheduler::default();
        let mut result = None;
        let logs = crate::logging::capture_logs(|| {
            result = Some(toggle_section(
                &mut page,
                &mut scheduler,
                &TimingSettings::default(),
                SectionId::new(),
            ));
        });

        let err = result.unwrap().unwrap_err();
        assert!(err.is_not_found());
        assert!(logs.contains("Section not found"));
    }
}
