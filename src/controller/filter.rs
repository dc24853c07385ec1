//! Filter controller
//!
//! Applying a filter marks exactly one filter button active and walks every
//! card once. Cards that belong to the filter come back into layout at once
//! and fade in after the reveal delay; the rest fade out at once and leave
//! layout after the hide delay, so the fade is never cut short by reflow.

use tracing::{debug, warn};

use crate::config::TimingSettings;
use crate::error::{RosterError, RosterResult};
use crate::models::{CardId, FilterCategory, Presence};
use crate::render::RenderTree;
use crate::scheduler::{Deferred, Scheduler, TimerTarget};

/// What one filter pass decided
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterPass {
    pub category: FilterCategory,
    /// Cards that belong to the filter
    pub shown: Vec<CardId>,
    /// Cards that are fading out or already out of layout
    pub hidden: Vec<CardId>,
}

/// Apply a filter to every card in the tree
pub fn apply_filter<T: RenderTree>(
    tree: &mut T,
    scheduler: &mut Scheduler,
    timing: &TimingSettings,
    category: FilterCategory,
) -> RosterResult<FilterPass> {
    if !tree
        .filter_buttons()
        .iter()
        .any(|button| button.category == category)
    {
        warn!(%category, "No filter button for category");
        return Err(RosterError::filter_not_found(category.to_string()));
    }

    // Read every status before touching anything so a malformed card aborts
    // the whole pass.
    let mut verdicts = Vec::new();
    for id in tree.card_ids() {
        let card = tree
            .card(id)
            .ok_or_else(|| RosterError::card_not_found(id.to_string()))?;
        let status = card.payment_status().inspect_err(|e| {
            warn!(card = %card.name, error = %e, "Filter aborted");
        })?;
        verdicts.push((id, category.admits(status)));
    }

    for button in tree.filter_buttons_mut() {
        button.active = button.category == category;
    }

    let mut pass = FilterPass {
        category,
        shown: Vec::new(),
        hidden: Vec::new(),
    };

    for (id, should_show) in verdicts {
        let Some(card) = tree.card_mut(id) else {
            continue;
        };
        let target = TimerTarget::Card(id);

        if should_show {
            if !card.visual.is_at_rest() || scheduler.has_pending(target) {
                card.visual.presence = Presence::InLayout;
                scheduler.schedule(timing.reveal_delay(), Deferred::RevealCard(id));
            }
            pass.shown.push(id);
        } else {
            card.visual.begin_exit();
            if card.visual.is_in_layout() {
                scheduler.schedule(timing.hide_delay(), Deferred::CollapseCard(id));
            } else if scheduler.supersedes() {
                scheduler.cancel_target(target);
            }
            pass.hidden.push(id);
        }
    }

    debug!(
        %category,
        shown = pass.shown.len(),
        hidden = pass.hidden.len(),
        "Applied filter"
    );

    Ok(pass)
}

/// Second phase of showing a card: fade in to the resting transform
pub fn reveal_card<T: RenderTree>(tree: &mut T, id: CardId) -> RosterResult<()> {
    let card = tree
        .card_mut(id)
        .ok_or_else(|| RosterError::card_not_found(id.to_string()))?;
    card.visual.settle_visible();
    Ok(())
}

/// Second phase of hiding a card: remove it from layout
pub fn collapse_card<T: RenderTree>(tree: &mut T, id: CardId) -> RosterResult<()> {
    let card = tree
        .card_mut(id)
        .ok_or_else(|| RosterError::card_not_found(id.to_string()))?;
    card.visual.presence = Presence::Removed;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LabelSettings;
    use crate::models::{PaymentStatus, Transform};
    use crate::render::Page;
    use std::time::Duration;

    fn page_with(statuses: &[Option<PaymentStatus>]) -> (Page, Vec<CardId>) {
        let labels = LabelSettings::default();
        let mut page = Page::new();
        let ids = statuses
            .iter()
            .enumerate()
            .map(|(i, status)| {
                page.add_card(format!("Student {}", i), *status, None, &labels)
                    .unwrap()
            })
            .collect();
        (page, ids)
    }

    fn run_all(page: &mut Page, scheduler: &mut Scheduler) {
        while let Some(task) = scheduler.pop_due(Duration::MAX) {
            match task {
                Deferred::RevealCard(id) => reveal_card(page, id).unwrap(),
                Deferred::CollapseCard(id) => collapse_card(page, id).unwrap(),
                _ => {}
            }
        }
    }

    #[test]
    fn test_hidden_cards_fade_immediately_but_stay_in_layout() {
        let (mut page, ids) = page_with(&[Some(PaymentStatus::Paid), Some(PaymentStatus::Unpaid)]);
        let mut scheduler = Scheduler::default();

        let pass = apply_filter(
            &mut page,
            &mut scheduler,
            &TimingSettings::default(),
            FilterCategory::Paid,
        )
        .unwrap();
        assert_eq!(pass.shown, vec![ids[0]]);
        assert_eq!(pass.hidden, vec![ids[1]]);

        let unpaid = page.card(ids[1]).unwrap();
        assert_eq!(unpaid.visual.opacity, 0.0);
        assert_eq!(unpaid.visual.transform, Transform::EXIT);
        assert!(unpaid.visual.is_in_layout());

        run_all(&mut page, &mut scheduler);
        assert!(!page.card(ids[1]).unwrap().visual.is_in_layout());
        assert!(page.card(ids[0]).unwrap().visual.is_at_rest());
    }

    #[test]
    fn test_active_marker_is_exclusive() {
        let (mut page, _) = page_with(&[Some(PaymentStatus::Pending)]);
        let mut scheduler = Scheduler::default();
        let timing = TimingSettings::default();

        for category in [FilterCategory::Unpaid, FilterCategory::Pending, FilterCategory::All] {
            apply_filter(&mut page, &mut scheduler, &timing, category).unwrap();
            let active: Vec<_> = page
                .filter_buttons()
                .iter()
                .filter(|b| b.active)
                .map(|b| b.category)
                .collect();
            assert_eq!(active, vec![category]);
        }
    }

    #[test]
    fn test_reappearing_card_enters_layout_before_fading_in() {
        let (mut page, ids) = page_with(&[Some(PaymentStatus::Unpaid)]);
        let mut scheduler = Scheduler::default();
        let timing = TimingSettings::default();

        apply_filter(&mut page, &mut scheduler, &timing, FilterCategory::Paid).unwrap();
        run_all(&mut page, &mut scheduler);
        assert!(!page.card(ids[0]).unwrap().visual.is_in_layout());

        apply_filter(&mut page, &mut scheduler, &timing, FilterCategory::All).unwrap();
        let card = page.card(ids[0]).unwrap();
        assert!(card.visual.is_in_layout());
        assert_eq!(card.visual.opacity, 0.0);
        assert_eq!(
            scheduler.pending_for(TimerTarget::Card(ids[0])),
            vec![Deferred::RevealCard(ids[0])]
        );
    }

    #[test]
    fn test_cards_at_rest_schedule_nothing() {
        let (mut page, _) = page_with(&[Some(PaymentStatus::Paid), None]);
        let mut scheduler = Scheduler::default();

        apply_filter(
            &mut page,
            &mut scheduler,
            &TimingSettings::default(),
            FilterCategory::All,
        )
        .unwrap();
        assert!(scheduler.is_idle());
    }

    #[test]
    fn test_missing_badge_aborts_before_any_mutation() {
        let (mut page, ids) = page_with(&[Some(PaymentStatus::Paid), Some(PaymentStatus::Unpaid)]);
        page.card_mut(ids[1]).unwrap().badge = None;
        let mut scheduler = Scheduler::default();

        let err = apply_filter(
            &mut page,
            &mut scheduler,
            &TimingSettings::default(),
            FilterCategory::Unpaid,
        )
        .unwrap_err();

        assert!(err.is_not_found());
        assert_eq!(page.active_filter(), Some(FilterCategory::All));
        assert!(page.card(ids[0]).unwrap().visual.is_at_rest());
        assert!(scheduler.is_idle());
    }

    #[test]
    fn test_untagged_badge_only_matches_all() {
        let (mut page, ids) = page_with(&[None]);
        let mut scheduler = Scheduler::default();
        let timing = TimingSettings::default();

        for category in [FilterCategory::Paid, FilterCategory::Pending, FilterCategory::Unpaid] {
            let pass = apply_filter(&mut page, &mut scheduler, &timing, category).unwrap();
            assert_eq!(pass.hidden, ids);
        }
    }
}
