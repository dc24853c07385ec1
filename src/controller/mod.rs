//! Interaction controller for the roster page
//!
//! The controller owns a render tree, the deferred-task scheduler and the
//! element registry. Clicks go through [`Controller::dispatch`]; time only
//! moves through [`Controller::advance`] and [`Controller::settle`].

pub mod actions;
pub mod event;
pub mod filter;
pub mod registry;
pub mod sections;

pub use actions::ActionOutcome;
pub use event::{Click, Effect, Propagation};
pub use filter::FilterPass;
pub use registry::{ActionBinding, Registry};
pub use sections::current_month_key;

use std::time::Duration;

use chrono::Datelike;
use tracing::{debug, warn};

use crate::config::{LabelSettings, Settings, TimingSettings};
use crate::error::RosterResult;
use crate::models::{ActionButtonId, CardId, FilterCategory, SectionId};
use crate::render::{Page, RenderTree};
use crate::scheduler::{Deferred, Scheduler};

pub struct Controller<T: RenderTree = Page> {
    tree: T,
    scheduler: Scheduler,
    registry: Registry,
    timing: TimingSettings,
    labels: LabelSettings,
    selected_card: Option<CardId>,
}

impl<T: RenderTree> Controller<T> {
    pub fn new(tree: T, timing: TimingSettings, labels: LabelSettings) -> Self {
        let scheduler = Scheduler::new(timing.supersede_pending);
        let mut registry = Registry::new();
        registry.bind(&tree);

        Self {
            tree,
            scheduler,
            registry,
            timing,
            labels,
            selected_card: None,
        }
    }

    pub fn from_settings(tree: T, settings: &Settings) -> Self {
        Self::new(tree, settings.timing.clone(), settings.labels.clone())
    }

    pub fn tree(&self) -> &T {
        &self.tree
    }

    /// Mutable access to the page; structural changes are picked up by the
    /// next dispatch
    pub fn tree_mut(&mut self) -> &mut T {
        &mut self.tree
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn labels(&self) -> &LabelSettings {
        &self.labels
    }

    pub fn timing(&self) -> &TimingSettings {
        &self.timing
    }

    /// Current virtual time
    pub fn now(&self) -> Duration {
        self.scheduler.now()
    }

    pub fn active_filter(&self) -> Option<FilterCategory> {
        self.tree
            .filter_buttons()
            .iter()
            .find(|button| button.active)
            .map(|button| button.category)
    }

    pub fn selected_card(&self) -> Option<CardId> {
        self.selected_card
    }

    /// Bind the page and open the current month's section
    pub fn start<D: Datelike>(&mut self, today: &D) -> Option<SectionId> {
        self.registry.bind(&self.tree);
        sections::expand_current_month(&mut self.tree, today)
    }

    /// Route a click to the handler bound to its target.
    ///
    /// Only the target's own handler runs. Action clicks stop at the button,
    /// so the enclosing card is never selected by them.
    pub fn dispatch(&mut self, click: Click) -> RosterResult<Effect> {
        let effect = match click {
            Click::Filter(category) => Effect::Filtered(self.apply_filter(category)?),
            Click::Action(button) => Effect::Action(self.handle_action(button)?),
            Click::Card(card) => {
                self.select_card(card)?;
                Effect::CardSelected(card)
            }
            Click::SectionHeader(section) => Effect::SectionToggled {
                section,
                expanded: self.toggle_section(section)?,
            },
        };

        Ok(effect)
    }

    pub fn apply_filter(&mut self, category: FilterCategory) -> RosterResult<FilterPass> {
        self.registry.refresh(&self.tree);
        self.registry.require_filter(category)?;
        filter::apply_filter(&mut self.tree, &mut self.scheduler, &self.timing, category)
    }

    pub fn handle_action(&mut self, button: ActionButtonId) -> RosterResult<ActionOutcome> {
        self.registry.refresh(&self.tree);
        let binding = self.registry.action(button)?;
        actions::handle_action(
            &mut self.tree,
            &mut self.scheduler,
            &self.timing,
            &self.labels,
            button,
            binding,
        )
    }

    pub fn toggle_section(&mut self, section: SectionId) -> RosterResult<bool> {
        self.registry.refresh(&self.tree);
        self.registry.require_section(section)?;
        sections::toggle_section(&mut self.tree, &mut self.scheduler, &self.timing, section)
    }

    pub fn select_card(&mut self, card: CardId) -> RosterResult<()> {
        self.registry.refresh(&self.tree);
        self.registry.require_card(card)?;
        self.selected_card = Some(card);
        Ok(())
    }

    /// Move the clock forward by `dt`, running every task that falls due.
    /// Returns how many tasks ran.
    pub fn advance(&mut self, dt: Duration) -> usize {
        let until = self.scheduler.now().saturating_add(dt);
        let mut ran = 0;

        while let Some(task) = self.scheduler.pop_due(until) {
            if let Err(e) = self.run(task) {
                warn!(?task, error = %e, "Deferred task skipped");
            }
            ran += 1;
        }

        self.scheduler.set_now(until);
        ran
    }

    /// Run every pending task, however far ahead it is due
    pub fn settle(&mut self) -> usize {
        let mut ran = 0;
        while let Some(due) = self.scheduler.next_due() {
            ran += self.advance(due.saturating_sub(self.scheduler.now()));
        }
        if ran > 0 {
            debug!(ran, now_ms = self.now().as_millis() as u64, "Settled");
        }
        ran
    }

    fn run(&mut self, task: Deferred) -> RosterResult<()> {
        match task {
            Deferred::RevealCard(id) => filter::reveal_card(&mut self.tree, id),
            Deferred::CollapseCard(id) => filter::collapse_card(&mut self.tree, id),
            Deferred::RevertButton(id) => actions::revert_button(&mut self.tree, id),
            Deferred::ScrollIntoView(id) => self.tree.scroll_into_view(id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ActionKind, PaymentStatus, Swatch, Transform};
    use chrono::NaiveDate;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    struct Board {
        ctl: Controller,
        paid: CardId,
        pending: CardId,
        unpaid: CardId,
    }

    fn board(timing: TimingSettings) -> Board {
        let labels = LabelSettings::default();
        let mut page = Page::new();
        let mut add = |name: &str, status| {
            let card = page.add_card(name, Some(status), None, &labels).unwrap();
            page.add_action(card, ActionKind::Reminder, &labels).unwrap();
            page.add_action(card, ActionKind::MarkPaid, &labels).unwrap();
            card
        };
        let paid = add("Paid Student", PaymentStatus::Paid);
        let pending = add("Pending Student", PaymentStatus::Pending);
        let unpaid = add("Unpaid Student", PaymentStatus::Unpaid);

        Board {
            ctl: Controller::new(page, timing, labels),
            paid,
            pending,
            unpaid,
        }
    }

    fn visible(ctl: &Controller) -> Vec<CardId> {
        ctl.tree().cards_in_layout().map(|card| card.id).collect()
    }

    fn button(ctl: &Controller, card: CardId, kind: ActionKind) -> ActionButtonId {
        ctl.tree().button_of_kind(card, kind).unwrap()
    }

    #[test]
    fn test_three_card_scenario() {
        let mut b = board(TimingSettings::default());

        b.ctl.dispatch(Click::Filter(FilterCategory::Paid)).unwrap();
        b.ctl.settle();
        assert_eq!(visible(&b.ctl), vec![b.paid]);

        b.ctl.dispatch(Click::Filter(FilterCategory::All)).unwrap();
        b.ctl.settle();
        assert_eq!(visible(&b.ctl), vec![b.paid, b.pending, b.unpaid]);

        let mark = button(&b.ctl, b.unpaid, ActionKind::MarkPaid);
        b.ctl.dispatch(Click::Action(mark)).unwrap();

        b.ctl.dispatch(Click::Filter(FilterCategory::Unpaid)).unwrap();
        b.ctl.settle();
        assert!(visible(&b.ctl).is_empty());

        b.ctl.dispatch(Click::Filter(FilterCategory::Paid)).unwrap();
        b.ctl.settle();
        assert_eq!(visible(&b.ctl), vec![b.paid, b.unpaid]);
    }

    #[test]
    fn test_post_settle_visibility_matches_every_category() {
        let mut b = board(TimingSettings::default());
        let sequence = [
            FilterCategory::Unpaid,
            FilterCategory::Pending,
            FilterCategory::All,
            FilterCategory::Paid,
            FilterCategory::Pending,
        ];

        for category in sequence {
            b.ctl.apply_filter(category).unwrap();
            assert_eq!(b.ctl.active_filter(), Some(category));
            b.ctl.settle();

            for card in b.ctl.tree().cards() {
                let status = card.payment_status().unwrap();
                assert_eq!(card.visual.is_in_layout(), category.admits(status));
                if card.visual.is_in_layout() {
                    assert!(card.visual.is_at_rest());
                }
            }
        }
    }

    #[test]
    fn test_filter_is_idempotent() {
        let mut once = board(TimingSettings::default());
        once.ctl.apply_filter(FilterCategory::Pending).unwrap();
        once.ctl.settle();

        let mut twice = board(TimingSettings::default());
        twice.ctl.apply_filter(FilterCategory::Pending).unwrap();
        twice.ctl.advance(ms(100));
        twice.ctl.apply_filter(FilterCategory::Pending).unwrap();
        twice.ctl.settle();

        assert_eq!(visible(&once.ctl), vec![once.pending]);
        assert_eq!(visible(&twice.ctl), vec![twice.pending]);
    }

    #[test]
    fn test_everything_settles_within_horizon() {
        let mut b = board(TimingSettings::default());
        let horizon = b.ctl.timing().settle_horizon();

        b.ctl.apply_filter(FilterCategory::Unpaid).unwrap();
        let remind = button(&b.ctl, b.unpaid, ActionKind::Reminder);
        b.ctl.dispatch(Click::Action(remind)).unwrap();

        b.ctl.advance(horizon);
        assert!(b.ctl.scheduler().is_idle());
        assert_eq!(visible(&b.ctl), vec![b.unpaid]);
    }

    #[test]
    fn test_hide_keeps_layout_until_delay_elapses() {
        let mut b = board(TimingSettings::default());
        b.ctl.apply_filter(FilterCategory::Paid).unwrap();

        b.ctl.advance(ms(399));
        assert!(b.ctl.tree().card(b.unpaid).unwrap().visual.is_in_layout());
        b.ctl.advance(ms(1));
        assert!(!b.ctl.tree().card(b.unpaid).unwrap().visual.is_in_layout());
    }

    #[test]
    fn test_reminder_round_trip() {
        let mut b = board(TimingSettings::default());
        let id = button(&b.ctl, b.pending, ActionKind::Reminder);
        let before = b.ctl.tree().action_button(id).unwrap().clone();

        b.ctl.dispatch(Click::Action(id)).unwrap();
        let pressed = b.ctl.tree().action_button(id).unwrap();
        assert_eq!(pressed.face.label, "Sent");
        assert_eq!(pressed.style.foreground, Some(Swatch::White));
        assert_eq!(pressed.style.border, Some(Swatch::Success));

        b.ctl.advance(ms(1999));
        assert!(b.ctl.tree().action_button(id).unwrap().is_acknowledged());
        b.ctl.advance(ms(1));

        let after = b.ctl.tree().action_button(id).unwrap();
        assert_eq!(after.face, before.face);
        assert_eq!(after.style, before.style);
        assert_eq!(
            b.ctl.tree().card(b.pending).unwrap().payment_status().unwrap(),
            Some(PaymentStatus::Pending)
        );
    }

    #[test]
    fn test_mark_paid_survives_revert() {
        let mut b = board(TimingSettings::default());
        let id = button(&b.ctl, b.pending, ActionKind::MarkPaid);

        b.ctl.dispatch(Click::Action(id)).unwrap();
        let pressed = b.ctl.tree().action_button(id).unwrap();
        assert_eq!(pressed.face.label, "Done");
        assert_eq!(pressed.style.background, Some(Swatch::Success));
        assert_eq!(pressed.style.foreground, None);

        b.ctl.settle();
        assert!(!b.ctl.tree().action_button(id).unwrap().is_acknowledged());

        let card = b.ctl.tree().card(b.pending).unwrap();
        assert_eq!(card.payment_status().unwrap(), Some(PaymentStatus::Paid));
        assert_eq!(card.badge.as_ref().unwrap().text, "Paid");
    }

    #[test]
    fn test_reveal_waits_for_reveal_delay() {
        let mut b = board(TimingSettings::default());
        b.ctl.dispatch(Click::Filter(FilterCategory::Paid)).unwrap();
        b.ctl.settle();
        assert!(!b.ctl.tree().card(b.unpaid).unwrap().visual.is_in_layout());

        b.ctl.dispatch(Click::Filter(FilterCategory::All)).unwrap();
        b.ctl.advance(ms(19));
        let card = b.ctl.tree().card(b.unpaid).unwrap();
        assert!(card.visual.is_in_layout());
        assert_eq!(card.visual.opacity, 0.0);
        assert!(!card.visual.is_at_rest());

        b.ctl.advance(ms(1));
        let card = b.ctl.tree().card(b.unpaid).unwrap();
        assert!(card.visual.is_at_rest());
        assert_eq!(card.visual.opacity, 1.0);
        assert_eq!(card.visual.transform, Transform::REST);
    }

    #[test]
    fn test_action_click_does_not_reach_card() {
        let mut b = board(TimingSettings::default());
        let id = button(&b.ctl, b.unpaid, ActionKind::Reminder);

        let effect = b.ctl.dispatch(Click::Action(id)).unwrap();
        assert_eq!(effect.propagation(), Propagation::Stopped);
        assert_eq!(b.ctl.selected_card(), None);

        let effect = b.ctl.dispatch(Click::Card(b.unpaid)).unwrap();
        assert_eq!(effect.propagation(), Propagation::Continue);
        assert_eq!(b.ctl.selected_card(), Some(b.unpaid));
    }

    #[test]
    fn test_refilter_before_hide_completes_keeps_card() {
        let mut b = board(TimingSettings::default());

        b.ctl.apply_filter(FilterCategory::Unpaid).unwrap();
        b.ctl.advance(ms(100));
        b.ctl.apply_filter(FilterCategory::All).unwrap();
        b.ctl.settle();

        assert_eq!(visible(&b.ctl), vec![b.paid, b.pending, b.unpaid]);
    }

    #[test]
    fn test_overlapping_timers_without_supersede() {
        let timing = TimingSettings {
            supersede_pending: false,
            ..TimingSettings::default()
        };
        let mut b = board(timing);

        b.ctl.apply_filter(FilterCategory::Unpaid).unwrap();
        b.ctl.advance(ms(100));
        b.ctl.apply_filter(FilterCategory::All).unwrap();
        b.ctl.settle();

        // the stale removals from the first pass still land
        assert_eq!(visible(&b.ctl), vec![b.unpaid]);
    }

    #[test]
    fn test_double_click_reverts_once_from_last_click() {
        let mut b = board(TimingSettings::default());
        let id = button(&b.ctl, b.paid, ActionKind::Reminder);

        b.ctl.dispatch(Click::Action(id)).unwrap();
        b.ctl.advance(ms(1500));
        b.ctl.dispatch(Click::Action(id)).unwrap();
        b.ctl.advance(ms(1000));

        assert!(b.ctl.tree().action_button(id).unwrap().is_acknowledged());
        assert_eq!(b.ctl.settle(), 1);
        assert!(!b.ctl.tree().action_button(id).unwrap().is_acknowledged());
    }

    #[test]
    fn test_cards_added_later_are_bound() {
        let mut b = board(TimingSettings::default());
        let labels = b.ctl.labels().clone();
        let late = b
            .ctl
            .tree_mut()
            .add_card("Late Student", Some(PaymentStatus::Unpaid), None, &labels)
            .unwrap();
        let remind = b
            .ctl
            .tree_mut()
            .add_action(late, ActionKind::Reminder, &labels)
            .unwrap();

        b.ctl.dispatch(Click::Action(remind)).unwrap();
        assert!(b.ctl.tree().action_button(remind).unwrap().is_acknowledged());
        assert_eq!(b.ctl.registry().binds(), 2);
    }

    #[test]
    fn test_unknown_targets_are_not_found() {
        let mut b = board(TimingSettings::default());
        assert!(b
            .ctl
            .dispatch(Click::Action(ActionButtonId::new()))
            .unwrap_err()
            .is_not_found());
        assert!(b
            .ctl
            .dispatch(Click::SectionHeader(SectionId::new()))
            .unwrap_err()
            .is_not_found());
        assert!(b.ctl.dispatch(Click::Card(CardId::new())).is_err());
    }

    #[test]
    fn test_start_expands_current_month_and_scroll_follows_toggle() {
        let labels = LabelSettings::default();
        let mut page = Page::new();
        let october = page.add_section("month-3", "October");
        let november = page.add_section("month-2", "November");
        let mut ctl = Controller::new(page, TimingSettings::default(), labels);

        let today = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
        assert_eq!(ctl.start(&today), Some(october));
        assert_eq!(ctl.settle(), 0);

        let effect = ctl.dispatch(Click::SectionHeader(november)).unwrap();
        assert_eq!(
            effect,
            Effect::SectionToggled {
                section: november,
                expanded: true
            }
        );
        ctl.advance(ms(300));
        assert_eq!(ctl.tree().scroll_anchor(), Some(november));
    }
}
