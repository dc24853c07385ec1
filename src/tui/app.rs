//! Application state for the TUI
//!
//! The App struct holds the controller plus everything needed for rendering
//! and handling events.

use std::time::Duration;

use chrono::NaiveDate;
use tracing::warn;

use crate::config::{RosterPaths, Settings};
use crate::controller::{Click, Controller, Effect};
use crate::error::RosterResult;
use crate::models::{ActionKind, CardId, FilterCategory, SectionId};
use crate::render::{Page, PageSnapshot, RenderTree, SnapshotFormat};

use super::widgets::{Notification, NotificationQueue};

/// One line of the roster list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RosterRow {
    Section(SectionId),
    Card(CardId),
}

/// Main application state
pub struct App<'a> {
    /// Application settings
    pub settings: &'a Settings,

    /// Paths configuration
    pub paths: &'a RosterPaths,

    /// Page, timers and bindings
    pub controller: Controller<Page>,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Whether the help overlay is shown
    pub show_help: bool,

    /// Selected row index in the roster list
    pub selected_index: usize,

    /// Scroll offset of the roster list
    pub scroll_offset: usize,

    /// Scroll requests of the page already applied to `scroll_offset`
    pub scroll_seen: u64,

    /// Toast notifications
    pub notifications: NotificationQueue,
}

impl<'a> App<'a> {
    /// Create a new App instance and open the current month
    pub fn new(page: Page, settings: &'a Settings, paths: &'a RosterPaths, today: NaiveDate) -> Self {
        let mut controller = Controller::from_settings(page, settings);
        let current = controller.start(&today);

        let mut app = Self {
            settings,
            paths,
            controller,
            should_quit: false,
            show_help: false,
            selected_index: 0,
            scroll_offset: 0,
            scroll_seen: 0,
            notifications: NotificationQueue::new(),
        };

        if let Some(section) = current {
            if let Some(index) = app.row_index(RosterRow::Section(section)) {
                app.selected_index = index;
                app.scroll_offset = index;
            }
        }
        app
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn page(&self) -> &Page {
        self.controller.tree()
    }

    /// Rows in display order: loose cards, then each section followed by
    /// its cards when expanded. Cards out of layout take no row.
    pub fn rows(&self) -> Vec<RosterRow> {
        let page = self.page();
        let mut rows: Vec<RosterRow> = page
            .loose_cards()
            .filter(|card| card.visual.is_in_layout())
            .map(|card| RosterRow::Card(card.id))
            .collect();

        for section in page.sections() {
            rows.push(RosterRow::Section(section.id));
            if section.expanded {
                rows.extend(
                    page.cards_in_section(section.id)
                        .filter(|card| card.visual.is_in_layout())
                        .map(|card| RosterRow::Card(card.id)),
                );
            }
        }
        rows
    }

    fn row_index(&self, row: RosterRow) -> Option<usize> {
        self.rows().iter().position(|r| *r == row)
    }

    pub fn selected_row(&self) -> Option<RosterRow> {
        self.rows().get(self.selected_index).copied()
    }

    /// Card under the cursor, if the cursor is on a card row
    pub fn selected_card(&self) -> Option<CardId> {
        match self.selected_row() {
            Some(RosterRow::Card(id)) => Some(id),
            _ => None,
        }
    }

    pub fn move_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        let max = self.rows().len();
        if self.selected_index < max.saturating_sub(1) {
            self.selected_index += 1;
        }
    }

    /// Keep the cursor on an existing row after rows come and go
    pub fn clamp_selection(&mut self) {
        let len = self.rows().len();
        if self.selected_index >= len {
            self.selected_index = len.saturating_sub(1);
        }
    }

    pub fn apply_filter(&mut self, category: FilterCategory) {
        self.click(Click::Filter(category));
    }

    pub fn cycle_filter(&mut self) {
        let next = self.controller.active_filter().unwrap_or_default().next();
        self.apply_filter(next);
    }

    /// Enter on the cursor row: toggle a section or select a card
    pub fn activate(&mut self) {
        match self.selected_row() {
            Some(RosterRow::Section(id)) => self.click(Click::SectionHeader(id)),
            Some(RosterRow::Card(id)) => self.click(Click::Card(id)),
            None => {}
        }
    }

    /// Press one of the selected card's action buttons
    pub fn press_action(&mut self, kind: ActionKind) {
        let Some(card) = self.selected_card() else {
            self.notifications
                .push(Notification::info("Select a student first"));
            return;
        };
        match self.page().button_of_kind(card, kind) {
            Some(button) => self.click(Click::Action(button)),
            None => self
                .notifications
                .push(Notification::warning(format!("This card has no {} button", kind))),
        }
    }

    fn click(&mut self, click: Click) {
        match self.controller.dispatch(click) {
            Ok(effect) => {
                if let Some(message) = self.describe(&effect) {
                    self.notifications.push(Notification::success(message));
                }
            }
            Err(e) => {
                warn!(?click, error = %e, "Click failed");
                self.notifications.push(Notification::error(e.to_string()));
            }
        }
        self.clamp_selection();
    }

    fn describe(&self, effect: &Effect) -> Option<String> {
        let page = self.page();
        match effect {
            Effect::Action(outcome) => {
                let name = page.card(outcome.card).map(|c| c.name.as_str())?;
                Some(match outcome.kind {
                    ActionKind::Reminder => format!("Reminder sent to {}", name),
                    ActionKind::MarkPaid => format!("{} marked as paid", name),
                })
            }
            _ => None,
        }
    }

    /// Advance the page clock by real elapsed time
    pub fn tick(&mut self, elapsed: Duration) {
        if self.controller.advance(elapsed) > 0 {
            self.clamp_selection();
        }
        self.sync_scroll();
        self.notifications.remove_expired();
    }

    /// Follow the page's latest scroll-into-view request
    fn sync_scroll(&mut self) {
        let requests = self.page().scroll_requests();
        if requests == self.scroll_seen {
            return;
        }
        self.scroll_seen = requests;
        if let Some(section) = self.page().scroll_anchor() {
            if let Some(index) = self.row_index(RosterRow::Section(section)) {
                self.scroll_offset = index;
            }
        }
    }

    /// Save the page's current status tags as the default snapshot
    pub fn save_page(&mut self) -> RosterResult<()> {
        let snapshot = PageSnapshot::from_page(self.page());
        self.paths.ensure_directories()?;
        let mut file = std::fs::File::create(self.paths.page_file())?;
        snapshot.write(&mut file, SnapshotFormat::Json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn app_for<'a>(settings: &'a Settings, paths: &'a RosterPaths) -> App<'a> {
        let page = PageSnapshot::demo().to_page(&settings.labels).unwrap();
        let today = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
        App::new(page, settings, paths, today)
    }

    #[test]
    fn test_starts_on_current_month() {
        let temp = TempDir::new().unwrap();
        let paths = RosterPaths::with_base_dir(temp.path().to_path_buf());
        let settings = Settings::default();
        let app = app_for(&settings, &paths);

        let Some(RosterRow::Section(id)) = app.selected_row() else {
            panic!("cursor should start on a section");
        };
        assert_eq!(app.page().section(id).unwrap().key, "month-3");
        // 12 section rows plus October's six students
        assert_eq!(app.rows().len(), 18);
    }

    #[test]
    fn test_filter_removes_rows_after_tick() {
        let temp = TempDir::new().unwrap();
        let paths = RosterPaths::with_base_dir(temp.path().to_path_buf());
        let settings = Settings::default();
        let mut app = app_for(&settings, &paths);

        app.apply_filter(FilterCategory::Paid);
        assert_eq!(app.rows().len(), 18);
        app.tick(Duration::from_millis(400));
        assert_eq!(app.rows().len(), 14);
    }

    #[test]
    fn test_press_action_needs_a_card() {
        let temp = TempDir::new().unwrap();
        let paths = RosterPaths::with_base_dir(temp.path().to_path_buf());
        let settings = Settings::default();
        let mut app = app_for(&settings, &paths);

        app.press_action(ActionKind::MarkPaid);
        assert_eq!(
            app.notifications.current().unwrap().message,
            "Select a student first"
        );

        app.move_down();
        let card = app.selected_card().unwrap();
        app.press_action(ActionKind::MarkPaid);
        assert_eq!(
            app.page().card(card).unwrap().payment_status().unwrap(),
            Some(crate::models::PaymentStatus::Paid)
        );
    }

    #[test]
    fn test_save_page_writes_snapshot() {
        let temp = TempDir::new().unwrap();
        let paths = RosterPaths::with_base_dir(temp.path().to_path_buf());
        let settings = Settings::default();
        let mut app = app_for(&settings, &paths);

        app.save_page().unwrap();
        let saved = PageSnapshot::load(&paths.page_file()).unwrap();
        assert_eq!(saved, PageSnapshot::demo());
    }
}
