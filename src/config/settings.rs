//! User settings for the roster board
//!
//! Manages transition timings, display labels and terminal preferences.
//! Every field has a default so a partial `config.json` still loads.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::paths::RosterPaths;
use crate::error::RosterError;

/// Delays driving the visual sequencing of cards, buttons and sections
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimingSettings {
    /// Wait between putting a card back in layout and fading it in
    #[serde(default = "default_reveal_delay")]
    pub reveal_delay_ms: u64,

    /// Wait between fading a card out and removing it from layout
    #[serde(default = "default_hide_delay")]
    pub hide_delay_ms: u64,

    /// How long an action button keeps its acknowledged face
    #[serde(default = "default_revert_delay")]
    pub revert_delay_ms: u64,

    /// Wait between expanding a section and scrolling it into view
    #[serde(default = "default_scroll_delay")]
    pub scroll_delay_ms: u64,

    /// Cancel a target's pending task when a newer one is scheduled for it.
    /// Turning this off lets overlapping timers all fire.
    #[serde(default = "default_supersede_pending")]
    pub supersede_pending: bool,
}

fn default_reveal_delay() -> u64 {
    20
}

fn default_hide_delay() -> u64 {
    400
}

fn default_revert_delay() -> u64 {
    2000
}

fn default_scroll_delay() -> u64 {
    300
}

fn default_supersede_pending() -> bool {
    true
}

impl Default for TimingSettings {
    fn default() -> Self {
        Self {
            reveal_delay_ms: default_reveal_delay(),
            hide_delay_ms: default_hide_delay(),
            revert_delay_ms: default_revert_delay(),
            scroll_delay_ms: default_scroll_delay(),
            supersede_pending: default_supersede_pending(),
        }
    }
}

impl TimingSettings {
    pub fn reveal_delay(&self) -> Duration {
        Duration::from_millis(self.reveal_delay_ms)
    }

    pub fn hide_delay(&self) -> Duration {
        Duration::from_millis(self.hide_delay_ms)
    }

    pub fn revert_delay(&self) -> Duration {
        Duration::from_millis(self.revert_delay_ms)
    }

    pub fn scroll_delay(&self) -> Duration {
        Duration::from_millis(self.scroll_delay_ms)
    }

    /// The longest wait after which every card and button has settled
    pub fn settle_horizon(&self) -> Duration {
        let longest = self
            .reveal_delay_ms
            .max(self.hide_delay_ms)
            .max(self.revert_delay_ms)
            .max(self.scroll_delay_ms);
        Duration::from_millis(longest)
    }
}

/// Display text written into the page by the controllers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelSettings {
    #[serde(default = "default_paid_label")]
    pub paid: String,

    #[serde(default = "default_pending_label")]
    pub pending: String,

    #[serde(default = "default_unpaid_label")]
    pub unpaid: String,

    /// Resting label of reminder buttons
    #[serde(default = "default_remind_label")]
    pub remind: String,

    /// Acknowledged label of reminder buttons
    #[serde(default = "default_sent_label")]
    pub sent: String,

    /// Resting label of mark-paid buttons
    #[serde(default = "default_mark_paid_label")]
    pub mark_paid: String,

    /// Acknowledged label of mark-paid buttons
    #[serde(default = "default_done_label")]
    pub done: String,
}

fn default_paid_label() -> String {
    "Paid".to_string()
}

fn default_pending_label() -> String {
    "Pending".to_string()
}

fn default_unpaid_label() -> String {
    "Unpaid".to_string()
}

fn default_remind_label() -> String {
    "Remind".to_string()
}

fn default_sent_label() -> String {
    "Sent".to_string()
}

fn default_mark_paid_label() -> String {
    "Payment".to_string()
}

fn default_done_label() -> String {
    "Done".to_string()
}

impl Default for LabelSettings {
    fn default() -> Self {
        Self {
            paid: default_paid_label(),
            pending: default_pending_label(),
            unpaid: default_unpaid_label(),
            remind: default_remind_label(),
            sent: default_sent_label(),
            mark_paid: default_mark_paid_label(),
            done: default_done_label(),
        }
    }
}

/// User settings for the roster board
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    #[serde(default)]
    pub timing: TimingSettings,

    #[serde(default)]
    pub labels: LabelSettings,

    /// TUI redraw/tick interval in milliseconds
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
}

fn default_schema_version() -> u32 {
    1
}

fn default_tick_rate() -> u64 {
    16
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            timing: TimingSettings::default(),
            labels: LabelSettings::default(),
            tick_rate_ms: default_tick_rate(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &RosterPaths) -> Result<Self, RosterError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                RosterError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                RosterError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &RosterPaths) -> Result<(), RosterError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            RosterError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents).map_err(|e| {
            RosterError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }

    /// TUI tick interval
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.timing.reveal_delay_ms, 20);
        assert_eq!(settings.timing.hide_delay_ms, 400);
        assert_eq!(settings.timing.revert_delay_ms, 2000);
        assert_eq!(settings.timing.scroll_delay_ms, 300);
        assert!(settings.timing.supersede_pending);
        assert_eq!(settings.labels.paid, "Paid");
    }

    #[test]
    fn test_settle_horizon_is_longest_delay() {
        let timing = TimingSettings::default();
        assert_eq!(timing.settle_horizon(), Duration::from_millis(2000));
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = RosterPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.timing.hide_delay_ms = 250;
        settings.labels.paid = "Оплачено".to_string();
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.timing.hide_delay_ms, 250);
        assert_eq!(loaded.labels.paid, "Оплачено");
    }

    #[test]
    fn test_partial_file_merges_with_defaults() {
        let json = r#"{"timing": {"revert_delay_ms": 500}}"#;
        let settings: Settings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.timing.revert_delay_ms, 500);
        assert_eq!(settings.timing.hide_delay_ms, 400);
        assert_eq!(settings.labels.sent, "Sent");
        assert_eq!(settings.tick_rate_ms, 16);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = RosterPaths::with_base_dir(temp_dir.path().join("absent"));
        let settings = Settings::load_or_create(&paths).unwrap();
        assert_eq!(settings.schema_version, 1);
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = RosterPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "{ not json").unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, RosterError::Config(_)));
    }
}
