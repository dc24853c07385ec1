//! Path management for the roster board
//!
//! Provides XDG-compliant path resolution for configuration, page snapshots
//! and the log file.
//!
//! ## Path Resolution Order
//!
//! 1. `ROSTER_BOARD_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/roster-board` or `~/.config/roster-board`
//! 3. Windows: `%APPDATA%\roster-board`

use std::path::PathBuf;

use crate::error::RosterError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "ROSTER_BOARD_DATA_DIR";

/// Manages all paths used by the roster board
#[derive(Debug, Clone)]
pub struct RosterPaths {
    /// Base directory for all roster board files
    base_dir: PathBuf,
}

impl RosterPaths {
    /// Create a new RosterPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, RosterError> {
        let base_dir = if let Ok(custom) = std::env::var(DATA_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create RosterPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/roster-board/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the default page snapshot
    pub fn page_file(&self) -> PathBuf {
        self.base_dir.join("page.json")
    }

    /// Get the path to the log file used while the TUI owns the terminal
    pub fn log_file(&self) -> PathBuf {
        self.base_dir.join("roster.log")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), RosterError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| RosterError::Io(format!("Failed to create base directory: {}", e)))
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, RosterError> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) => PathBuf::from(xdg),
        Err(_) => {
            let home = std::env::var("HOME")
                .map_err(|_| RosterError::Config("HOME environment variable not set".into()))?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("roster-board"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, RosterError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| RosterError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("roster-board"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = RosterPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert_eq!(paths.page_file(), temp_dir.path().join("page.json"));
        assert_eq!(paths.log_file(), temp_dir.path().join("roster.log"));
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("nested").join("roster");
        let paths = RosterPaths::with_base_dir(nested.clone());

        paths.ensure_directories().unwrap();
        assert!(nested.exists());
    }
}
