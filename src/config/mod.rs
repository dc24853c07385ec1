//! Configuration module for the roster board
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence (timings and labels)

pub mod paths;
pub mod settings;

pub use paths::RosterPaths;
pub use settings::{LabelSettings, Settings, TimingSettings};
