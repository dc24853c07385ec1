//! Terminal User Interface module
//!
//! This module provides an interactive roster board using ratatui. Ticks
//! from the event thread drive the page clock, so fades and button reverts
//! play out in real time.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Layout
pub mod layout;

// Keybindings
pub mod keybindings;

pub use app::App;
pub use terminal::run_tui;
