//! Display formatting for terminal output
//!
//! Provides utilities for formatting the roster page for terminal display.

pub mod roster;

pub use roster::{format_card_list, format_section_list};
