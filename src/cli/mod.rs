//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the controller.

pub mod demo;
pub mod page;
pub mod sections;
pub mod show;

pub use demo::{handle_demo_command, DemoArgs};
pub use page::load_page;
pub use sections::{handle_sections_command, SectionsArgs};
pub use show::{handle_show_command, ShowArgs};
