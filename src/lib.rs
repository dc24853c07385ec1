//! Roster board - payment roster with filters and timed card transitions
//!
//! This library models a page of student payment cards grouped by month.
//! Cards can be filtered by payment status, marked as paid or reminded,
//! and month sections fold open and closed. Every visual transition is a
//! deferred task on a virtual clock, so the whole page is deterministic.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Page elements (cards, buttons, sections, filters)
//! - `render`: The render tree interface, the in-memory page and snapshots
//! - `scheduler`: Deferred tasks on a virtual clock
//! - `controller`: Filter, action and section handling plus click dispatch
//! - `logging`: Tracing subscriber setup
//! - `cli`, `display`, `tui`: Front-ends
//!
//! # Example
//!
//! ```rust,ignore
//! use roster::controller::{Click, Controller};
//! use roster::models::FilterCategory;
//! use roster::render::PageSnapshot;
//!
//! let settings = roster::config::Settings::default();
//! let page = PageSnapshot::demo().to_page(&settings.labels)?;
//! let mut controller = Controller::from_settings(page, &settings);
//! controller.dispatch(Click::Filter(FilterCategory::Paid))?;
//! controller.settle();
//! ```

pub mod cli;
pub mod config;
pub mod controller;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod render;
pub mod scheduler;
pub mod tui;

pub use error::RosterError;
