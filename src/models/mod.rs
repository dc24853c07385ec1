//! Core data models for the roster board
//!
//! This module contains the elements of the roster page: student cards and
//! their status badges, action buttons, filter buttons and month sections.

pub mod action;
pub mod card;
pub mod ids;
pub mod section;
pub mod status;

pub use action::{ActionButton, ActionKind, ButtonFace, ButtonStyle, Icon, Swatch};
pub use card::{Card, CardVisual, Presence, StatusBadge, Transform};
pub use ids::{ActionButtonId, CardId, SectionId};
pub use section::{month_key, MonthSection, SectionSummary};
pub use status::{FilterButton, FilterCategory, PaymentStatus};
