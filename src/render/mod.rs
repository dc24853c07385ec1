//! Render tree layer
//!
//! - `tree`: the query interface controllers use to reach page elements
//! - `page`: the in-memory page implementing it
//! - `snapshot`: JSON/YAML snapshots pages are built from

pub mod page;
pub mod snapshot;
pub mod tree;

pub use page::Page;
pub use snapshot::{PageSnapshot, SnapshotFormat};
pub use tree::RenderTree;
