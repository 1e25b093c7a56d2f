//! Domain Services
//!
//! Traversal and layout resolution. Both only read through the
//! `EntrySource` port and own all of their state for a single run.

pub mod layout_resolver;
pub mod walker;

pub use layout_resolver::{collector_for, LayoutCollector};
pub use walker::{walk, walk_breadth_first, walk_depth_first, WalkControl, WalkEntry, WalkError};
