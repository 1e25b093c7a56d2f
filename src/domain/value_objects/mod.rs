//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

pub mod entry_path;
mod layout_groups;
mod layout_query;
mod strategy;
mod walk_order;

pub use layout_groups::{LayoutChain, LayoutGroups};
pub use layout_query::{Classified, DirectoryFilter, ExtensionFilter, LayoutQuery, Role};
pub use strategy::ResolveStrategy;
pub use walk_order::WalkOrder;
