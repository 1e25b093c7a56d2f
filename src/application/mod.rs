//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (walker, resolver, ports)
//! - Does NOT contain resolution rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `LayoutGrouper` - Walk an entry source and group content files by layout chain

pub mod group;

pub use group::{group_by_layout, GroupOptions, LayoutGrouper};
