//! Trellis - layout chain resolution for template trees
//!
//! Trellis walks a hierarchical namespace of entries (a directory tree, or any
//! [`EntrySource`]) and, for every content template, works out the chain of
//! layout templates it inherits: the layout of the root-most ancestor
//! directory first, the file itself last.
//!
//! ```
//! use trellis::{group_by_layout, MemoryFs};
//!
//! let site = MemoryFs::from_files(["layout.html", "index.html", "blog/post.html"]);
//! let groups = group_by_layout(&site, "html", "layout", ".").unwrap();
//!
//! assert_eq!(groups.get("blog/post").unwrap(), &vec!["layout", "blog/post"]);
//! ```

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{group_by_layout, GroupOptions, LayoutGrouper};
pub use config::Config;
pub use domain::ports::{DirEntry, EntryKind, EntrySource, SourceError, SourceResult};
pub use domain::services::{
    walk, walk_breadth_first, walk_depth_first, WalkControl, WalkEntry, WalkError,
};
pub use domain::value_objects::{
    LayoutChain, LayoutGroups, LayoutQuery, ResolveStrategy, WalkOrder,
};
pub use error::{TrellisError, TrellisResult};
pub use infrastructure::{LocalFs, MemoryFs};
