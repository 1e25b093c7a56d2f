//! Layout resolver
//!
//! Turns the stream of classified entries produced during a walk into the
//! layout chain of every content file. A chain lists the layout stems of the
//! file's directory and all of its ancestors, root-most first, followed by
//! the file's own stem.
//!
//! Three collectors implement the same contract:
//! - [`TrieCollector`] - prefix tree over directory segments (preferred)
//! - [`ChainMatchCollector`] - sorted layout list matched per file (validation)
//! - [`BreadthFirstCollector`] - streams directories in breadth-first order
//!
//! All three must produce identical mappings for the same tree.

mod breadth_first;
mod chain_match;
mod trie;

pub use breadth_first::BreadthFirstCollector;
pub use chain_match::ChainMatchCollector;
pub use trie::TrieCollector;

use crate::domain::value_objects::{LayoutGroups, LayoutQuery, ResolveStrategy};
use crate::error::TrellisResult;

/// Accumulates classified entries for one resolution run.
///
/// `stem` is the entry path without its extension; `dir` is the stem's
/// containing directory (`""` at the root). A collector is single-use:
/// `finish` consumes it.
pub trait LayoutCollector {
    /// Record a layout file
    fn add_layout(&mut self, stem: &str, dir: &str) -> TrellisResult<()>;

    /// Record a content file
    fn add_content(&mut self, stem: &str, dir: &str) -> TrellisResult<()>;

    /// Produce the result mapping, keeping only stems passing the directory filter
    fn finish(self: Box<Self>) -> TrellisResult<LayoutGroups>;
}

/// Fresh collector for `strategy`.
pub fn collector_for(strategy: ResolveStrategy, query: &LayoutQuery) -> Box<dyn LayoutCollector> {
    let filter = query.directory().clone();
    match strategy {
        ResolveStrategy::Trie => Box::new(TrieCollector::new(filter)),
        ResolveStrategy::ChainMatch => Box::new(ChainMatchCollector::new(filter)),
        ResolveStrategy::BreadthFirst => Box::new(BreadthFirstCollector::new(filter)),
    }
}
