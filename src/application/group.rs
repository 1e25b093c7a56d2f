//! Group By Layout Use Case
//!
//! Orchestrates one resolution run: walk the entry source, classify every
//! leaf against the [`LayoutQuery`], feed a strategy's collector and return
//! the finished mapping.
//!
//! The run either yields a complete mapping or an error. An unskipped
//! listing failure anywhere in the tree aborts the run; there are no partial
//! results.

use crate::domain::ports::EntrySource;
use crate::domain::services::{collector_for, walk, WalkControl};
use crate::domain::value_objects::{
    entry_path, LayoutGroups, LayoutQuery, ResolveStrategy, Role, WalkOrder,
};
use crate::error::{TrellisError, TrellisResult};

/// Options for a grouping run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupOptions {
    /// Resolution algorithm
    pub strategy: ResolveStrategy,
    /// Preferred walk order (breadth-first strategy always walks breadth-first)
    pub walk_order: WalkOrder,
    /// Skip containers that cannot be listed instead of failing
    pub skip_unreadable: bool,
    /// Entry path the walk starts from
    pub root: String,
}

impl Default for GroupOptions {
    fn default() -> Self {
        Self {
            strategy: ResolveStrategy::default(),
            walk_order: WalkOrder::default(),
            skip_unreadable: false,
            root: entry_path::ROOT.to_string(),
        }
    }
}

/// Groups content files by their inherited layout chain
#[derive(Debug, Clone)]
pub struct LayoutGrouper {
    query: LayoutQuery,
    options: GroupOptions,
}

impl LayoutGrouper {
    pub fn new(query: LayoutQuery) -> Self {
        Self {
            query,
            options: GroupOptions::default(),
        }
    }

    pub fn with_options(mut self, options: GroupOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_strategy(mut self, strategy: ResolveStrategy) -> Self {
        self.options.strategy = strategy;
        self
    }

    pub fn with_walk_order(mut self, walk_order: WalkOrder) -> Self {
        self.options.walk_order = walk_order;
        self
    }

    pub fn with_skip_unreadable(mut self, skip_unreadable: bool) -> Self {
        self.options.skip_unreadable = skip_unreadable;
        self
    }

    pub fn with_root(mut self, root: impl Into<String>) -> Self {
        self.options.root = root.into();
        self
    }

    pub fn options(&self) -> &GroupOptions {
        &self.options
    }

    /// Resolve the layout chain of every content file in `source`.
    pub fn group<S: EntrySource + ?Sized>(&self, source: &S) -> TrellisResult<LayoutGroups> {
        let strategy = self.options.strategy;
        let order = strategy.walk_order(self.options.walk_order);
        tracing::debug!(
            root = %self.options.root,
            extension = self.query.extension().extension(),
            layout = self.query.layout_name(),
            directory = self.query.directory().as_str(),
            %strategy,
            %order,
            "grouping files by layout"
        );

        let mut collector = collector_for(strategy, &self.query);
        let mut conflict: Option<TrellisError> = None;
        let mut layouts = 0usize;
        let mut contents = 0usize;

        walk(source, &self.options.root, order, |entry| {
            if let Some(error) = entry.error {
                if self.options.skip_unreadable {
                    tracing::warn!(path = entry.path, %error, "skipping unreadable entry");
                    return WalkControl::SkipSubtree;
                }
                return WalkControl::Continue;
            }
            if entry.is_container() {
                return WalkControl::Continue;
            }
            let Some(classified) = self.query.classify(entry.path) else {
                return WalkControl::Continue;
            };

            tracing::trace!(stem = classified.stem, role = ?classified.role, "routing entry");
            let recorded = match classified.role {
                Role::Layout => {
                    layouts += 1;
                    collector.add_layout(classified.stem, classified.dir)
                }
                Role::Content => {
                    contents += 1;
                    collector.add_content(classified.stem, classified.dir)
                }
            };
            match recorded {
                Ok(()) => WalkControl::Continue,
                Err(err) => {
                    conflict = Some(err);
                    WalkControl::SkipAll
                }
            }
        })?;

        if let Some(err) = conflict {
            return Err(err);
        }

        let groups = collector.finish()?;
        tracing::debug!(
            layouts,
            contents,
            reported = groups.len(),
            "grouping finished"
        );
        Ok(groups)
    }
}

/// Resolve layout chains for `extension` files under the source root.
///
/// `directory_filter` of `"."` reports every content file; anything else
/// keeps only stems starting with it.
pub fn group_by_layout<S: EntrySource + ?Sized>(
    source: &S,
    extension: &str,
    layout_filename: &str,
    directory_filter: &str,
) -> TrellisResult<LayoutGroups> {
    let query = LayoutQuery::new(extension, layout_filename).with_directory(directory_filter);
    LayoutGrouper::new(query).group(source)
}
