//! Breadth-first streaming collector
//!
//! Relies on breadth-first walk order: the entries of one directory arrive
//! together, and every ancestor directory is complete before any descendant
//! entry shows up. The current directory is held as a pending group (its
//! layout may be listed after its content) and committed when entries of
//! another directory arrive. Only directories with a layout keep a chain, so
//! ancestor lookup costs O(depth) per directory rather than per file.

use std::collections::HashMap;

use super::LayoutCollector;
use crate::domain::value_objects::{entry_path, DirectoryFilter, LayoutChain, LayoutGroups};
use crate::error::{TrellisError, TrellisResult};

#[derive(Debug)]
struct PendingDir {
    dir: String,
    layout: Option<String>,
    content: Vec<String>,
}

impl PendingDir {
    fn new(dir: &str) -> Self {
        Self {
            dir: dir.to_string(),
            layout: None,
            content: Vec::new(),
        }
    }
}

/// Collector that resolves chains while a breadth-first walk is running
#[derive(Debug)]
pub struct BreadthFirstCollector {
    filter: DirectoryFilter,
    /// Effective layout chain of every committed directory holding a layout
    chains: HashMap<String, LayoutChain>,
    current: Option<PendingDir>,
    groups: LayoutGroups,
}

impl BreadthFirstCollector {
    pub fn new(filter: DirectoryFilter) -> Self {
        Self {
            filter,
            chains: HashMap::new(),
            current: None,
            groups: LayoutGroups::new(),
        }
    }

    fn pending(&mut self, dir: &str) -> TrellisResult<&mut PendingDir> {
        let staying = self.current.as_ref().is_some_and(|p| p.dir == dir);
        if !staying {
            // commit leaves `current` empty
            self.commit()?;
        }
        Ok(self.current.get_or_insert_with(|| PendingDir::new(dir)))
    }

    /// Chain of the nearest committed ancestor holding a layout.
    fn inherited(&self, dir: &str) -> &[String] {
        let mut cursor = entry_path::parent(dir);
        while let Some(ancestor) = cursor {
            if let Some(chain) = self.chains.get(ancestor) {
                return chain;
            }
            cursor = entry_path::parent(ancestor);
        }
        &[]
    }

    fn commit(&mut self) -> TrellisResult<()> {
        let Some(pending) = self.current.take() else {
            return Ok(());
        };

        let mut chain = self.inherited(&pending.dir).to_vec();
        if let Some(layout) = pending.layout {
            chain.push(layout);
            self.chains.insert(pending.dir.clone(), chain.clone());
        }

        for stem in pending.content {
            if !self.filter.matches(&stem) {
                continue;
            }
            let mut full = Vec::with_capacity(chain.len() + 1);
            full.extend(chain.iter().cloned());
            full.push(stem.clone());
            if self.groups.insert(stem.clone(), full).is_some() {
                return Err(TrellisError::DuplicateStem { stem });
            }
        }
        tracing::trace!(dir = %pending.dir, layouts = chain.len(), "committed directory");
        Ok(())
    }
}

impl LayoutCollector for BreadthFirstCollector {
    fn add_layout(&mut self, stem: &str, dir: &str) -> TrellisResult<()> {
        let pending = self.pending(dir)?;
        if let Some(first) = &pending.layout {
            return Err(TrellisError::DuplicateLayout {
                dir: dir.to_string(),
                first: first.clone(),
                second: stem.to_string(),
            });
        }
        pending.layout = Some(stem.to_string());
        Ok(())
    }

    fn add_content(&mut self, stem: &str, dir: &str) -> TrellisResult<()> {
        self.pending(dir)?.content.push(stem.to_string());
        Ok(())
    }

    fn finish(self: Box<Self>) -> TrellisResult<LayoutGroups> {
        let mut this = *self;
        this.commit()?;
        Ok(this.groups)
    }
}
