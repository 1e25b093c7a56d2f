//! Chain-matching collector
//!
//! Collects layout stems into a flat list and content stems into a set; at
//! `finish` the layouts are sorted by length (an ancestor's path is always
//! shorter than its descendants') and every content file scans the list for
//! ancestor layouts. O(files x layouts); kept to cross-check the trie.

use std::collections::{BTreeSet, HashMap};

use super::LayoutCollector;
use crate::domain::value_objects::{entry_path, DirectoryFilter, LayoutGroups};
use crate::error::{TrellisError, TrellisResult};

/// Collector matching a sorted layout list against each content file
#[derive(Debug)]
pub struct ChainMatchCollector {
    filter: DirectoryFilter,
    layouts: Vec<String>,
    layout_dirs: HashMap<String, String>,
    content: BTreeSet<String>,
}

impl ChainMatchCollector {
    pub fn new(filter: DirectoryFilter) -> Self {
        Self {
            filter,
            layouts: Vec::new(),
            layout_dirs: HashMap::new(),
            content: BTreeSet::new(),
        }
    }
}

impl LayoutCollector for ChainMatchCollector {
    fn add_layout(&mut self, stem: &str, dir: &str) -> TrellisResult<()> {
        if let Some(first) = self.layout_dirs.get(dir) {
            return Err(TrellisError::DuplicateLayout {
                dir: dir.to_string(),
                first: first.clone(),
                second: stem.to_string(),
            });
        }
        self.layout_dirs.insert(dir.to_string(), stem.to_string());
        self.layouts.push(stem.to_string());
        Ok(())
    }

    fn add_content(&mut self, stem: &str, _dir: &str) -> TrellisResult<()> {
        if !self.filter.matches(stem) {
            return Ok(());
        }
        if !self.content.insert(stem.to_string()) {
            return Err(TrellisError::DuplicateStem {
                stem: stem.to_string(),
            });
        }
        Ok(())
    }

    fn finish(self: Box<Self>) -> TrellisResult<LayoutGroups> {
        let Self {
            mut layouts,
            content,
            ..
        } = *self;
        layouts.sort_by_key(String::len);

        let groups = content
            .into_iter()
            .map(|stem| {
                let chain = match_chain(&layouts, &stem);
                (stem, chain)
            })
            .collect();
        Ok(groups)
    }
}

/// Ancestor layouts of `stem` in root-first order, followed by `stem`.
fn match_chain(sorted_layouts: &[String], stem: &str) -> Vec<String> {
    let (file_dir, _) = entry_path::split(stem);
    let mut chain = Vec::new();
    for layout in sorted_layouts {
        let (layout_dir, _) = entry_path::split(layout);
        if entry_path::is_ancestor_or_self(layout_dir, file_dir) {
            chain.push(layout.clone());
        }
        // nothing longer can be an ancestor
        if layout_dir == file_dir {
            break;
        }
    }
    chain.push(stem.to_string());
    chain
}
