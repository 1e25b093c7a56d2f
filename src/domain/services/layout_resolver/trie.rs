//! Prefix-tree collector
//!
//! Each node is one directory holding its layout stem, its direct content
//! stems and its subdirectories. Entries are routed to their node during the
//! walk; `finish` then makes a single pass from the root carrying the
//! inherited chain down the tree. One walk plus one tree pass, independent
//! of depth and layout count.

use std::collections::HashMap;

use super::LayoutCollector;
use crate::domain::value_objects::{entry_path, DirectoryFilter, LayoutGroups};
use crate::error::{TrellisError, TrellisResult};

#[derive(Debug, Default)]
struct TrieNode {
    layout: Option<String>,
    content: Vec<String>,
    children: HashMap<String, TrieNode>,
}

/// Collector building a directory prefix tree
#[derive(Debug)]
pub struct TrieCollector {
    root: TrieNode,
    filter: DirectoryFilter,
}

impl TrieCollector {
    pub fn new(filter: DirectoryFilter) -> Self {
        Self {
            root: TrieNode::default(),
            filter,
        }
    }

    fn node_mut(&mut self, dir: &str) -> &mut TrieNode {
        let mut node = &mut self.root;
        for segment in entry_path::segments(dir) {
            node = node.children.entry(segment.to_string()).or_default();
        }
        node
    }
}

impl LayoutCollector for TrieCollector {
    fn add_layout(&mut self, stem: &str, dir: &str) -> TrellisResult<()> {
        let node = self.node_mut(dir);
        if let Some(first) = &node.layout {
            return Err(TrellisError::DuplicateLayout {
                dir: dir.to_string(),
                first: first.clone(),
                second: stem.to_string(),
            });
        }
        node.layout = Some(stem.to_string());
        Ok(())
    }

    fn add_content(&mut self, stem: &str, dir: &str) -> TrellisResult<()> {
        self.node_mut(dir).content.push(stem.to_string());
        Ok(())
    }

    fn finish(self: Box<Self>) -> TrellisResult<LayoutGroups> {
        let Self { root, filter } = *self;
        let mut groups = LayoutGroups::new();
        emit(root, &mut Vec::new(), &filter, &mut groups)?;
        Ok(groups)
    }
}

/// Emit the chains of `node` and its subtree.
///
/// `inherited` holds the layouts of all ancestors; the node's own layout is
/// pushed for the duration of its subtree.
fn emit(
    node: TrieNode,
    inherited: &mut Vec<String>,
    filter: &DirectoryFilter,
    groups: &mut LayoutGroups,
) -> TrellisResult<()> {
    let TrieNode {
        layout,
        content,
        children,
    } = node;

    let has_layout = layout.is_some();
    if let Some(layout) = layout {
        inherited.push(layout);
    }

    for stem in content {
        if !filter.matches(&stem) {
            continue;
        }
        let mut chain = Vec::with_capacity(inherited.len() + 1);
        chain.extend(inherited.iter().cloned());
        chain.push(stem.clone());
        if groups.insert(stem.clone(), chain).is_some() {
            return Err(TrellisError::DuplicateStem { stem });
        }
    }

    for child in children.into_values() {
        emit(child, inherited, filter, groups)?;
    }

    if has_layout {
        inherited.pop();
    }
    Ok(())
}
