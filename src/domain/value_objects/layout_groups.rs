//! Result mapping of one resolution run

use std::collections::BTreeMap;

use serde::Serialize;

use super::DirectoryFilter;

/// Layout stems from the root-most ancestor to the deepest, then the file's own stem
pub type LayoutChain = Vec<String>;

/// Mapping from content stem to its layout chain
///
/// Keys iterate in sorted order so rendered output is stable; callers should
/// not rely on any particular order beyond that.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LayoutGroups(BTreeMap<String, LayoutChain>);

impl LayoutGroups {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a chain, returning the chain it replaced (if any).
    pub fn insert(&mut self, stem: String, chain: LayoutChain) -> Option<LayoutChain> {
        self.0.insert(stem, chain)
    }

    pub fn get(&self, stem: &str) -> Option<&LayoutChain> {
        self.0.get(stem)
    }

    pub fn contains(&self, stem: &str) -> bool {
        self.0.contains_key(stem)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &LayoutChain)> {
        self.0.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.0.keys()
    }

    /// Subset whose stems pass `filter`, with chains untouched.
    pub fn filtered(&self, filter: &DirectoryFilter) -> Self {
        Self(
            self.0
                .iter()
                .filter(|(stem, _)| filter.matches(stem))
                .map(|(stem, chain)| (stem.clone(), chain.clone()))
                .collect(),
        )
    }
}

impl FromIterator<(String, LayoutChain)> for LayoutGroups {
    fn from_iter<I: IntoIterator<Item = (String, LayoutChain)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for LayoutGroups {
    type Item = (String, LayoutChain);
    type IntoIter = std::collections::btree_map::IntoIter<String, LayoutChain>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
