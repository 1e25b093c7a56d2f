//! In-memory entry source
//!
//! A tree of named containers and leaves held in sorted maps. Listing order
//! and error behaviour match `LocalFs`, which makes it the test double for
//! anything that walks an `EntrySource`.

use std::collections::{BTreeMap, BTreeSet};

use crate::domain::ports::entry_source::{
    DirEntry, EntryKind, EntrySource, SourceError, SourceResult,
};
use crate::domain::value_objects::entry_path;

/// In-memory tree of entries
///
/// Containers are keyed by path (`"."` for the root) and map child names to
/// their kind. Parents are created on demand when a leaf is added.
#[derive(Debug, Clone)]
pub struct MemoryFs {
    containers: BTreeMap<String, BTreeMap<String, EntryKind>>,
    unreadable: BTreeSet<String>,
}

impl MemoryFs {
    /// Create an empty tree holding only the root container
    pub fn new() -> Self {
        let mut containers = BTreeMap::new();
        containers.insert(entry_path::ROOT.to_string(), BTreeMap::new());
        Self {
            containers,
            unreadable: BTreeSet::new(),
        }
    }

    /// Build a tree from leaf paths such as `"app/index.html"`.
    pub fn from_files<I, P>(paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<str>,
    {
        let mut fs = Self::new();
        for path in paths {
            fs.add_file(path.as_ref());
        }
        fs
    }

    /// Builder-style [`add_file`](Self::add_file)
    pub fn with_file(mut self, path: &str) -> Self {
        self.add_file(path);
        self
    }

    /// Builder-style [`add_dir`](Self::add_dir)
    pub fn with_dir(mut self, path: &str) -> Self {
        self.add_dir(path);
        self
    }

    /// Builder-style [`deny`](Self::deny)
    pub fn with_unreadable(mut self, path: &str) -> Self {
        self.deny(path);
        self
    }

    /// Add a leaf, creating missing parent containers.
    pub fn add_file(&mut self, path: &str) {
        let (dir, name) = entry_path::split(path);
        let parent = self.ensure_dir(dir);
        self.children_mut(&parent)
            .insert(name.to_string(), EntryKind::Leaf);
    }

    /// Add an (empty) container, creating missing parents.
    pub fn add_dir(&mut self, path: &str) {
        self.ensure_dir(path);
    }

    /// Make listing `path` fail with `PermissionDenied`.
    pub fn deny(&mut self, path: &str) {
        self.ensure_dir(path);
        self.unreadable.insert(normalize(path));
    }

    fn ensure_dir(&mut self, path: &str) -> String {
        let mut current = entry_path::ROOT.to_string();
        for segment in entry_path::segments(path) {
            self.children_mut(&current)
                .insert(segment.to_string(), EntryKind::Container);
            current = entry_path::join(&current, segment);
        }
        self.containers.entry(current.clone()).or_default();
        current
    }

    fn children_mut(&mut self, dir: &str) -> &mut BTreeMap<String, EntryKind> {
        self.containers.entry(dir.to_string()).or_default()
    }
}

impl Default for MemoryFs {
    fn default() -> Self {
        Self::new()
    }
}

fn normalize(path: &str) -> String {
    let trimmed = path.trim_matches('/');
    if trimmed.is_empty() {
        entry_path::ROOT.to_string()
    } else {
        trimmed.to_string()
    }
}

impl EntrySource for MemoryFs {
    fn stat(&self, path: &str) -> SourceResult<EntryKind> {
        let path = normalize(path);
        if self.containers.contains_key(&path) {
            return Ok(EntryKind::Container);
        }
        let (dir, name) = entry_path::split(&path);
        let parent = normalize(dir);
        self.containers
            .get(&parent)
            .and_then(|children| children.get(name))
            .copied()
            .ok_or_else(|| SourceError::NotFound(path.clone()))
    }

    fn list(&self, path: &str) -> SourceResult<Vec<DirEntry>> {
        let path = normalize(path);
        if self.unreadable.contains(&path) {
            return Err(SourceError::PermissionDenied(path));
        }
        match self.containers.get(&path) {
            Some(children) => Ok(children
                .iter()
                .map(|(name, kind)| DirEntry::new(name.clone(), *kind))
                .collect()),
            None => match self.stat(&path) {
                Ok(_) => Err(SourceError::NotAContainer(path)),
                Err(err) => Err(err),
            },
        }
    }
}
