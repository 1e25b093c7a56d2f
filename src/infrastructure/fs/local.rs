//! Local File System Implementation
//!
//! Implements the EntrySource port for a directory on the local disk.

use std::path::PathBuf;

use crate::domain::ports::entry_source::{
    DirEntry, EntryKind, EntrySource, SourceError, SourceResult,
};
use crate::domain::value_objects::entry_path;

/// Entry source rooted at a local directory
///
/// Entry paths are resolved relative to `root`. Children are classified
/// without following symbolic links, so a link is always a leaf.
#[derive(Debug, Clone)]
pub struct LocalFs {
    root: PathBuf,
}

impl LocalFs {
    /// Create a LocalFs rooted at `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn resolve(&self, path: &str) -> PathBuf {
        if path == entry_path::ROOT || path.is_empty() {
            self.root.clone()
        } else {
            self.root.join(path)
        }
    }
}

impl EntrySource for LocalFs {
    fn stat(&self, path: &str) -> SourceResult<EntryKind> {
        let metadata =
            std::fs::metadata(self.resolve(path)).map_err(|e| SourceError::from_io(path, e))?;
        Ok(if metadata.is_dir() {
            EntryKind::Container
        } else {
            EntryKind::Leaf
        })
    }

    fn list(&self, path: &str) -> SourceResult<Vec<DirEntry>> {
        let full = self.resolve(path);
        if !full.is_dir() {
            if full.exists() {
                return Err(SourceError::NotAContainer(path.to_string()));
            }
            return Err(SourceError::NotFound(path.to_string()));
        }

        let reader = std::fs::read_dir(&full).map_err(|e| SourceError::from_io(path, e))?;
        let mut children = Vec::new();
        for entry in reader {
            let entry = entry.map_err(|e| SourceError::from_io(path, e))?;
            let name = match entry.file_name().into_string() {
                Ok(name) => name,
                Err(raw) => {
                    tracing::warn!(
                        dir = path,
                        name = %raw.to_string_lossy(),
                        "skipping entry with non-UTF-8 name"
                    );
                    continue;
                }
            };
            let file_type = entry
                .file_type()
                .map_err(|e| SourceError::from_io(path, e))?;
            let kind = if file_type.is_dir() {
                EntryKind::Container
            } else {
                EntryKind::Leaf
            };
            children.push(DirEntry::new(name, kind));
        }
        children.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(children)
    }
}
