//! EntrySource port - abstraction over a hierarchical namespace of entries
//!
//! The walker only depends on this trait, so the same traversal runs against
//! the local disk (`LocalFs`) and the in-memory double (`MemoryFs`).
//!
//! Paths are slash-separated and relative to the source root, which is `"."`.

/// Result type for entry source operations
pub type SourceResult<T> = Result<T, SourceError>;

/// Entry source operation errors
#[derive(Debug)]
pub enum SourceError {
    /// Entry does not exist
    NotFound(String),
    /// Entry exists but may not be read
    PermissionDenied(String),
    /// `list` was called on a leaf
    NotAContainer(String),
    /// Any other I/O failure
    Io { path: String, source: std::io::Error },
}

impl SourceError {
    /// Classify an I/O error raised while touching `path`.
    pub fn from_io(path: &str, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => SourceError::NotFound(path.to_string()),
            std::io::ErrorKind::PermissionDenied => {
                SourceError::PermissionDenied(path.to_string())
            }
            _ => SourceError::Io {
                path: path.to_string(),
                source: err,
            },
        }
    }

    /// Path of the entry the error refers to
    pub fn path(&self) -> &str {
        match self {
            SourceError::NotFound(path)
            | SourceError::PermissionDenied(path)
            | SourceError::NotAContainer(path) => path,
            SourceError::Io { path, .. } => path,
        }
    }
}

impl std::fmt::Display for SourceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceError::NotFound(path) => write!(f, "entry not found: {}", path),
            SourceError::PermissionDenied(path) => write!(f, "permission denied: {}", path),
            SourceError::NotAContainer(path) => write!(f, "not a directory: {}", path),
            SourceError::Io { path, source } => write!(f, "I/O error on {}: {}", path, source),
        }
    }
}

impl std::error::Error for SourceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SourceError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Whether an entry can hold children
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    Container,
    Leaf,
}

impl EntryKind {
    pub fn is_container(self) -> bool {
        matches!(self, EntryKind::Container)
    }
}

/// One immediate child of a container
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub name: String,
    pub kind: EntryKind,
}

impl DirEntry {
    pub fn new(name: impl Into<String>, kind: EntryKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }
}

/// Abstract hierarchical entry source
///
/// Implementations:
/// - `LocalFs` - a directory on the local disk
/// - `MemoryFs` - in-memory tree for tests and synthetic data
pub trait EntrySource {
    /// Inspect a single entry
    fn stat(&self, path: &str) -> SourceResult<EntryKind>;

    /// List the immediate children of a container, sorted by name
    fn list(&self, path: &str) -> SourceResult<Vec<DirEntry>>;
}

impl<T: EntrySource + ?Sized> EntrySource for &T {
    fn stat(&self, path: &str) -> SourceResult<EntryKind> {
        (**self).stat(path)
    }

    fn list(&self, path: &str) -> SourceResult<Vec<DirEntry>> {
        (**self).list(path)
    }
}
