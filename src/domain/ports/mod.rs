//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod entry_source;

pub use entry_source::{DirEntry, EntryKind, EntrySource, SourceError, SourceResult};
