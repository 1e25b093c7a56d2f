//! Subcommand implementations for the `trellis` binary

pub mod group;
pub mod walk;

use std::path::Path;

use trellis::TrellisError;

/// Fail early with a readable error when the walk root is not a directory.
pub fn ensure_directory(root: &Path) -> Result<(), TrellisError> {
    if root.is_dir() {
        Ok(())
    } else {
        Err(TrellisError::DirectoryNotFound {
            path: root.to_path_buf(),
        })
    }
}
