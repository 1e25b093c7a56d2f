//! Error types for Trellis
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::services::walker::WalkError;

/// Result type alias for Trellis operations
pub type TrellisResult<T> = Result<T, TrellisError>;

/// Main error type for Trellis operations
#[derive(Error, Debug)]
pub enum TrellisError {
    /// Traversal aborted on an unskipped stat or listing failure
    #[error(transparent)]
    Walk(#[from] WalkError),

    /// Two layout files resolved to the same directory
    #[error("duplicate layout in directory '{dir}': '{first}' and '{second}'")]
    DuplicateLayout {
        dir: String,
        first: String,
        second: String,
    },

    /// Two content entries reduced to the same stem
    #[error("duplicate content stem '{stem}'")]
    DuplicateStem { stem: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file could not be parsed
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Directory not found
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::SourceError;

    #[test]
    fn test_error_display_duplicate_layout() {
        let err = TrellisError::DuplicateLayout {
            dir: "app".to_string(),
            first: "app/layout".to_string(),
            second: "app/layout".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "duplicate layout in directory 'app': 'app/layout' and 'app/layout'"
        );
    }

    #[test]
    fn test_error_display_walk_is_transparent() {
        let err: TrellisError = WalkError::Listing {
            path: "private".to_string(),
            source: SourceError::PermissionDenied("private".to_string()),
        }
        .into();
        assert_eq!(
            err.to_string(),
            "failed to list 'private': permission denied: private"
        );
    }
}
