//! Slash-separated entry paths
//!
//! Entry paths are relative to the source root. The root itself is `"."`,
//! its children carry no `./` prefix.

/// Path of the source root
pub const ROOT: &str = ".";

/// Join a container path and a child name.
pub fn join(parent: &str, name: &str) -> String {
    if parent == ROOT || parent.is_empty() {
        name.to_string()
    } else {
        format!("{}/{}", parent, name)
    }
}

/// Split a path into its directory and final segment.
///
/// The directory has no trailing slash and is empty for root-level entries.
pub fn split(path: &str) -> (&str, &str) {
    match path.rfind('/') {
        Some(idx) => (&path[..idx], &path[idx + 1..]),
        None => ("", path),
    }
}

/// Parent directory of `dir`, or `None` for the root (`""`).
pub fn parent(dir: &str) -> Option<&str> {
    if dir.is_empty() {
        return None;
    }
    Some(split(dir).0)
}

/// Directory segments of `dir`; empty for the root.
pub fn segments(dir: &str) -> impl Iterator<Item = &str> {
    dir.split('/').filter(|s| !s.is_empty())
}

/// True when `ancestor` is `dir` itself or one of its parent directories.
///
/// Compares whole segments: `app` is an ancestor of `app/account` but not of
/// `apple`.
pub fn is_ancestor_or_self(ancestor: &str, dir: &str) -> bool {
    if ancestor.is_empty() || ancestor == dir {
        return true;
    }
    dir.strip_prefix(ancestor)
        .is_some_and(|rest| rest.starts_with('/'))
}

/// Number of segments in `path`; the root has depth 0.
pub fn depth(path: &str) -> usize {
    if path == ROOT || path.is_empty() {
        0
    } else {
        path.split('/').count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_from_root_has_no_prefix() {
        assert_eq!(join(ROOT, "index.html"), "index.html");
        assert_eq!(join("app", "index.html"), "app/index.html");
    }

    #[test]
    fn split_returns_dir_without_trailing_slash() {
        assert_eq!(split("app/account/index"), ("app/account", "index"));
        assert_eq!(split("index"), ("", "index"));
    }

    #[test]
    fn parent_walks_up_to_root() {
        assert_eq!(parent("app/account"), Some("app"));
        assert_eq!(parent("app"), Some(""));
        assert_eq!(parent(""), None);
    }

    #[test]
    fn ancestry_compares_whole_segments() {
        assert!(is_ancestor_or_self("", "app"));
        assert!(is_ancestor_or_self("app", "app"));
        assert!(is_ancestor_or_self("app", "app/account"));
        assert!(!is_ancestor_or_self("app", "apple"));
        assert!(!is_ancestor_or_self("app/account", "app"));
    }

    #[test]
    fn depth_counts_segments() {
        assert_eq!(depth(ROOT), 0);
        assert_eq!(depth("root"), 1);
        assert_eq!(depth("root/dirB/sub"), 3);
    }
}
