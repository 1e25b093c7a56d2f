//! Layout query value object
//!
//! Describes which entries take part in a resolution run and how they are
//! classified: an extension filter producing stems, the reserved layout
//! filename, and a directory filter restricting the reported content files.

use super::entry_path;

/// Extension filter producing stems from entry paths.
///
/// An empty extension disables filtering: every leaf matches and its stem is
/// the unchanged path. A leading dot (`".html"`) is accepted and dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionFilter {
    extension: String,
    suffix: String,
}

impl ExtensionFilter {
    pub fn new(extension: impl Into<String>) -> Self {
        let extension = extension.into().trim().trim_start_matches('.').to_string();
        let suffix = if extension.is_empty() {
            String::new()
        } else {
            format!(".{}", extension)
        };
        Self { extension, suffix }
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Strip the `.ext` suffix, or `None` when `path` does not carry it.
    pub fn stem<'a>(&self, path: &'a str) -> Option<&'a str> {
        if self.suffix.is_empty() {
            return Some(path);
        }
        path.strip_suffix(self.suffix.as_str())
    }
}

/// Path prefix restricting which content files are reported.
///
/// `"."` matches everything; any other value must prefix the stem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryFilter(String);

impl DirectoryFilter {
    pub const ALL: &'static str = ".";

    pub fn new(dir: impl Into<String>) -> Self {
        Self(dir.into())
    }

    pub fn all() -> Self {
        Self::new(Self::ALL)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn matches(&self, stem: &str) -> bool {
        self.0 == Self::ALL || stem.starts_with(self.0.as_str())
    }
}

impl Default for DirectoryFilter {
    fn default() -> Self {
        Self::all()
    }
}

/// Role of an extension-matching entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Layout,
    Content,
}

/// An extension-matching leaf, reduced to its stem
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classified<'a> {
    pub stem: &'a str,
    /// Containing directory of the stem, `""` at the root
    pub dir: &'a str,
    pub role: Role,
}

/// Everything one resolution run needs to classify entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutQuery {
    extension: ExtensionFilter,
    layout_name: String,
    directory: DirectoryFilter,
}

impl LayoutQuery {
    pub fn new(extension: impl Into<String>, layout_name: impl Into<String>) -> Self {
        Self {
            extension: ExtensionFilter::new(extension),
            layout_name: layout_name.into(),
            directory: DirectoryFilter::all(),
        }
    }

    pub fn with_directory(mut self, directory: impl Into<String>) -> Self {
        self.directory = DirectoryFilter::new(directory);
        self
    }

    pub fn extension(&self) -> &ExtensionFilter {
        &self.extension
    }

    pub fn layout_name(&self) -> &str {
        &self.layout_name
    }

    pub fn directory(&self) -> &DirectoryFilter {
        &self.directory
    }

    /// Classify a leaf path. Returns `None` when the extension does not match.
    ///
    /// Content files are classified regardless of the directory filter; the
    /// filter applies when results are reported.
    pub fn classify<'a>(&self, path: &'a str) -> Option<Classified<'a>> {
        let stem = self.extension.stem(path)?;
        let (dir, name) = entry_path::split(stem);
        let role = if name == self.layout_name {
            Role::Layout
        } else {
            Role::Content
        };
        Some(Classified { stem, dir, role })
    }

    /// Whether a content stem is reported under the directory filter.
    pub fn includes(&self, stem: &str) -> bool {
        self.directory.matches(stem)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_leading_dot_is_dropped() {
        let dotted = ExtensionFilter::new(".html");
        assert_eq!(dotted, ExtensionFilter::new("html"));
        assert_eq!(dotted.extension(), "html");
        assert_eq!(dotted.stem("app/index.html"), Some("app/index"));
        assert_eq!(ExtensionFilter::new(".").stem("README"), Some("README"));
    }

    #[test]
    fn extension_mismatch_produces_no_stem() {
        let query = LayoutQuery::new("html", "layout");
        assert_eq!(query.classify("file.txt"), None);
        assert_eq!(query.classify("index"), None);
        assert_eq!(query.classify("index.tmpl"), None);
    }

    #[test]
    fn layout_and_content_are_told_apart_by_final_segment() {
        let query = LayoutQuery::new("html", "layout");

        let layout = query.classify("app/layout.html").unwrap();
        assert_eq!(layout.stem, "app/layout");
        assert_eq!(layout.dir, "app");
        assert_eq!(layout.role, Role::Layout);

        let content = query.classify("app/account/index.html").unwrap();
        assert_eq!(content.stem, "app/account/index");
        assert_eq!(content.dir, "app/account");
        assert_eq!(content.role, Role::Content);
    }

    #[test]
    fn layout_name_must_match_whole_segment() {
        let query = LayoutQuery::new("html", "layout");
        let entry = query.classify("app/my-layout.html").unwrap();
        assert_eq!(entry.role, Role::Content);
    }

    #[test]
    fn empty_extension_disables_filtering() {
        let query = LayoutQuery::new("", "layout");
        let entry = query.classify("test/layout").unwrap();
        assert_eq!(entry.stem, "test/layout");
        assert_eq!(entry.role, Role::Layout);

        let entry = query.classify("test/index.tmpl").unwrap();
        assert_eq!(entry.stem, "test/index.tmpl");
        assert_eq!(entry.role, Role::Content);
    }

    #[test]
    fn directory_filter_dot_matches_everything() {
        let query = LayoutQuery::new("html", "layout");
        assert!(query.includes("index"));
        assert!(query.includes("auth/login"));
    }

    #[test]
    fn directory_filter_is_a_stem_prefix() {
        let query = LayoutQuery::new("html", "layout").with_directory("app");
        assert!(query.includes("app/index"));
        assert!(query.includes("app/account/index"));
        assert!(!query.includes("auth/login"));
        assert!(!query.includes("index"));
    }
}
