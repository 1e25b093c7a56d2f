//! Random template tree generation shared by the property suites.

use proptest::prelude::*;
use trellis::MemoryFs;

const DIRS: &[&str] = &["a", "b", "app", "apple"];
const FILES: &[&str] = &["layout.html", "index.html", "page.html", "notes.txt"];

/// One leaf path: up to three directory segments and a file name.
///
/// Directory and file names never collide, so any set of these paths forms
/// a valid tree.
pub fn leaf_path() -> impl Strategy<Value = String> {
    (
        proptest::collection::vec(proptest::sample::select(DIRS), 0..=3),
        proptest::sample::select(FILES),
    )
        .prop_map(|(dirs, file)| {
            let mut segments: Vec<&str> = dirs;
            segments.push(file);
            segments.join("/")
        })
}

/// Sorted, de-duplicated leaf paths
pub fn leaf_paths() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::btree_set(leaf_path(), 0..24)
        .prop_map(|paths| paths.into_iter().collect())
}

pub fn memory_tree(paths: &[String]) -> MemoryFs {
    MemoryFs::from_files(paths)
}
