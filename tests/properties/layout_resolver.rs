//! Property tests for layout chain resolution.

use proptest::prelude::*;

use trellis::domain::value_objects::{entry_path, DirectoryFilter};
use trellis::{LayoutGrouper, LayoutGroups, LayoutQuery, ResolveStrategy, WalkOrder};

use super::trees::{leaf_paths, memory_tree};

fn resolve(
    paths: &[String],
    strategy: ResolveStrategy,
    order: WalkOrder,
    dir: &str,
) -> LayoutGroups {
    let query = LayoutQuery::new("html", "layout").with_directory(dir);
    LayoutGrouper::new(query)
        .with_strategy(strategy)
        .with_walk_order(order)
        .group(&memory_tree(paths))
        .unwrap()
}

/// Directories holding a `layout.html`, shallowest first
fn layout_dirs(paths: &[String]) -> Vec<String> {
    let mut dirs: Vec<String> = paths
        .iter()
        .filter_map(|p| p.strip_suffix("layout.html"))
        .filter(|prefix| prefix.is_empty() || prefix.ends_with('/'))
        .map(|prefix| prefix.trim_end_matches('/').to_string())
        .collect();
    dirs.sort_by_key(|d| entry_path::depth(d));
    dirs
}

fn layout_stem(dir: &str) -> String {
    entry_path::join(dir, "layout")
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Every strategy and walk order produces the same mapping.
    #[test]
    fn property_strategies_agree(paths in leaf_paths()) {
        let baseline = resolve(&paths, ResolveStrategy::Trie, WalkOrder::DepthFirst, ".");
        for strategy in ResolveStrategy::ALL {
            for order in [WalkOrder::DepthFirst, WalkOrder::BreadthFirst] {
                let groups = resolve(&paths, strategy, order, ".");
                prop_assert_eq!(&groups, &baseline, "{} / {}", strategy, order);
            }
        }
    }

    /// PROPERTY: A chain lists exactly the layouts of the file's directory and
    /// its ancestors, root-most first, and ends with the file itself.
    #[test]
    fn property_chains_follow_ancestry(paths in leaf_paths()) {
        let groups = resolve(&paths, ResolveStrategy::Trie, WalkOrder::DepthFirst, ".");
        let layouts = layout_dirs(&paths);

        for (stem, chain) in groups.iter() {
            let (dir, _) = entry_path::split(stem);
            let mut expected: Vec<String> = layouts
                .iter()
                .filter(|layout_dir| entry_path::is_ancestor_or_self(layout_dir, dir))
                .map(|layout_dir| layout_stem(layout_dir))
                .collect();
            expected.push(stem.clone());
            prop_assert_eq!(chain, &expected);
        }
    }

    /// PROPERTY: Every content template is reported; nothing else is.
    #[test]
    fn property_reports_every_content_file(paths in leaf_paths()) {
        let groups = resolve(&paths, ResolveStrategy::ChainMatch, WalkOrder::BreadthFirst, ".");
        let mut expected: Vec<String> = paths
            .iter()
            .filter(|p| p.ends_with(".html"))
            .filter(|p| entry_path::split(p).1 != "layout.html")
            .map(|p| p.trim_end_matches(".html").to_string())
            .collect();
        expected.sort();

        let reported: Vec<String> = groups.keys().cloned().collect();
        prop_assert_eq!(reported, expected);
    }

    /// PROPERTY: Filtering by directory yields the matching subset of the full
    /// mapping, chains unchanged.
    #[test]
    fn property_directory_filter_is_a_subset(
        paths in leaf_paths(),
        dir in proptest::sample::select(vec!["a", "app", "app/", "b/a", "zzz"]),
    ) {
        let full = resolve(&paths, ResolveStrategy::Trie, WalkOrder::DepthFirst, ".");
        for strategy in ResolveStrategy::ALL {
            let filtered = resolve(&paths, strategy, WalkOrder::DepthFirst, dir);
            prop_assert_eq!(&filtered, &full.filtered(&DirectoryFilter::new(dir)));
            for (stem, _) in filtered.iter() {
                prop_assert!(stem.starts_with(dir));
            }
        }
    }
}
