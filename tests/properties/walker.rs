//! Property tests for tree traversal.

use std::collections::BTreeSet;

use proptest::prelude::*;

use trellis::domain::value_objects::entry_path;
use trellis::{walk, walk_breadth_first, WalkControl, WalkOrder};

use super::trees::{leaf_paths, memory_tree};

const ORDERS: [WalkOrder; 2] = [WalkOrder::DepthFirst, WalkOrder::BreadthFirst];

fn visit_all(paths: &[String], order: WalkOrder) -> Vec<String> {
    let source = memory_tree(paths);
    let mut visited = Vec::new();
    walk(&source, entry_path::ROOT, order, |entry| {
        visited.push(entry.path.to_string());
        WalkControl::Continue
    })
    .unwrap();
    visited
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Breadth-first visits never go back to a shallower depth.
    #[test]
    fn property_breadth_first_depth_is_monotonic(paths in leaf_paths()) {
        let visited = visit_all(&paths, WalkOrder::BreadthFirst);
        let depths: Vec<usize> = visited.iter().map(|p| entry_path::depth(p)).collect();
        prop_assert!(depths.windows(2).all(|w| w[0] <= w[1]), "{:?}", visited);
    }

    /// PROPERTY: Both orders visit every entry exactly once, root first.
    #[test]
    fn property_orders_visit_the_same_entries(paths in leaf_paths()) {
        for order in ORDERS {
            let visited = visit_all(&paths, order);
            prop_assert_eq!(visited.first().map(String::as_str), Some(entry_path::ROOT));

            let unique: BTreeSet<&String> = visited.iter().collect();
            prop_assert_eq!(unique.len(), visited.len());

            for leaf in &paths {
                prop_assert!(visited.contains(leaf), "{} missing under {}", leaf, order);
            }
        }

        let dfs: BTreeSet<String> =
            visit_all(&paths, WalkOrder::DepthFirst).into_iter().collect();
        let bfs: BTreeSet<String> =
            visit_all(&paths, WalkOrder::BreadthFirst).into_iter().collect();
        prop_assert_eq!(dfs, bfs);
    }

    /// PROPERTY: SkipAll ends the walk immediately and successfully.
    #[test]
    fn property_skip_all_stops_after_that_visit(paths in leaf_paths(), stop_at in 0usize..40) {
        for order in ORDERS {
            let total = visit_all(&paths, order).len();
            let source = memory_tree(&paths);
            let mut visits = 0usize;
            let result = walk(&source, entry_path::ROOT, order, |_| {
                visits += 1;
                if visits > stop_at {
                    WalkControl::SkipAll
                } else {
                    WalkControl::Continue
                }
            });
            prop_assert!(result.is_ok());
            prop_assert_eq!(visits, total.min(stop_at + 1));
        }
    }

    /// PROPERTY: Skipping a container hides exactly its descendants.
    #[test]
    fn property_skip_subtree_prunes_descendants(paths in leaf_paths()) {
        let source = memory_tree(&paths);
        let mut visited = Vec::new();
        walk_breadth_first(&source, entry_path::ROOT, |entry| {
            visited.push(entry.path.to_string());
            if entry.is_container() && entry.name() == "a" {
                WalkControl::SkipSubtree
            } else {
                WalkControl::Continue
            }
        })
        .unwrap();

        for path in &visited {
            let (dir, _) = entry_path::split(path);
            prop_assert!(
                !entry_path::segments(dir).any(|s| s == "a"),
                "{} visited below a skipped container",
                path
            );
        }
    }
}
