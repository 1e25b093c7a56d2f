//! Traversal order value object

use serde::{Deserialize, Serialize};

/// Order in which the walker visits entries
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum WalkOrder {
    /// Pre-order descent: a container's subtree is finished before its next sibling
    #[default]
    DepthFirst,
    /// Every entry at depth k is visited before any entry at depth k + 1
    BreadthFirst,
}

impl std::fmt::Display for WalkOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WalkOrder::DepthFirst => write!(f, "depth-first"),
            WalkOrder::BreadthFirst => write!(f, "breadth-first"),
        }
    }
}

impl std::str::FromStr for WalkOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "depth-first" | "depth_first" | "dfs" => Ok(WalkOrder::DepthFirst),
            "breadth-first" | "breadth_first" | "bfs" => Ok(WalkOrder::BreadthFirst),
            other => Err(format!("unknown walk order '{}'", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walk_order_serde_is_kebab_case() {
        let order: WalkOrder = serde_json::from_str("\"breadth-first\"").unwrap();
        assert_eq!(order, WalkOrder::BreadthFirst);
        assert_eq!(
            serde_json::to_string(&WalkOrder::DepthFirst).unwrap(),
            "\"depth-first\""
        );
    }

    #[test]
    fn walk_order_parses_short_aliases() {
        assert_eq!("bfs".parse::<WalkOrder>().unwrap(), WalkOrder::BreadthFirst);
        assert_eq!("DFS".parse::<WalkOrder>().unwrap(), WalkOrder::DepthFirst);
        assert!("sideways".parse::<WalkOrder>().is_err());
    }
}
