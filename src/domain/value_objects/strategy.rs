//! Resolver strategy value object

use serde::{Deserialize, Serialize};

use super::WalkOrder;

/// Algorithm used to assemble layout chains
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum ResolveStrategy {
    /// Prefix tree over directory segments; one walk plus one tree pass
    #[default]
    Trie,
    /// Sorted layout list matched against every file; O(files x layouts)
    ChainMatch,
    /// Streams chains directory by directory during a breadth-first walk
    BreadthFirst,
}

impl ResolveStrategy {
    pub const ALL: [ResolveStrategy; 3] = [
        ResolveStrategy::Trie,
        ResolveStrategy::ChainMatch,
        ResolveStrategy::BreadthFirst,
    ];

    /// Walk order this strategy runs with, given the configured preference.
    ///
    /// Breadth-first streaming depends on ancestors being complete before
    /// descendants are seen, so it ignores the preference.
    pub fn walk_order(self, preferred: WalkOrder) -> WalkOrder {
        match self {
            ResolveStrategy::BreadthFirst => WalkOrder::BreadthFirst,
            ResolveStrategy::Trie | ResolveStrategy::ChainMatch => preferred,
        }
    }
}

impl std::fmt::Display for ResolveStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResolveStrategy::Trie => write!(f, "trie"),
            ResolveStrategy::ChainMatch => write!(f, "chain-match"),
            ResolveStrategy::BreadthFirst => write!(f, "breadth-first"),
        }
    }
}

impl std::str::FromStr for ResolveStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "trie" => Ok(ResolveStrategy::Trie),
            "chain-match" | "chain_match" | "chain" => Ok(ResolveStrategy::ChainMatch),
            "breadth-first" | "breadth_first" | "bfs" => Ok(ResolveStrategy::BreadthFirst),
            other => Err(format!("unknown resolve strategy '{}'", other)),
        }
    }
}
