//! Search configuration parameters.

use crate::turn::LineageOrder;

/// Search configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    /// Order of the moves inside each produced turn sequence.
    pub lineage_order: LineageOrder,

    /// Hard cap on the number of moves in one turn.
    /// `None` uses the game's own bound (`ChainGame::max_turn_length`).
    pub max_chain_length: Option<usize>,

    /// Build sibling subtrees on the rayon thread pool.
    /// The resulting tree is identical to the sequential build.
    pub parallel: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            lineage_order: LineageOrder::Chronological,
            max_chain_length: None,
            parallel: false,
        }
    }
}

impl SearchConfig {
    /// Create a config producing sequences in the given order.
    pub fn with_order(lineage_order: LineageOrder) -> Self {
        Self {
            lineage_order,
            ..Default::default()
        }
    }

    /// Create a config that builds subtrees in parallel.
    pub fn parallel() -> Self {
        Self {
            parallel: true,
            ..Default::default()
        }
    }
}
