//! Turn expansion (the micro level of the search).
//!
//! A turn is everything one player plays before the opponent moves. A move
//! that grants an extra move (completing a box) forces the same player to
//! continue, so one turn can contain several moves and the possible turns
//! form a tree of their own:
//!
//! ```text
//! root (no move)
//! ├── a ──┬── b        a completes a box, the turn continues
//! │       └── c
//! └── d                d completes nothing, the turn ends
//! ```
//!
//! Every leaf of this tree is one complete turn.

use std::fmt;

use dotsearch_core::{ChainGame, Result, SearchError};

use crate::node::NodeId;
use crate::tree::Tree;

/// Tree of the moves of one turn. The root payload is `None`.
pub type TurnTree<A> = Tree<Option<A>>;

/// Order of the moves in a flattened turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum LineageOrder {
    /// Raw lineage, last move first.
    LeafToRoot,
    /// First move first, the order the moves are played in.
    #[default]
    Chronological,
}

/// Every move one player makes in a single turn.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TurnSequence<A>(Vec<A>);

impl<A> TurnSequence<A> {
    pub fn new(moves: Vec<A>) -> Self {
        Self(moves)
    }

    pub fn moves(&self) -> &[A] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, A> {
        self.0.iter()
    }

    /// The same moves in the opposite order
    #[must_use]
    pub fn reversed(mut self) -> Self {
        self.0.reverse();
        self
    }
}

impl<A> From<Vec<A>> for TurnSequence<A> {
    fn from(moves: Vec<A>) -> Self {
        Self(moves)
    }
}

impl<'a, A> IntoIterator for &'a TurnSequence<A> {
    type Item = &'a A;
    type IntoIter = std::slice::Iter<'a, A>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<A: fmt::Display> fmt::Display for TurnSequence<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, mv) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{mv}")?;
        }
        write!(f, "]")
    }
}

/// Builds the tree of every possible turn from a game state.
pub struct TurnExpander<'g, G: ChainGame> {
    game: &'g G,
    max_chain_length: Option<usize>,
}

impl<'g, G: ChainGame> TurnExpander<'g, G> {
    pub fn new(game: &'g G) -> Self {
        Self {
            game,
            max_chain_length: None,
        }
    }

    /// Override the game-supplied bound on moves per turn.
    pub fn with_max_chain_length(mut self, limit: Option<usize>) -> Self {
        self.max_chain_length = limit;
        self
    }

    /// Build the turn tree for `state`.
    ///
    /// Moves are added in `legal_actions` order. A move that grants an extra
    /// move is expanded further on a copy of the state with that move played;
    /// any other move is a leaf.
    ///
    /// # Errors
    /// Returns `SearchError::ChainLimitExceeded` if a turn would grow past
    /// the chain limit.
    pub fn expand(&self, state: &G::State) -> Result<TurnTree<G::Action>> {
        let limit = self
            .max_chain_length
            .unwrap_or_else(|| self.game.max_turn_length(state));
        let mut tree = Tree::new(None);
        self.expand_node(&mut tree, NodeId::ROOT, state, 0, limit)?;
        Ok(tree)
    }

    fn expand_node(
        &self,
        tree: &mut TurnTree<G::Action>,
        node: NodeId,
        state: &G::State,
        played: usize,
        limit: usize,
    ) -> Result<()> {
        let moves = self.game.legal_actions(state);
        if moves.is_empty() {
            return Ok(());
        }
        if played >= limit {
            return Err(SearchError::ChainLimitExceeded { limit });
        }

        for mv in moves {
            let child = tree.add_child(node, Some(mv));
            if self.game.grants_extra_move(state, mv) {
                let next = self.game.apply(state, mv);
                self.expand_node(tree, child, &next, played + 1, limit)?;
            }
        }
        Ok(())
    }

    /// Expand and flatten in one go.
    pub fn turn_sequences(
        &self,
        state: &G::State,
        order: LineageOrder,
    ) -> Result<Vec<TurnSequence<G::Action>>> {
        let tree = self.expand(state)?;
        Ok(flatten_to_turn_sequences(&tree, order))
    }
}

/// One turn sequence per leaf of the turn tree, depth-first.
///
/// The root placeholder is stripped from each lineage. A tree that is only a
/// root (no legal moves) is itself the one leaf and yields a single empty
/// sequence, so a finished game still passes its turn.
pub fn flatten_to_turn_sequences<A: Copy>(
    tree: &TurnTree<A>,
    order: LineageOrder,
) -> Vec<TurnSequence<A>> {
    tree.leaves()
        .into_iter()
        .map(|leaf| {
            let raw: Vec<A> = tree
                .lineage(leaf)
                .into_iter()
                .filter_map(|id| *tree.payload(id))
                .collect();
            let sequence = TurnSequence::new(raw);
            match order {
                LineageOrder::LeafToRoot => sequence,
                LineageOrder::Chronological => sequence.reversed(),
            }
        })
        .collect()
}
