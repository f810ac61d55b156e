//! Game tree construction (the macro level of the search).
//!
//! Each ply of the game tree is one player's complete turn, with all of its
//! forced continuations already resolved by the [`TurnExpander`]. The tree is
//! built depth-first and unpruned, down to a caller-supplied depth.

use dotsearch_core::{ChainGame, Depth, Result};

use crate::config::SearchConfig;
use crate::node::NodeId;
use crate::tree::Tree;
use crate::turn::{TurnExpander, TurnSequence};

/// A game state in the tree, with the turn that produced it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameNode<S, A> {
    /// Snapshot of the state after `turn` was played.
    pub state: S,
    /// `None` for the root.
    pub turn: Option<TurnSequence<A>>,
}

impl<S, A> GameNode<S, A> {
    pub fn root(state: S) -> Self {
        Self { state, turn: None }
    }
}

/// Tree of game states for a [`ChainGame`].
pub type GameTree<G> = Tree<GameNode<<G as ChainGame>::State, <G as ChainGame>::Action>>;

/// Builds game trees to a bounded depth.
#[derive(Clone, Debug)]
pub struct GameTreeBuilder<G: ChainGame> {
    game: G,
    config: SearchConfig,
}

impl<G: ChainGame> GameTreeBuilder<G> {
    pub fn new(game: G, config: SearchConfig) -> Self {
        Self { game, config }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Validate `depth`, then build the tree rooted at `state`.
    ///
    /// # Errors
    /// Returns `SearchError::NegativeDepth` before any expansion if
    /// `depth < 0`, or any error raised while expanding turns.
    pub fn build(&self, state: G::State, depth: i64) -> Result<GameTree<G>> {
        let depth = Depth::new(depth)?;
        let mut tree = Tree::new(GameNode::root(state));
        if self.config.parallel {
            self.build_to_depth_parallel(&mut tree, NodeId::ROOT, depth)?;
        } else {
            self.build_to_depth(&mut tree, NodeId::ROOT, depth)?;
        }
        Ok(tree)
    }

    /// Every complete turn available from `state`, in the configured order
    pub fn turn_sequences(&self, state: &G::State) -> Result<Vec<TurnSequence<G::Action>>> {
        TurnExpander::new(&self.game)
            .with_max_chain_length(self.config.max_chain_length)
            .turn_sequences(state, self.config.lineage_order)
    }

    /// Play every move of `turn` on a copy of `state`, in order.
    pub fn apply_turn(&self, state: &G::State, turn: &TurnSequence<G::Action>) -> G::State {
        turn.iter()
            .fold(state.clone(), |acc, &mv| self.game.apply(&acc, mv))
    }

    /// Append one child per available turn under `node`.
    ///
    /// Returns the new children, in turn order.
    pub fn expand_one_level(&self, tree: &mut GameTree<G>, node: NodeId) -> Result<Vec<NodeId>> {
        let state = tree.payload(node).state.clone();
        let turns = self.turn_sequences(&state)?;

        let mut children = Vec::with_capacity(turns.len());
        for turn in turns {
            let next = self.apply_turn(&state, &turn);
            children.push(tree.add_child(
                node,
                GameNode {
                    state: next,
                    turn: Some(turn),
                },
            ));
        }
        Ok(children)
    }

    /// Expand `node` and its descendants until `depth` plies are reached.
    ///
    /// Depth counts the plies produced below `node`: at depth zero the node is
    /// left as a frontier leaf, with no extra level expanded.
    pub fn build_to_depth(&self, tree: &mut GameTree<G>, node: NodeId, depth: Depth) -> Result<()> {
        let Some(remaining) = depth.child() else {
            return Ok(());
        };
        for child in self.expand_one_level(tree, node)? {
            self.build_to_depth(tree, child, remaining)?;
        }
        Ok(())
    }
}
