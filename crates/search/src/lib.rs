//! Turn and game tree construction for chain-move games.
//!
//! This crate builds, to a bounded depth, the tree of every state reachable
//! by complete turns of a [`ChainGame`](dotsearch_core::ChainGame). It works
//! on two levels:
//!
//! - **Turn level**: [`TurnExpander`] enumerates every way the player to move
//!   can spend a turn, following forced continuations, and flattens them into
//!   [`TurnSequence`]s.
//! - **Game level**: [`GameTreeBuilder`] applies each turn sequence to produce
//!   the child states, recursively, down to the requested depth.
//!
//! Both levels store their nodes in the same arena [`Tree`].
//!
//! # Example
//!
//! ```
//! use dotsearch_board::{Board, Cell, DotsAndBoxes};
//! use dotsearch_search::{GameTreeBuilder, SearchConfig};
//!
//! let game = DotsAndBoxes::new(1).unwrap();
//! let board = Board::new(1).unwrap().with_move(Cell::new(0, 1));
//!
//! let builder = GameTreeBuilder::new(game, SearchConfig::default());
//! let tree = builder.build(board, 2).unwrap();
//!
//! // 3 first turns, each answered by 2 turns
//! assert_eq!(tree.ply_counts(), vec![1, 3, 6]);
//! ```

pub mod config;
mod game_tree;
mod node;
mod parallel;
mod tree;
pub mod turn;

pub use config::SearchConfig;
pub use game_tree::{GameNode, GameTree, GameTreeBuilder};
pub use node::{Node, NodeId};
pub use tree::Tree;
pub use turn::{flatten_to_turn_sequences, LineageOrder, TurnExpander, TurnSequence, TurnTree};
