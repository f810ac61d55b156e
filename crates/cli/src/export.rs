//! JSON export of game trees.

use dotsearch_board::{Board, Cell, DotsAndBoxes};
use dotsearch_search::{GameTree, NodeId};
use serde::Serialize;

/// One game state in the exported tree.
#[derive(Serialize, Debug, PartialEq)]
pub struct NodeRecord {
    /// Moves of the turn that led here as `[row, col]` pairs, absent on the root.
    /// A finished board passes with an empty list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub turn: Option<Vec<[usize; 2]>>,

    /// Grid rows as display values, see [`TreeRecord::colored`].
    pub board: Vec<Vec<u8>>,

    pub children: Vec<NodeRecord>,
}

/// A complete exported tree.
#[derive(Serialize, Debug, PartialEq)]
pub struct TreeRecord {
    pub size: usize,
    /// Boards hold the colored markers instead of game values.
    pub colored: bool,
    pub depth: u32,
    pub ply_counts: Vec<usize>,
    pub root: NodeRecord,
}

impl TreeRecord {
    pub fn from_tree(tree: &GameTree<DotsAndBoxes>, depth: u32) -> Self {
        let root = &tree.payload(NodeId::ROOT).state;
        Self {
            size: root.n(),
            colored: root.is_colored(),
            depth,
            ply_counts: tree.ply_counts(),
            root: node_record(tree, NodeId::ROOT),
        }
    }
}

fn node_record(tree: &GameTree<DotsAndBoxes>, id: NodeId) -> NodeRecord {
    let node = tree.payload(id);
    NodeRecord {
        turn: node
            .turn
            .as_ref()
            .map(|turn| turn.iter().map(|c| [c.row, c.col]).collect()),
        board: display_rows(&node.state),
        children: tree
            .children(id)
            .iter()
            .map(|&child| node_record(tree, child))
            .collect(),
    }
}

/// Rows of the board as they would be shown, honoring the colored preset.
pub fn display_rows(board: &Board) -> Vec<Vec<u8>> {
    (0..board.side())
        .map(|row| {
            (0..board.side())
                .map(|col| board.display_value(Cell::new(row, col)))
                .collect()
        })
        .collect()
}
