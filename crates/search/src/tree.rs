//! Arena-allocated tree.
//!
//! Using a Vec<Node> with indices provides better cache locality
//! and simpler ownership compared to Rc<RefCell<Node>>. Dropping the
//! tree drops every node at once.

use crate::node::{Node, NodeId};

/// Arena-allocated tree, generic over the node payload.
///
/// Nodes are stored in a contiguous vector and referenced by index.
/// The same structure holds the moves of a single turn and the game
/// states across turns.
#[derive(Clone, Debug)]
pub struct Tree<P> {
    nodes: Vec<Node<P>>,
}

impl<P> Tree<P> {
    /// Create a new tree holding only a root node.
    pub fn new(root_payload: P) -> Self {
        Self {
            nodes: vec![Node::root(root_payload)],
        }
    }

    /// Get a reference to a node by ID.
    ///
    /// # Panics
    /// Panics if the NodeId is invalid.
    pub fn get(&self, id: NodeId) -> &Node<P> {
        &self.nodes[id.0]
    }

    pub fn payload(&self, id: NodeId) -> &P {
        &self.get(id).payload
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).parent
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.get(id).children
    }

    /// Append a new child under `parent`, returning its ID.
    ///
    /// Children keep the order in which they were added.
    ///
    /// # Panics
    /// Panics if `parent` is not a node of this tree.
    pub fn add_child(&mut self, parent: NodeId, payload: P) -> NodeId {
        assert!(parent.0 < self.nodes.len(), "unknown parent {parent:?}");
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::new(Some(parent), payload));
        self.nodes[parent.0].children.push(id);
        id
    }

    /// The path from `id` up to and including the root: `[id, parent, ..., root]`.
    pub fn lineage(&self, id: NodeId) -> Vec<NodeId> {
        let mut lineage = vec![id];
        let mut current = id;
        while let Some(parent) = self.parent(current) {
            lineage.push(parent);
            current = parent;
        }
        lineage
    }

    /// Number of edges between `id` and the root
    pub fn depth(&self, id: NodeId) -> usize {
        self.lineage(id).len() - 1
    }

    /// All leaves, depth-first, following child order.
    ///
    /// A lone root counts as a leaf.
    pub fn leaves(&self) -> Vec<NodeId> {
        let mut leaves = Vec::new();
        let mut stack = vec![NodeId::ROOT];
        while let Some(id) = stack.pop() {
            let children = self.children(id);
            if children.is_empty() {
                leaves.push(id);
            } else {
                stack.extend(children.iter().rev());
            }
        }
        leaves
    }

    /// Nodes at a given distance from the root, left to right.
    pub fn nodes_at_ply(&self, ply: usize) -> Vec<NodeId> {
        let mut level = vec![NodeId::ROOT];
        for _ in 0..ply {
            level = level
                .iter()
                .flat_map(|&id| self.children(id).iter().copied())
                .collect();
        }
        level
    }

    /// Node count per ply, root first. Stops at the deepest non-empty ply.
    pub fn ply_counts(&self) -> Vec<usize> {
        let mut counts = Vec::new();
        let mut level = vec![NodeId::ROOT];
        while !level.is_empty() {
            counts.push(level.len());
            level = level
                .iter()
                .flat_map(|&id| self.children(id).iter().copied())
                .collect();
        }
        counts
    }

    /// Move every descendant of `subtree`'s root under `target`.
    ///
    /// The subtree's root payload is dropped; `target` stands in for it.
    /// Sibling order is preserved at every level.
    pub fn graft(&mut self, target: NodeId, subtree: Tree<P>) {
        assert!(target.0 < self.nodes.len(), "unknown target {target:?}");

        let children: Vec<Vec<NodeId>> = subtree.nodes.iter().map(|n| n.children.clone()).collect();
        let mut payloads: Vec<Option<P>> = subtree.nodes.into_iter().map(|n| Some(n.payload)).collect();

        let mut stack: Vec<(NodeId, NodeId)> = children[NodeId::ROOT.0]
            .iter()
            .rev()
            .map(|&child| (child, target))
            .collect();

        while let Some((source, new_parent)) = stack.pop() {
            let payload = payloads[source.0]
                .take()
                .expect("every node has exactly one parent");
            let id = self.add_child(new_parent, payload);
            stack.extend(children[source.0].iter().rev().map(|&child| (child, id)));
        }
    }

    /// Iterate over every node with its ID, in arena order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node<P>)> + '_ {
        self.nodes.iter().enumerate().map(|(i, node)| (NodeId(i), node))
    }

    /// Get the number of nodes in the tree.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the tree is empty (never true, the root always exists).
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Get the root node.
    pub fn root(&self) -> &Node<P> {
        self.get(NodeId::ROOT)
    }
}
