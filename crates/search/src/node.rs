//! Tree node types.
//!
//! Uses arena allocation with indices for cache locality and simpler memory management.

/// Index into the node arena.
///
/// This is a lightweight handle that references a node in the tree.
/// Parents are referenced by handle too, so a child never owns its parent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// The root node is always at index 0.
    pub const ROOT: NodeId = NodeId(0);

    /// Position of the node in the arena
    pub fn index(self) -> usize {
        self.0
    }
}

/// A node in an arena tree.
#[derive(Clone, Debug)]
pub struct Node<P> {
    /// Back-reference to the parent (None for root).
    pub(crate) parent: Option<NodeId>,

    /// Children in insertion order.
    pub(crate) children: Vec<NodeId>,

    /// What this node stands for: a move inside a turn, or a game state.
    pub payload: P,
}

impl<P> Node<P> {
    pub(crate) fn new(parent: Option<NodeId>, payload: P) -> Self {
        Self {
            parent,
            children: Vec::new(),
            payload,
        }
    }

    /// Create a root node.
    pub(crate) fn root(payload: P) -> Self {
        Self::new(None, payload)
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_creation() {
        let node = Node::new(Some(NodeId(3)), 'x');
        assert_eq!(node.parent(), Some(NodeId(3)));
        assert_eq!(node.payload, 'x');
        assert!(node.is_leaf());
        assert!(!node.is_root());
    }

    #[test]
    fn test_root_node() {
        let root: Node<Option<u8>> = Node::root(None);
        assert!(root.is_root());
        assert_eq!(root.payload, None);
        assert_eq!(NodeId::ROOT.index(), 0);
    }
}
