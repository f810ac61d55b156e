//! Parallel game tree construction.
//!
//! Sibling subtrees never share a state, so each one can be built on its
//! own arena on the rayon pool and grafted back afterwards. Subtrees are
//! grafted in sibling order, which makes the result identical to
//! [`GameTreeBuilder::build_to_depth`].

use dotsearch_core::{ChainGame, Depth, Result};
use rayon::prelude::*;

use crate::game_tree::{GameTree, GameTreeBuilder};
use crate::node::NodeId;
use crate::tree::Tree;

impl<G: ChainGame> GameTreeBuilder<G> {
    /// Parallel variant of [`GameTreeBuilder::build_to_depth`].
    ///
    /// The first level below `node` is expanded on the calling thread; every
    /// child is then built independently.
    pub fn build_to_depth_parallel(
        &self,
        tree: &mut GameTree<G>,
        node: NodeId,
        depth: Depth,
    ) -> Result<()> {
        let Some(remaining) = depth.child() else {
            return Ok(());
        };
        let children = self.expand_one_level(tree, node)?;

        let roots: Vec<_> = children
            .iter()
            .map(|&child| tree.payload(child).clone())
            .collect();

        let subtrees: Vec<GameTree<G>> = roots
            .into_par_iter()
            .map(|root| -> Result<GameTree<G>> {
                let mut subtree = Tree::new(root);
                self.build_to_depth(&mut subtree, NodeId::ROOT, remaining)?;
                Ok(subtree)
            })
            .collect::<Result<_>>()?;

        for (child, subtree) in children.into_iter().zip(subtrees) {
            tree.graft(child, subtree);
        }
        Ok(())
    }
}
