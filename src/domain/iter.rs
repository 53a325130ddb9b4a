use tracing::instrument;

use crate::domain::node::{NodeId, TreeNode};
use crate::domain::tree::Tree;

/// Pre-order walk yielding `(id, depth, node)`; depth is relative to the start node.
pub struct PreOrderIter<'a, T> {
    tree: &'a Tree<T>,
    stack: Vec<(NodeId, usize)>,
}

impl<'a, T> PreOrderIter<'a, T> {
    #[instrument(level = "trace", skip(tree))]
    pub(crate) fn new(tree: &'a Tree<T>, start: Option<NodeId>) -> Self {
        let mut stack = Vec::new();
        if let Some(start) = start {
            stack.push((start, 0));
        }
        Self { tree, stack }
    }
}

impl<'a, T> Iterator for PreOrderIter<'a, T> {
    type Item = (NodeId, usize, &'a TreeNode<T>);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((current_idx, depth)) = self.stack.pop() {
            if let Some(node) = self.tree.get(current_idx) {
                // Push children in reverse order for left-to-right traversal
                for &child in node.children().iter().rev() {
                    self.stack.push((child, depth + 1));
                }
                return Some((current_idx, depth, node));
            }
        }
        None
    }
}

/// Post-order walk: every child is yielded before its parent.
pub struct PostOrderIter<'a, T> {
    tree: &'a Tree<T>,
    stack: Vec<(NodeId, bool)>,
}

impl<'a, T> PostOrderIter<'a, T> {
    #[instrument(level = "trace", skip(tree))]
    pub(crate) fn new(tree: &'a Tree<T>, start: Option<NodeId>) -> Self {
        let mut stack = Vec::new();
        if let Some(start) = start {
            stack.push((start, false));
        }
        Self { tree, stack }
    }
}

impl<'a, T> Iterator for PostOrderIter<'a, T> {
    type Item = (NodeId, &'a TreeNode<T>);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((current_idx, visited)) = self.stack.pop() {
            if let Some(node) = self.tree.get(current_idx) {
                if !visited {
                    self.stack.push((current_idx, true));
                    for &child in node.children().iter().rev() {
                        self.stack.push((child, false));
                    }
                } else {
                    return Some((current_idx, node));
                }
            }
        }
        None
    }
}
