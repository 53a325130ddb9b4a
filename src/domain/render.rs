use std::collections::HashMap;
use std::fmt;

use termtree::Tree as TermTree;
use tracing::instrument;

use crate::domain::node::NodeId;
use crate::domain::tree::Tree;

pub trait TreeRender {
    fn to_tree_string(&self) -> TermTree<String>;
}

impl<T: fmt::Display> TreeRender for Tree<T> {
    /// Builds the box-drawing view bottom-up from a post-order walk, so no recursion
    /// is needed on deep trees.
    #[instrument(level = "debug", skip(self))]
    fn to_tree_string(&self) -> TermTree<String> {
        let mut built: HashMap<NodeId, TermTree<String>> = HashMap::new();

        for (idx, node) in self.iter_postorder() {
            let leaves: Vec<_> = node
                .children()
                .iter()
                .filter_map(|child| built.remove(child))
                .collect();
            built.insert(idx, TermTree::new(node.value().to_string()).with_leaves(leaves));
        }

        self.root()
            .and_then(|root| built.remove(&root))
            .unwrap_or_else(|| TermTree::new("Empty tree".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_tree_renders_placeholder() {
        let tree: Tree<u8> = Tree::new();
        assert_eq!(tree.to_tree_string().root, "Empty tree");
    }

    #[test]
    fn test_render_keeps_child_order() {
        let mut tree = Tree::new();
        let root = tree.insert("root");
        let a = tree.insert("a");
        let b = tree.insert("b");
        tree.add_element(Some(a), Some(root)).unwrap();
        tree.add_element(Some(b), Some(root)).unwrap();
        tree.set_root(Some(root)).unwrap();

        let rendered = tree.to_tree_string();
        assert_eq!(rendered.root, "root");
        let leaves: Vec<&str> = rendered.leaves.iter().map(|l| l.root.as_str()).collect();
        assert_eq!(leaves, vec!["a", "b"]);
    }
}
