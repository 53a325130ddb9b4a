use generational_arena::Index;

/// Handle of a node inside its owning [`Tree`](crate::domain::Tree).
///
/// Generational and tagged with the owning tree: once a node is destroyed its id
/// never resolves again, and an id never resolves in another tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId {
    tree: u64,
    index: Index,
}

impl NodeId {
    pub(crate) fn new(tree: u64, index: Index) -> Self {
        Self { tree, index }
    }

    pub(crate) fn tree(&self) -> u64 {
        self.tree
    }

    pub(crate) fn index(&self) -> Index {
        self.index
    }
}

/// One vertex of the tree.
///
/// The parent link is a plain arena index, not an ownership edge. Not `Clone`:
/// a copy would share the original's child ids.
#[derive(Debug)]
pub struct TreeNode<T> {
    /// Payload of this node
    value: T,
    /// Index of parent node in the arena, None for roots and unattached nodes
    parent: Option<NodeId>,
    /// Indices of child nodes in insertion order
    children: Vec<NodeId>,
}

impl<T> TreeNode<T> {
    pub fn new(value: T, parent: Option<NodeId>) -> Self {
        Self {
            value,
            parent,
            children: Vec::new(),
        }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn value_mut(&mut self) -> &mut T {
        &mut self.value
    }

    pub fn set_value(&mut self, value: T) {
        self.value = value;
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

    /// Overwrites the back-reference unconditionally; the tree validates before calling.
    pub(crate) fn set_parent(&mut self, parent: NodeId) {
        self.parent = Some(parent);
    }

    /// Drops every edge so the node enters a tree unattached.
    pub(crate) fn detach(&mut self) {
        self.parent = None;
        self.children.clear();
    }

    pub(crate) fn push_child(&mut self, child: NodeId) {
        self.children.push(child);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use generational_arena::Arena;

    fn ids() -> (NodeId, NodeId) {
        let mut arena = Arena::new();
        let a = arena.insert(());
        let b = arena.insert(());
        (NodeId::new(0, a), NodeId::new(0, b))
    }

    #[test]
    fn test_new_node_has_no_children() {
        let node = TreeNode::new(7, None);
        assert_eq!(*node.value(), 7);
        assert!(node.parent().is_none());
        assert!(node.is_leaf());
    }

    #[test]
    fn test_set_parent_overwrites() {
        let (a, b) = ids();
        let mut node = TreeNode::new("x", Some(a));
        node.set_parent(b);
        assert_eq!(node.parent(), Some(b));
    }

    #[test]
    fn test_detach_drops_all_edges() {
        let (a, b) = ids();
        let mut node = TreeNode::new("x", Some(a));
        node.push_child(b);
        node.detach();
        assert_eq!(node.parent(), None);
        assert!(node.is_leaf());
    }

    #[test]
    fn test_ids_from_different_trees_differ() {
        let (a, _) = ids();
        assert_ne!(a, NodeId::new(1, a.index()));
        assert_eq!(a.tree(), 0);
    }

    #[test]
    fn test_set_value_replaces_payload() {
        let mut node = TreeNode::new(String::from("old"), None);
        node.set_value(String::from("new"));
        assert_eq!(node.value(), "new");
        node.value_mut().push('!');
        assert_eq!(node.value(), "new!");
    }
}
