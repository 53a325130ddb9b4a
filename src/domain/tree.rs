use std::fmt;
use std::io::{self, Write};
use std::sync::atomic::{AtomicU64, Ordering};

use generational_arena::Arena;
use tracing::{debug, instrument, trace, warn};

use crate::domain::error::{TreeError, TreeResult};
use crate::domain::iter::{PostOrderIter, PreOrderIter};
use crate::domain::node::{NodeId, TreeNode};

/// Spaces added per depth level in the traversal dump.
pub const INDENT_INCREMENT: usize = 2;

static NEXT_TREE_ID: AtomicU64 = AtomicU64::new(0);

/// Arena-owned, parent-linked multi-way tree.
///
/// Every node created through a tree lives in its arena; `root` is the entry point
/// for traversal and teardown. Clearing (and dropping) the tree destroys every node
/// reachable from root in post-order, children before their parent.
#[derive(Debug)]
pub struct Tree<T> {
    /// Tag carried by every id this tree hands out
    id: u64,
    /// Arena storage for attached and not yet attached nodes
    arena: Arena<TreeNode<T>>,
    /// Index of the root node, None for empty trees
    root: Option<NodeId>,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Tree<T> {
    fn drop(&mut self) {
        self.clear();
        if !self.arena.is_empty() {
            debug!(count = self.arena.len(), "releasing unattached nodes");
        }
        trace!("tree destroyed");
    }
}

impl<T> Tree<T> {
    pub fn new() -> Self {
        let id = NEXT_TREE_ID.fetch_add(1, Ordering::Relaxed);
        trace!(id, "tree created");
        Self {
            id,
            arena: Arena::new(),
            root: None,
        }
    }

    /// Creates an unattached node holding `value`.
    #[instrument(level = "trace", skip(self, value))]
    pub fn insert(&mut self, value: T) -> NodeId {
        let idx = NodeId::new(self.id, self.arena.insert(TreeNode::new(value, None)));
        trace!(?idx, "node created");
        idx
    }

    /// Takes ownership of an externally constructed node.
    ///
    /// A parent set on the node is honored: the node is appended to that parent's
    /// children, so the back-reference invariant holds from the start. Any other
    /// edges the node carries are dropped.
    #[instrument(level = "trace", skip(self, node))]
    pub fn insert_node(&mut self, mut node: TreeNode<T>) -> TreeResult<NodeId> {
        let parent = node.parent();
        if let Some(parent_idx) = parent {
            if !self.contains(parent_idx) {
                return Err(TreeError::NodeNotFound(parent_idx));
            }
        }
        node.detach();
        let idx = NodeId::new(self.id, self.arena.insert(node));
        trace!(?idx, "node created");

        if let Some(parent_idx) = parent {
            self.add_child(parent_idx, Some(idx))?;
        }
        Ok(idx)
    }

    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// `None` for stale ids and for ids handed out by another tree.
    pub fn get(&self, idx: NodeId) -> Option<&TreeNode<T>> {
        self.slot(idx).and_then(|slot| self.arena.get(slot))
    }

    /// Mutable access to a node's value; edges stay under the tree's control.
    pub fn get_mut(&mut self, idx: NodeId) -> Option<&mut TreeNode<T>> {
        self.slot(idx).and_then(|slot| self.arena.get_mut(slot))
    }

    pub fn contains(&self, idx: NodeId) -> bool {
        self.get(idx).is_some()
    }

    fn slot(&self, idx: NodeId) -> Option<generational_arena::Index> {
        (idx.tree() == self.id).then(|| idx.index())
    }

    /// Number of nodes owned by the tree, attached or not.
    pub fn node_count(&self) -> usize {
        self.arena.len()
    }

    /// A tree without root is logically empty.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn set_value(&mut self, idx: NodeId, value: T) -> TreeResult<()> {
        self.get_mut(idx)
            .ok_or(TreeError::NodeNotFound(idx))?
            .set_value(value);
        Ok(())
    }

    /// Appends `child` to `parent`'s children and points the child back at `parent`.
    ///
    /// `None` is a no-op. The child must be unattached (no parent, not the root) and
    /// must not be an ancestor of `parent`.
    #[instrument(level = "trace", skip(self))]
    pub fn add_child(&mut self, parent: NodeId, child: Option<NodeId>) -> TreeResult<()> {
        let Some(child) = child else {
            return Ok(());
        };
        if !self.contains(parent) {
            return Err(TreeError::NodeNotFound(parent));
        }
        let child_node = self.get(child).ok_or(TreeError::NodeNotFound(child))?;
        if child_node.parent().is_some() || self.root == Some(child) {
            return Err(TreeError::AlreadyAttached(child));
        }
        // A leaf child can only close a cycle with itself
        let creates_cycle = if child_node.is_leaf() {
            parent == child
        } else {
            self.is_ancestor_or_self(child, parent)
        };
        if creates_cycle {
            return Err(TreeError::CycleDetected { parent, child });
        }

        if let Some(node) = self.get_mut(parent) {
            node.push_child(child);
        }
        if let Some(node) = self.get_mut(child) {
            node.set_parent(parent);
        }
        trace!(?parent, ?child, "attached");
        Ok(())
    }

    /// Attaches `element` under `parent`, or under the root when no parent is given.
    ///
    /// Without parent and root the element is left unattached.
    #[instrument(level = "trace", skip(self))]
    pub fn add_element(&mut self, element: Option<NodeId>, parent: Option<NodeId>) -> TreeResult<()> {
        let Some(element) = element else {
            return Ok(());
        };
        match parent.or(self.root) {
            Some(parent) => self.add_child(parent, Some(element)),
            None => {
                warn!(?element, "no parent and no root: element left unattached");
                Ok(())
            }
        }
    }

    /// Installs `root` as the tree's root, clearing any previous root subtree first.
    #[instrument(level = "trace", skip(self))]
    pub fn set_root(&mut self, root: Option<NodeId>) -> TreeResult<()> {
        let Some(root) = root else {
            return Ok(());
        };
        if self.root == Some(root) {
            return Ok(());
        }
        let node = self.get(root).ok_or(TreeError::NodeNotFound(root))?;
        if node.parent().is_some() {
            return Err(TreeError::NotARoot(root));
        }
        if self.root.is_some() {
            debug!(old = ?self.root, new = ?root, "replacing root");
            self.clear();
        }
        self.root = Some(root);
        Ok(())
    }

    /// Destroys every node reachable from root, children before parent, then drops the root.
    #[instrument(level = "trace", skip(self))]
    pub fn clear(&mut self) {
        let Some(root) = self.root else {
            return;
        };
        let doomed: Vec<NodeId> = PostOrderIter::new(self, Some(root))
            .map(|(idx, _)| idx)
            .collect();
        for idx in &doomed {
            if self.arena.remove(idx.index()).is_some() {
                trace!(?idx, "node destroyed");
            }
        }
        self.root = None;
        debug!(count = doomed.len(), "tree cleared");
    }

    /// Pre-order over the whole tree.
    pub fn iter(&self) -> PreOrderIter<'_, T> {
        PreOrderIter::new(self, self.root)
    }

    pub fn iter_postorder(&self) -> PostOrderIter<'_, T> {
        PostOrderIter::new(self, self.root)
    }

    /// Number of levels below and including root; 0 for an empty tree.
    #[instrument(level = "debug", skip(self))]
    pub fn depth(&self) -> usize {
        self.iter().map(|(_, depth, _)| depth + 1).max().unwrap_or(0)
    }

    /// Collects all leaf nodes in pre-order.
    #[instrument(level = "debug", skip(self))]
    pub fn leaf_nodes(&self) -> Vec<NodeId> {
        self.iter()
            .filter(|(_, _, node)| node.is_leaf())
            .map(|(idx, _, _)| idx)
            .collect()
    }

    fn is_ancestor_or_self(&self, ancestor: NodeId, idx: NodeId) -> bool {
        let mut current = Some(idx);
        while let Some(current_idx) = current {
            if current_idx == ancestor {
                return true;
            }
            current = self.get(current_idx).and_then(|node| node.parent());
        }
        false
    }
}

impl<T: fmt::Display> Tree<T> {
    /// Prints the whole tree with indents to stdout.
    pub fn traverse(&self) {
        print!("{}", self);
    }

    /// Prints the subtree rooted at `idx`, with `idx` at indent 0.
    pub fn traverse_node(&self, idx: NodeId) -> TreeResult<()> {
        if !self.contains(idx) {
            return Err(TreeError::NodeNotFound(idx));
        }
        print!("{}", Subtree { tree: self, start: Some(idx), indent: INDENT_INCREMENT });
        Ok(())
    }

    pub fn write_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        write!(writer, "{}", self)
    }

    /// Writes the subtree rooted at `idx`; an unknown id is an `io::ErrorKind::NotFound`.
    pub fn write_node<W: Write>(&self, idx: NodeId, writer: &mut W) -> io::Result<()> {
        if !self.contains(idx) {
            return Err(io::Error::new(io::ErrorKind::NotFound, TreeError::NodeNotFound(idx)));
        }
        write!(writer, "{}", Subtree { tree: self, start: Some(idx), indent: INDENT_INCREMENT })
    }

    /// Same dump as `Display`, with a custom indent step.
    pub fn write_indented<W: Write>(&self, writer: &mut W, indent: usize) -> io::Result<()> {
        write!(writer, "{}", Subtree { tree: self, start: self.root, indent })
    }
}

impl<T: fmt::Display> fmt::Display for Tree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Subtree { tree: self, start: self.root, indent: INDENT_INCREMENT })
    }
}

struct Subtree<'a, T> {
    tree: &'a Tree<T>,
    start: Option<NodeId>,
    indent: usize,
}

impl<T: fmt::Display> fmt::Display for Subtree<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (_, depth, node) in PreOrderIter::new(self.tree, self.start) {
            writeln!(f, "{:width$}{}", "", node.value(), width = depth * self.indent)?;
        }
        Ok(())
    }
}
