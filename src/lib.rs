//! Parent-linked multi-way tree container.
//!
//! Nodes live in a generational arena owned by [`Tree`]; parent links are plain
//! indices. Clearing or dropping a tree destroys every node reachable from its root
//! in post-order, iteratively, so depth is bounded only by memory.
//!
//! ```
//! use rstree::Tree;
//!
//! let mut tree = Tree::new();
//! let head = tree.insert(0);
//! let child = tree.insert(1);
//! tree.add_element(Some(child), Some(head)).unwrap();
//! tree.set_root(Some(head)).unwrap();
//! assert_eq!(tree.to_string(), "0\n  1\n");
//! ```

pub mod cli;
pub mod config;
pub mod demo;
pub mod domain;
pub mod exitcode;
pub mod util;

pub use domain::{NodeId, Tree, TreeError, TreeNode, TreeRender, TreeResult};
