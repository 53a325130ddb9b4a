//! Domain layer: the arena tree and its nodes
//!
//! This layer is independent of external concerns (no config loading, no CLI).

pub mod error;
pub mod iter;
pub mod node;
pub mod render;
pub mod tree;

pub use error::{TreeError, TreeResult};
pub use iter::{PostOrderIter, PreOrderIter};
pub use node::{NodeId, TreeNode};
pub use render::TreeRender;
pub use tree::{Tree, INDENT_INCREMENT};
