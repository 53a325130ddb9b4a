//! Domain-level errors (no external dependencies)

use thiserror::Error;

use crate::domain::node::NodeId;

/// Tree errors represent structural violations.
///
/// Absent (`None`) arguments never produce an error; they are silent no-ops.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    #[error("node not found: {0:?}")]
    NodeNotFound(NodeId),

    #[error("node already attached: {0:?}")]
    AlreadyAttached(NodeId),

    #[error("cycle detected: cannot attach {child:?} under {parent:?}")]
    CycleDetected { parent: NodeId, child: NodeId },

    #[error("node has a parent and cannot become root: {0:?}")]
    NotARoot(NodeId),
}

/// Result type for tree operations.
pub type TreeResult<T> = Result<T, TreeError>;
