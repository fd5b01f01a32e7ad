use thiserror::Error;

use crate::graph::NodeId;

pub type Result<T> = std::result::Result<T, GraphError>;

/// Rejected graph operations. A rejected operation never mutates the graph.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GraphError {
    #[error("node #{} does not exist (graph has {node_count} nodes)", .id.index())]
    InvalidReference { id: NodeId, node_count: usize },

    #[error("cannot connect node {node} to itself")]
    SelfLoop { node: NodeId },

    #[error("edge weight must be finite and non-negative, got {weight}")]
    InvalidWeight { weight: f32 },

    #[error("nodes {a} and {b} are already connected")]
    ParallelEdge { a: NodeId, b: NodeId },
}

/// Coarse classification used by callers that only care who is at fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphErrorKind {
    /// An id outside the current node range.
    InvalidReference,
    /// A well-addressed request that makes no sense (self-loop, bad weight, duplicate).
    DegenerateRequest,
}

impl GraphError {
    pub fn kind(&self) -> GraphErrorKind {
        match self {
            GraphError::InvalidReference { .. } => GraphErrorKind::InvalidReference,
            GraphError::SelfLoop { .. }
            | GraphError::InvalidWeight { .. }
            | GraphError::ParallelEdge { .. } => GraphErrorKind::DegenerateRequest,
        }
    }
}
