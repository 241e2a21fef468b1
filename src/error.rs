use thiserror::Error;

use crate::graph::NodeId;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Input rejections. Every variant is raised before any computation or
/// partial state is produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("invalid range: min ({min}) must be less than max ({max})")]
    InvalidRange { min: i64, max: i64 },

    #[error("invalid weight range: min ({min}) must not exceed max ({max})")]
    InvalidWeightRange { min: i64, max: i64 },

    #[error("initial size must be at least 1")]
    InvalidInitialSize,

    #[error("a graph needs at least one node")]
    EmptyGraph,

    #[error("node {node} is outside 1..={count}")]
    NodeOutOfRange { node: NodeId, count: usize },
}
