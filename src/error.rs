//! Error types for destila.

use thiserror::Error;

/// Destila error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Candle tensor error.
    #[error("tensor error: {0}")]
    Tensor(#[from] candle_core::Error),

    /// Dimension mismatch.
    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    /// Edge endpoint outside the node range of an adjacency matrix.
    #[error("node {node} out of bounds for graph with {num_nodes} nodes")]
    NodeOutOfBounds { node: usize, num_nodes: usize },
}

/// Result type alias.
pub type Result<T> = std::result::Result<T, Error>;
