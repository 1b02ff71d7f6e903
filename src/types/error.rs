//! Error types for the graph library.

use thiserror::Error;

/// Errors surfaced by fallible graph operations.
///
/// Mutations on the graph contract never produce these: a rejected
/// insertion or removal is reported as a `false` return instead.
#[derive(Error, Debug)]
pub enum GraphError {
    /// Vertex is not present in the graph.
    #[error("Vertex {0} not found")]
    VertexNotFound(String),

    /// Edge from a vertex to itself.
    #[error("Self-loop not allowed on vertex {0}")]
    SelfLoop(String),

    /// Operation exists on the contract but is not implemented.
    #[error("Operation not implemented: {0}")]
    Unsupported(&'static str),

    /// Edge argument that is not of the form `u-v`.
    #[error("Invalid edge spec: {0:?} (expected \"u-v\")")]
    InvalidEdgeSpec(String),

    /// Vertex argument that is not a single character.
    #[error("Invalid vertex spec: {0:?} (expected a single character)")]
    InvalidVertexSpec(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl GraphError {
    /// Build a [`GraphError::VertexNotFound`] from any debuggable label.
    pub fn vertex_not_found<V: std::fmt::Debug>(vertex: &V) -> Self {
        GraphError::VertexNotFound(format!("{:?}", vertex))
    }
}

/// Convenience result type for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;
