//! Graph ADT — labeled vertices stored as ordered adjacency sets.
//!
//! A [`DirectedGraph`] keeps, for every vertex, the set of vertices it points
//! to. An [`UndirectedGraph`] wraps one and keeps every edge mirrored. Both
//! implement the [`Graph`] contract: soft-failing mutations, membership
//! queries, counts, deterministic breadth-first and depth-first traversal,
//! and a "make complete" transform.

pub mod cli;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use graph::{
    breadth_first, depth_first, traverse, DirectedGraph, Graph, GraphBuilder, TraversalOrder,
    UndirectedGraph,
};
pub use types::{GraphError, GraphResult, Vertex};
