//! The capability set shared by every graph variant.

use crate::types::{GraphResult, Vertex};

/// Public contract of a graph over vertex labels `V`.
///
/// Mutations fail softly: they return `false` and leave the graph
/// untouched when the request is invalid (missing endpoint, self-loop,
/// duplicate). Only the traversals and `shortest_path` return errors.
pub trait Graph<V: Vertex> {
    /// Insert a vertex with no neighbours. False if it already exists.
    fn add_vertex(&mut self, vertex: V) -> bool;

    /// Remove a vertex and every edge pointing at it. False if absent.
    fn remove_vertex(&mut self, vertex: &V) -> bool;

    /// Insert an edge between two existing, distinct vertices.
    /// False if rejected or if the edge already existed.
    fn add_edge(&mut self, from: V, to: V) -> bool;

    /// Remove an edge. False if it did not exist.
    fn remove_edge(&mut self, from: &V, to: &V) -> bool;

    fn has_vertex(&self, vertex: &V) -> bool;

    /// False whenever `from` is absent, regardless of `to`.
    fn has_edge(&self, from: &V, to: &V) -> bool;

    fn is_empty(&self) -> bool;

    fn vertex_count(&self) -> usize;

    fn edge_count(&self) -> usize;

    /// Breadth-first visit order from `start`, neighbours taken in label order.
    ///
    /// Fails with `VertexNotFound` if `start` is not in the graph.
    fn breadth_first_traversal(&self, start: &V) -> GraphResult<Vec<V>>;

    /// Depth-first discovery order from `start`, neighbours taken in label order.
    ///
    /// Fails with `VertexNotFound` if `start` is not in the graph.
    fn depth_first_traversal(&self, start: &V) -> GraphResult<Vec<V>>;

    /// Not implemented; always fails with `Unsupported`.
    fn shortest_path(&self, start: &V, end: &V) -> GraphResult<Vec<V>>;

    /// Connect every vertex to every other vertex.
    fn make_complete(&mut self);
}
