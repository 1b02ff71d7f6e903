//! Fluent API for building graphs with validated edges.

use crate::types::{GraphError, GraphResult, Vertex};

use super::{DirectedGraph, Graph, UndirectedGraph};

/// Fluent builder for constructing a [`DirectedGraph`] or [`UndirectedGraph`].
///
/// Unlike the graph's own mutations, which fail softly, `build` reports
/// edges that reference unknown vertices or loop back on themselves.
/// Repeated vertices and edges are merged.
#[derive(Debug, Clone)]
pub struct GraphBuilder<V> {
    vertices: Vec<V>,
    edges: Vec<(V, V)>,
}

impl<V: Vertex> GraphBuilder<V> {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Add a vertex.
    pub fn vertex(mut self, vertex: V) -> Self {
        self.vertices.push(vertex);
        self
    }

    /// Add several vertices.
    pub fn vertices<I: IntoIterator<Item = V>>(mut self, vertices: I) -> Self {
        self.vertices.extend(vertices);
        self
    }

    /// Add an edge. For undirected graphs the direction is irrelevant.
    pub fn edge(mut self, from: V, to: V) -> Self {
        self.edges.push((from, to));
        self
    }

    /// Add several edges.
    pub fn edges<I: IntoIterator<Item = (V, V)>>(mut self, edges: I) -> Self {
        self.edges.extend(edges);
        self
    }

    /// Build a directed graph.
    pub fn build(self) -> GraphResult<DirectedGraph<V>> {
        self.populate(DirectedGraph::new())
    }

    /// Build an undirected graph.
    pub fn build_undirected(self) -> GraphResult<UndirectedGraph<V>> {
        self.populate(UndirectedGraph::new())
    }

    fn populate<G: Graph<V>>(self, mut graph: G) -> GraphResult<G> {
        for vertex in self.vertices {
            graph.add_vertex(vertex);
        }

        for (from, to) in self.edges {
            if from == to {
                return Err(GraphError::SelfLoop(format!("{:?}", from)));
            }
            if !graph.has_vertex(&from) {
                return Err(GraphError::vertex_not_found(&from));
            }
            if !graph.has_vertex(&to) {
                return Err(GraphError::vertex_not_found(&to));
            }
            graph.add_edge(from, to);
        }

        Ok(graph)
    }
}

impl<V: Vertex> Default for GraphBuilder<V> {
    fn default() -> Self {
        Self::new()
    }
}
