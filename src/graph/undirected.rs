//! Undirected graph as a symmetric wrapper over [`DirectedGraph`].

use std::fmt;

use crate::types::{GraphResult, Vertex};

use super::contract::Graph;
use super::directed::DirectedGraph;

/// Undirected graph. Each logical edge `{u, v}` is stored as the two
/// directed entries `u -> v` and `v -> u`; one never exists without the other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UndirectedGraph<V> {
    inner: DirectedGraph<V>,
}

impl<V: Vertex> UndirectedGraph<V> {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self {
            inner: DirectedGraph::new(),
        }
    }

    /// Read-only view of the underlying symmetric directed graph.
    pub fn as_directed(&self) -> &DirectedGraph<V> {
        &self.inner
    }

    /// Unwrap into the underlying directed graph.
    pub fn into_directed(self) -> DirectedGraph<V> {
        self.inner
    }

    pub fn vertices(&self) -> impl Iterator<Item = &V> + '_ {
        self.inner.vertices()
    }

    pub fn neighbors(&self, vertex: &V) -> Option<impl Iterator<Item = &V> + '_> {
        self.inner.neighbors(vertex)
    }

    pub fn clear(&mut self) {
        self.inner.clear();
    }
}

impl<V: Vertex> Default for UndirectedGraph<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Vertex> Graph<V> for UndirectedGraph<V> {
    fn add_vertex(&mut self, vertex: V) -> bool {
        self.inner.add_vertex(vertex)
    }

    // Incoming edges are the mirror of outgoing ones, so the directed
    // cascade already removes both directions.
    fn remove_vertex(&mut self, vertex: &V) -> bool {
        self.inner.remove_vertex(vertex)
    }

    fn add_edge(&mut self, from: V, to: V) -> bool {
        if !self.inner.add_edge(from.clone(), to.clone()) {
            return false;
        }
        if !self.inner.add_edge(to.clone(), from.clone()) {
            log::trace!("rolling back half edge {:?} -> {:?}", from, to);
            self.inner.remove_edge(&from, &to);
            return false;
        }
        true
    }

    fn remove_edge(&mut self, from: &V, to: &V) -> bool {
        if !self.inner.has_edge(from, to) || !self.inner.has_edge(to, from) {
            return false;
        }
        self.inner.remove_edge(from, to) && self.inner.remove_edge(to, from)
    }

    fn has_vertex(&self, vertex: &V) -> bool {
        self.inner.has_vertex(vertex)
    }

    fn has_edge(&self, from: &V, to: &V) -> bool {
        self.inner.has_edge(from, to)
    }

    fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    fn vertex_count(&self) -> usize {
        self.inner.vertex_count()
    }

    fn edge_count(&self) -> usize {
        self.inner.edge_count() / 2
    }

    fn breadth_first_traversal(&self, start: &V) -> GraphResult<Vec<V>> {
        self.inner.breadth_first_traversal(start)
    }

    fn depth_first_traversal(&self, start: &V) -> GraphResult<Vec<V>> {
        self.inner.depth_first_traversal(start)
    }

    fn shortest_path(&self, start: &V, end: &V) -> GraphResult<Vec<V>> {
        self.inner.shortest_path(start, end)
    }

    fn make_complete(&mut self) {
        self.inner.make_complete();
    }
}

impl<V: Vertex> FromIterator<V> for UndirectedGraph<V> {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        Self {
            inner: iter.into_iter().collect(),
        }
    }
}

impl<V: Vertex> Extend<V> for UndirectedGraph<V> {
    fn extend<I: IntoIterator<Item = V>>(&mut self, iter: I) {
        self.inner.extend(iter);
    }
}

impl<V: Vertex + fmt::Display> fmt::Display for UndirectedGraph<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.inner, f)
    }
}
