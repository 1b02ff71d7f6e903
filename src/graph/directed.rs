//! Directed graph stored as ordered adjacency sets.

use std::collections::{btree_map, BTreeMap, BTreeSet};
use std::fmt;

use crate::types::{GraphError, GraphResult, Vertex};

use super::contract::Graph;
use super::traversal;

/// Directed graph: each vertex maps to the set of its out-neighbours.
///
/// Every vertex that appears in a neighbour set is also a key of the map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectedGraph<V> {
    adjacency: BTreeMap<V, BTreeSet<V>>,
}

impl<V: Vertex> DirectedGraph<V> {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self {
            adjacency: BTreeMap::new(),
        }
    }

    /// All vertices in label order.
    pub fn vertices(&self) -> btree_map::Keys<'_, V, BTreeSet<V>> {
        self.adjacency.keys()
    }

    /// Out-neighbours of `vertex` in label order, `None` if it is absent.
    pub fn neighbors(&self, vertex: &V) -> Option<impl Iterator<Item = &V> + '_> {
        self.adjacency.get(vertex).map(|set| set.iter())
    }

    /// Drop every vertex and edge.
    pub fn clear(&mut self) {
        self.adjacency.clear();
    }

    /// The stored key equal to `vertex` together with its neighbour set.
    pub(crate) fn entry(&self, vertex: &V) -> Option<(&V, &BTreeSet<V>)> {
        self.adjacency.get_key_value(vertex)
    }
}

impl<V: Vertex> Default for DirectedGraph<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Vertex> Graph<V> for DirectedGraph<V> {
    fn add_vertex(&mut self, vertex: V) -> bool {
        match self.adjacency.entry(vertex) {
            btree_map::Entry::Occupied(entry) => {
                log::trace!("vertex {:?} already present", entry.key());
                false
            }
            btree_map::Entry::Vacant(entry) => {
                entry.insert(BTreeSet::new());
                true
            }
        }
    }

    fn remove_vertex(&mut self, vertex: &V) -> bool {
        if !self.adjacency.contains_key(vertex) {
            log::trace!("cannot remove missing vertex {:?}", vertex);
            return false;
        }

        for neighbors in self.adjacency.values_mut() {
            neighbors.remove(vertex);
        }
        self.adjacency.remove(vertex);
        true
    }

    fn add_edge(&mut self, from: V, to: V) -> bool {
        if from == to {
            log::trace!("rejected self-loop on {:?}", from);
            return false;
        }
        if !self.adjacency.contains_key(&to) {
            log::trace!("rejected edge {:?} -> {:?}: missing target", from, to);
            return false;
        }
        match self.adjacency.get_mut(&from) {
            Some(neighbors) => neighbors.insert(to),
            None => {
                log::trace!("rejected edge {:?} -> {:?}: missing source", from, to);
                false
            }
        }
    }

    fn remove_edge(&mut self, from: &V, to: &V) -> bool {
        self.adjacency
            .get_mut(from)
            .is_some_and(|neighbors| neighbors.remove(to))
    }

    fn has_vertex(&self, vertex: &V) -> bool {
        self.adjacency.contains_key(vertex)
    }

    fn has_edge(&self, from: &V, to: &V) -> bool {
        self.adjacency
            .get(from)
            .is_some_and(|neighbors| neighbors.contains(to))
    }

    fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    fn edge_count(&self) -> usize {
        self.adjacency.values().map(BTreeSet::len).sum()
    }

    fn breadth_first_traversal(&self, start: &V) -> GraphResult<Vec<V>> {
        traversal::breadth_first(self, start)
    }

    fn depth_first_traversal(&self, start: &V) -> GraphResult<Vec<V>> {
        traversal::depth_first(self, start)
    }

    fn shortest_path(&self, _start: &V, _end: &V) -> GraphResult<Vec<V>> {
        Err(GraphError::Unsupported("shortest_path"))
    }

    fn make_complete(&mut self) {
        let vertices: Vec<V> = self.adjacency.keys().cloned().collect();
        let before = self.edge_count();

        for (vertex, neighbors) in self.adjacency.iter_mut() {
            neighbors.extend(vertices.iter().filter(|other| *other != vertex).cloned());
        }

        log::debug!(
            "make_complete: {} vertices, {} edges added",
            vertices.len(),
            self.edge_count() - before
        );
    }
}

impl<V: Vertex> FromIterator<V> for DirectedGraph<V> {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        let mut graph = Self::new();
        graph.extend(iter);
        graph
    }
}

impl<V: Vertex> Extend<V> for DirectedGraph<V> {
    fn extend<I: IntoIterator<Item = V>>(&mut self, iter: I) {
        for vertex in iter {
            self.add_vertex(vertex);
        }
    }
}

/// Debug dump: one `<vertex> --> [<neighbours>]` line per vertex.
impl<V: Vertex + fmt::Display> fmt::Display for DirectedGraph<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (vertex, neighbors) in &self.adjacency {
            write!(f, "{} --> [", vertex)?;
            for (i, neighbor) in neighbors.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{}", neighbor)?;
            }
            writeln!(f, "]")?;
        }
        Ok(())
    }
}
