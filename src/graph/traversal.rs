//! Graph traversal algorithms (BFS, DFS).

use std::collections::{BTreeSet, VecDeque};

use crate::types::{GraphError, GraphResult, Vertex};

use super::DirectedGraph;

/// Which traversal to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraversalOrder {
    /// FIFO queue, level by level.
    BreadthFirst,
    /// Explicit stack, vertices emitted in discovery order.
    DepthFirst,
}

impl TraversalOrder {
    /// Parse from a short name (`bfs`, `dfs`).
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "bfs" | "breadth-first" => Some(Self::BreadthFirst),
            "dfs" | "depth-first" => Some(Self::DepthFirst),
            _ => None,
        }
    }

    /// Short name.
    pub fn name(self) -> &'static str {
        match self {
            Self::BreadthFirst => "bfs",
            Self::DepthFirst => "dfs",
        }
    }
}

/// Run the traversal selected by `order` from `start`.
pub fn traverse<V: Vertex>(
    graph: &DirectedGraph<V>,
    start: &V,
    order: TraversalOrder,
) -> GraphResult<Vec<V>> {
    match order {
        TraversalOrder::BreadthFirst => breadth_first(graph, start),
        TraversalOrder::DepthFirst => depth_first(graph, start),
    }
}

/// BFS from `start`. Every reachable vertex appears once, `start` first.
pub fn breadth_first<V: Vertex>(graph: &DirectedGraph<V>, start: &V) -> GraphResult<Vec<V>> {
    let (start, _) = graph
        .entry(start)
        .ok_or_else(|| GraphError::vertex_not_found(start))?;

    let mut visited: BTreeSet<&V> = BTreeSet::new();
    let mut visited_order: Vec<V> = Vec::new();
    let mut queue: VecDeque<&V> = VecDeque::new();

    visited.insert(start);
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        visited_order.push(current.clone());

        let Some((_, neighbors)) = graph.entry(current) else {
            continue;
        };
        for neighbor in neighbors {
            if visited.insert(neighbor) {
                queue.push_back(neighbor);
            }
        }
    }

    log::debug!(
        "bfs from {:?} visited {} vertices",
        start,
        visited_order.len()
    );
    Ok(visited_order)
}

/// Iterative DFS from `start`.
///
/// The top of the stack is inspected each step: its first unvisited
/// neighbour (in label order) is emitted and pushed, otherwise the top is
/// popped. Output is discovery order.
pub fn depth_first<V: Vertex>(graph: &DirectedGraph<V>, start: &V) -> GraphResult<Vec<V>> {
    let (start, _) = graph
        .entry(start)
        .ok_or_else(|| GraphError::vertex_not_found(start))?;

    let mut visited: BTreeSet<&V> = BTreeSet::new();
    let mut visited_order: Vec<V> = vec![start.clone()];
    let mut stack: Vec<&V> = vec![start];

    visited.insert(start);

    while let Some(&top) = stack.last() {
        let next = graph
            .entry(top)
            .and_then(|(_, neighbors)| neighbors.iter().find(|n| !visited.contains(n)));

        match next {
            Some(neighbor) => {
                visited.insert(neighbor);
                visited_order.push(neighbor.clone());
                stack.push(neighbor);
            }
            None => {
                stack.pop();
            }
        }
    }

    log::debug!(
        "dfs from {:?} visited {} vertices",
        start,
        visited_order.len()
    );
    Ok(visited_order)
}
