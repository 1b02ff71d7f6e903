//! CLI command implementations.

use std::fmt;
use std::io::Write;

use serde::Serialize;

use crate::graph::{DirectedGraph, Graph, GraphBuilder, TraversalOrder, UndirectedGraph};
use crate::types::{GraphError, GraphResult};

/// A graph assembled from command-line flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadedGraph {
    Directed(DirectedGraph<char>),
    Undirected(UndirectedGraph<char>),
}

impl LoadedGraph {
    /// The graph behind the shared contract.
    pub fn as_graph(&self) -> &dyn Graph<char> {
        match self {
            LoadedGraph::Directed(g) => g,
            LoadedGraph::Undirected(g) => g,
        }
    }

    /// Mutable access through the shared contract.
    pub fn as_graph_mut(&mut self) -> &mut dyn Graph<char> {
        match self {
            LoadedGraph::Directed(g) => g,
            LoadedGraph::Undirected(g) => g,
        }
    }

    /// "directed" or "undirected".
    pub fn kind(&self) -> &'static str {
        match self {
            LoadedGraph::Directed(_) => "directed",
            LoadedGraph::Undirected(_) => "undirected",
        }
    }
}

impl fmt::Display for LoadedGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadedGraph::Directed(g) => fmt::Display::fmt(g, f),
            LoadedGraph::Undirected(g) => fmt::Display::fmt(g, f),
        }
    }
}

/// Summary printed by `gadt stats`.
#[derive(Debug, Clone, Serialize)]
pub struct GraphStats {
    pub kind: &'static str,
    pub vertices: usize,
    pub edges: usize,
    pub empty: bool,
}

/// Vertex labels from a flag value such as `abcd` or `a,b,c,d`.
pub fn parse_vertices(spec: &str) -> Vec<char> {
    spec.chars()
        .filter(|c| !c.is_whitespace() && *c != ',')
        .collect()
}

/// A single-character vertex label.
pub fn parse_vertex(spec: &str) -> GraphResult<char> {
    let mut chars = spec.trim().chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(GraphError::InvalidVertexSpec(spec.to_string())),
    }
}

/// An edge written as `u-v`.
pub fn parse_edge(spec: &str) -> GraphResult<(char, char)> {
    let invalid = || GraphError::InvalidEdgeSpec(spec.to_string());
    let (from, to) = spec.split_once('-').ok_or_else(invalid)?;
    let from = parse_vertex(from).map_err(|_| invalid())?;
    let to = parse_vertex(to).map_err(|_| invalid())?;
    Ok((from, to))
}

/// Assemble a graph from the global flags.
pub fn load_graph(
    vertices: &str,
    edges: &[String],
    undirected: bool,
    complete: bool,
) -> GraphResult<LoadedGraph> {
    let edges = edges
        .iter()
        .map(|spec| parse_edge(spec))
        .collect::<GraphResult<Vec<_>>>()?;
    let builder = GraphBuilder::new()
        .vertices(parse_vertices(vertices))
        .edges(edges);

    let mut graph = if undirected {
        LoadedGraph::Undirected(builder.build_undirected()?)
    } else {
        LoadedGraph::Directed(builder.build()?)
    };
    if complete {
        graph.as_graph_mut().make_complete();
    }

    log::debug!(
        "loaded {} graph: {} vertices, {} edges",
        graph.kind(),
        graph.as_graph().vertex_count(),
        graph.as_graph().edge_count()
    );
    Ok(graph)
}

/// Print the adjacency dump.
pub fn cmd_dump(out: &mut dyn Write, graph: &LoadedGraph) -> GraphResult<()> {
    if graph.as_graph().is_empty() {
        writeln!(out, "(empty graph)")?;
    } else {
        write!(out, "{}", graph)?;
    }
    Ok(())
}

/// Print vertex and edge counts.
pub fn cmd_stats(out: &mut dyn Write, graph: &LoadedGraph, json: bool) -> GraphResult<()> {
    let g = graph.as_graph();
    let stats = GraphStats {
        kind: graph.kind(),
        vertices: g.vertex_count(),
        edges: g.edge_count(),
        empty: g.is_empty(),
    };

    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&stats)?)?;
    } else {
        writeln!(out, "Kind: {}", stats.kind)?;
        writeln!(out, "Vertices: {}", stats.vertices)?;
        writeln!(out, "Edges: {}", stats.edges)?;
    }
    Ok(())
}

/// Run a traversal and print the visit order.
pub fn cmd_traverse(
    out: &mut dyn Write,
    graph: &LoadedGraph,
    start: char,
    order: TraversalOrder,
    json: bool,
) -> GraphResult<()> {
    let g = graph.as_graph();
    let visited = match order {
        TraversalOrder::BreadthFirst => g.breadth_first_traversal(&start)?,
        TraversalOrder::DepthFirst => g.depth_first_traversal(&start)?,
    };

    if json {
        let result = serde_json::json!({
            "order": order.name(),
            "start": start,
            "visited": visited,
        });
        writeln!(out, "{}", result)?;
    } else {
        writeln!(out, "{}", join_path(&visited))?;
    }
    Ok(())
}

/// Shortest path between two vertices.
pub fn cmd_path(
    out: &mut dyn Write,
    graph: &LoadedGraph,
    start: char,
    end: char,
    json: bool,
) -> GraphResult<()> {
    let path = graph.as_graph().shortest_path(&start, &end)?;

    if json {
        writeln!(out, "{}", serde_json::json!({ "path": path }))?;
    } else {
        writeln!(out, "{}", join_path(&path))?;
    }
    Ok(())
}

fn join_path(vertices: &[char]) -> String {
    vertices
        .iter()
        .map(char::to_string)
        .collect::<Vec<_>>()
        .join(" -> ")
}
