//! Graph builder validation and CLI command behavior.

use graph_adt::cli::commands::{cmd_dump, cmd_path, cmd_stats, cmd_traverse};
use graph_adt::cli::{load_graph, parse_edge, parse_vertex, parse_vertices, LoadedGraph};
use graph_adt::{DirectedGraph, Graph, GraphBuilder, GraphError, TraversalOrder};

fn edges(specs: &[&str]) -> Vec<String> {
    specs.iter().map(|s| s.to_string()).collect()
}

fn run<F>(f: F) -> String
where
    F: FnOnce(&mut Vec<u8>) -> graph_adt::GraphResult<()>,
{
    let mut out = Vec::new();
    f(&mut out).unwrap();
    String::from_utf8(out).unwrap()
}

// ==================== Builder Tests ====================

#[test]
fn test_builder_rejects_self_loop() {
    let result = GraphBuilder::new().vertex('a').edge('a', 'a').build();
    match result {
        Err(GraphError::SelfLoop(label)) => assert_eq!(label, "'a'"),
        other => panic!("Expected SelfLoop, got {:?}", other),
    }
}

#[test]
fn test_builder_rejects_unknown_endpoint() {
    let result = GraphBuilder::new()
        .vertices(['a', 'b'])
        .edge('a', 'z')
        .build_undirected();
    match result {
        Err(GraphError::VertexNotFound(label)) => assert_eq!(label, "'z'"),
        other => panic!("Expected VertexNotFound, got {:?}", other),
    }
}

#[test]
fn test_builder_merges_duplicates() {
    let graph: DirectedGraph<char> = GraphBuilder::new()
        .vertices(['a', 'b', 'a'])
        .edges([('a', 'b'), ('a', 'b')])
        .build()
        .unwrap();
    assert_eq!(graph.vertex_count(), 2);
    assert_eq!(graph.edge_count(), 1);
}

#[test]
fn test_builder_undirected_counts() {
    let graph = GraphBuilder::new()
        .vertices("abc".chars())
        .edges([('a', 'b'), ('b', 'a'), ('b', 'c')])
        .build_undirected()
        .unwrap();
    assert_eq!(graph.edge_count(), 2);
    assert!(graph.has_edge(&'c', &'b'));
}

// ==================== Parsing ====================

#[test]
fn test_parse_vertices() {
    assert_eq!(parse_vertices("abcd"), vec!['a', 'b', 'c', 'd']);
    assert_eq!(parse_vertices("a, b,c"), vec!['a', 'b', 'c']);
    assert!(parse_vertices("").is_empty());
}

#[test]
fn test_parse_vertex() {
    assert_eq!(parse_vertex("a").unwrap(), 'a');
    assert_eq!(parse_vertex(" q ").unwrap(), 'q');
    assert!(matches!(
        parse_vertex("ab"),
        Err(GraphError::InvalidVertexSpec(_))
    ));
    assert!(matches!(parse_vertex(""), Err(GraphError::InvalidVertexSpec(_))));
}

#[test]
fn test_parse_edge() {
    assert_eq!(parse_edge("a-b").unwrap(), ('a', 'b'));
    assert_eq!(parse_edge(" a - b ").unwrap(), ('a', 'b'));
    for bad in ["ab", "a-", "-b", "ab-c", ""] {
        match parse_edge(bad) {
            Err(GraphError::InvalidEdgeSpec(spec)) => assert_eq!(spec, bad),
            other => panic!("Expected InvalidEdgeSpec for {:?}, got {:?}", bad, other),
        }
    }
}

// ==================== Commands ====================

#[test]
fn test_load_graph_directed() {
    let graph = load_graph("abcd", &edges(&["a-b", "a-c", "b-d", "c-d"]), false, false).unwrap();
    assert_eq!(graph.kind(), "directed");
    assert_eq!(graph.as_graph().edge_count(), 4);
    assert!(matches!(graph, LoadedGraph::Directed(_)));
}

#[test]
fn test_load_graph_undirected_complete() {
    let graph = load_graph("abc", &[], true, true).unwrap();
    assert_eq!(graph.kind(), "undirected");
    assert_eq!(graph.as_graph().edge_count(), 3);
}

#[test]
fn test_load_graph_bad_edge() {
    assert!(matches!(
        load_graph("ab", &edges(&["a-x"]), false, false),
        Err(GraphError::VertexNotFound(_))
    ));
    assert!(matches!(
        load_graph("ab", &edges(&["a+b"]), false, false),
        Err(GraphError::InvalidEdgeSpec(_))
    ));
}

#[test]
fn test_cmd_dump() {
    let graph = load_graph("abc", &edges(&["a-b", "a-c"]), false, false).unwrap();
    let text = run(|out| cmd_dump(out, &graph));
    assert_eq!(text, "a --> [b, c]\nb --> []\nc --> []\n");

    let empty = load_graph("", &[], false, false).unwrap();
    assert_eq!(run(|out| cmd_dump(out, &empty)), "(empty graph)\n");
}

#[test]
fn test_cmd_stats_json() {
    let graph = load_graph("ab", &edges(&["a-b"]), true, false).unwrap();
    let text = run(|out| cmd_stats(out, &graph, true));
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["kind"], "undirected");
    assert_eq!(value["vertices"], 2);
    assert_eq!(value["edges"], 1);
    assert_eq!(value["empty"], false);
}

#[test]
fn test_cmd_stats_text() {
    let graph = load_graph("ab", &edges(&["a-b"]), false, false).unwrap();
    let text = run(|out| cmd_stats(out, &graph, false));
    assert_eq!(text, "Kind: directed\nVertices: 2\nEdges: 1\n");
}

#[test]
fn test_cmd_traverse() {
    let graph = load_graph("abcd", &edges(&["a-b", "a-c", "b-d", "c-d"]), false, false).unwrap();

    let bfs = run(|out| cmd_traverse(out, &graph, 'a', TraversalOrder::BreadthFirst, false));
    assert_eq!(bfs, "a -> b -> c -> d\n");

    let dfs = run(|out| cmd_traverse(out, &graph, 'a', TraversalOrder::DepthFirst, true));
    let value: serde_json::Value = serde_json::from_str(&dfs).unwrap();
    assert_eq!(value["order"], "dfs");
    assert_eq!(value["start"], "a");
    assert_eq!(value["visited"], serde_json::json!(["a", "b", "d", "c"]));
}

#[test]
fn test_cmd_traverse_missing_start() {
    let graph = load_graph("ab", &[], false, false).unwrap();
    let mut out = Vec::new();
    let result = cmd_traverse(&mut out, &graph, 'z', TraversalOrder::BreadthFirst, false);
    assert!(matches!(result, Err(GraphError::VertexNotFound(_))));
    assert!(out.is_empty());
}

#[test]
fn test_cmd_path_unsupported() {
    let graph = load_graph("ab", &edges(&["a-b"]), false, false).unwrap();
    let mut out = Vec::new();
    let result = cmd_path(&mut out, &graph, 'a', 'b', false);
    assert!(matches!(result, Err(GraphError::Unsupported(_))));
}
