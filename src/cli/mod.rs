//! Command-line front end for the `gadt` binary.

pub mod commands;

pub use commands::{load_graph, parse_edge, parse_vertex, parse_vertices, LoadedGraph};
