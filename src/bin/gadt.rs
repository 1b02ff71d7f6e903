//! CLI entry point for the `gadt` command-line tool.

use std::io;
use std::process;

use clap::{Parser, Subcommand};

use graph_adt::cli::{commands, parse_vertex};
use graph_adt::graph::TraversalOrder;
use graph_adt::GraphError;

#[derive(Parser)]
#[command(
    name = "gadt",
    about = "Build a small labeled graph from flags and query it"
)]
struct Cli {
    /// Vertex labels, one character each (e.g. "abcd")
    #[arg(long, default_value = "")]
    vertices: String,

    /// Edge as "u-v"; repeat for more edges
    #[arg(long = "edge")]
    edges: Vec<String>,

    /// Treat edges as undirected
    #[arg(long)]
    undirected: bool,

    /// Connect every vertex to every other vertex before running the command
    #[arg(long)]
    complete: bool,

    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the adjacency dump
    Dump,
    /// Print vertex and edge counts
    Stats,
    /// Breadth-first traversal from a vertex
    Bfs {
        /// Starting vertex
        start: String,
    },
    /// Depth-first traversal from a vertex
    Dfs {
        /// Starting vertex
        start: String,
    },
    /// Shortest path between two vertices
    Path {
        /// Starting vertex
        start: String,
        /// Target vertex
        end: String,
    },
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let result = commands::load_graph(&cli.vertices, &cli.edges, cli.undirected, cli.complete)
        .and_then(|graph| {
            let mut out = io::stdout().lock();
            match cli.command {
                Commands::Dump => commands::cmd_dump(&mut out, &graph),
                Commands::Stats => commands::cmd_stats(&mut out, &graph, json),
                Commands::Bfs { start } => commands::cmd_traverse(
                    &mut out,
                    &graph,
                    parse_vertex(&start)?,
                    TraversalOrder::BreadthFirst,
                    json,
                ),
                Commands::Dfs { start } => commands::cmd_traverse(
                    &mut out,
                    &graph,
                    parse_vertex(&start)?,
                    TraversalOrder::DepthFirst,
                    json,
                ),
                Commands::Path { start, end } => commands::cmd_path(
                    &mut out,
                    &graph,
                    parse_vertex(&start)?,
                    parse_vertex(&end)?,
                    json,
                ),
            }
        });

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            GraphError::Io(_) | GraphError::Json(_) => 1,
            GraphError::InvalidEdgeSpec(_) | GraphError::InvalidVertexSpec(_) => 3,
            GraphError::VertexNotFound(_) | GraphError::SelfLoop(_) => 4,
            GraphError::Unsupported(_) => 5,
        };
        process::exit(code);
    }
}
