//! In-memory graphs: the shared contract, the directed core and its
//! undirected wrapper.

pub mod builder;
pub mod contract;
pub mod directed;
pub mod traversal;
pub mod undirected;

pub use builder::GraphBuilder;
pub use contract::Graph;
pub use directed::DirectedGraph;
pub use traversal::{breadth_first, depth_first, traverse, TraversalOrder};
pub use undirected::UndirectedGraph;
