//! Vertex label bound.

use std::fmt::Debug;

/// Anything usable as a vertex label.
///
/// Two vertices with equal labels are the same vertex. The label's `Ord`
/// is the canonical order: vertex iteration, neighbour iteration and both
/// traversals follow it, which is what makes traversal output
/// deterministic.
pub trait Vertex: Ord + Clone + Debug {}

impl<T: Ord + Clone + Debug> Vertex for T {}
