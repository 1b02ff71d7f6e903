//! Shared types: vertex bound and errors.

pub mod error;
pub mod vertex;

pub use error::{GraphError, GraphResult};
pub use vertex::Vertex;
