//! point-graph — a generic in-memory undirected multigraph.
//!
//! Points are identified by caller-supplied values; edges carry a
//! caller-supplied payload and connect an unordered pair of points. Several
//! edges with different payloads may join the same pair.

pub mod cli;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use graph::{Graph, GraphBuilder};
pub use types::{Edge, Endpoints, GraphError, GraphResult, PointRole};
