//! In-memory graph operations — the core data structure.

pub mod builder;
pub mod point_graph;

pub use builder::GraphBuilder;
pub use point_graph::Graph;
