//! Shared data types for the point-graph library.

pub mod edge;
pub mod endpoints;
pub mod error;

pub use edge::Edge;
pub use endpoints::Endpoints;
pub use error::{GraphError, GraphResult, PointRole};

/// Number of points the demo driver creates by default.
pub const DEFAULT_POINT_COUNT: usize = 10;

/// Number of random connection attempts the demo driver makes by default.
pub const DEFAULT_EDGE_ATTEMPTS: usize = 15;

/// Smallest edge weight the demo driver assigns (inclusive).
pub const DEFAULT_MIN_WEIGHT: u32 = 50;

/// Upper bound on edge weights the demo driver assigns (exclusive).
pub const DEFAULT_MAX_WEIGHT: u32 = 100;
