//! Error types for the point-graph library.

use thiserror::Error;

/// Which argument of an operation named a point that is not in the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointRole {
    /// The single point argument of a point query or removal.
    Point,
    /// The first endpoint of an edge operation.
    Source,
    /// The second endpoint of an edge operation.
    Target,
}

impl PointRole {
    /// Return a human-readable name for this role.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Point => "point",
            Self::Source => "source",
            Self::Target => "target",
        }
    }
}

impl std::fmt::Display for PointRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// All errors that can occur in the point-graph library.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// A required argument was missing or malformed.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A point with an equal value is already in the graph.
    #[error("Graph already contains a point with that value")]
    DuplicateValue,

    /// An operation referenced a point value that is not in the graph.
    #[error("Could not find {0} in the graph")]
    PointNotFound(PointRole),

    /// The cached incidence or pair views disagree with the global edge set.
    #[error("Graph is inconsistent: {0}")]
    Inconsistent(String),
}

/// Convenience result type for point-graph operations.
pub type GraphResult<T> = Result<T, GraphError>;
