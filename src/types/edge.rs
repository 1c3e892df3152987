//! The edge record stored by the graph.

use super::Endpoints;

/// An undirected connection between two points carrying a payload.
///
/// Identity is the payload together with the unordered endpoint pair, so
/// two edges between the same points with different payloads are distinct
/// (parallel edges), and two edges with the same payload between different
/// points are distinct as well.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Edge<V, E> {
    payload: E,
    endpoints: Endpoints<V>,
}

impl<V, E> Edge<V, E> {
    /// Create an edge between `source` and `target`.
    pub(crate) fn new(source: V, target: V, payload: E) -> Self {
        Self {
            payload,
            endpoints: Endpoints::new(source, target),
        }
    }

    /// The caller-supplied payload.
    pub fn payload(&self) -> &E {
        &self.payload
    }

    /// The two points this edge connects.
    pub fn endpoints(&self) -> &Endpoints<V> {
        &self.endpoints
    }
}
