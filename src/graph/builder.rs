//! Fluent API for building Graph instances.

use std::hash::Hash;

use crate::types::GraphResult;

use super::Graph;

/// Fluent builder for constructing a [`Graph`].
///
/// Insertions are recorded and replayed in order by [`GraphBuilder::build`],
/// so errors surface exactly as they would from the equivalent sequence of
/// `add_point` / `add_edge` calls.
pub struct GraphBuilder<V, E> {
    points: Vec<V>,
    edges: Vec<(V, V, E)>,
}

impl<V, E> GraphBuilder<V, E>
where
    V: Eq + Hash + Clone,
    E: Eq + Hash + Clone,
{
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self {
            points: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Add a point.
    pub fn point(&mut self, value: V) -> &mut Self {
        self.points.push(value);
        self
    }

    /// Add several points.
    pub fn points<I: IntoIterator<Item = V>>(&mut self, values: I) -> &mut Self {
        self.points.extend(values);
        self
    }

    /// Add an edge between two points.
    pub fn edge(&mut self, source: V, target: V, payload: E) -> &mut Self {
        self.edges.push((source, target, payload));
        self
    }

    /// Build the final Graph.
    pub fn build(self) -> GraphResult<Graph<V, E>> {
        let mut graph = Graph::with_capacity(self.points.len(), self.edges.len());
        for value in self.points {
            graph.add_point(value)?;
        }
        for (source, target, payload) in self.edges {
            graph.add_edge(&source, &target, payload)?;
        }
        Ok(graph)
    }
}

impl<V, E> Default for GraphBuilder<V, E>
where
    V: Eq + Hash + Clone,
    E: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}
