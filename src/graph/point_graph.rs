//! Core graph structure — points keyed by value, edges with incidence indexes.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use crate::types::{Edge, Endpoints, GraphError, GraphResult, PointRole};

/// An undirected multigraph whose points are identified by their values.
///
/// Three views of the edge set are kept in lockstep:
/// - the global edge set,
/// - per-point incidence sets,
/// - a pair index from unordered endpoints to edge payloads.
///
/// Every mutating method validates its arguments before touching any of
/// them, so a failed call leaves the graph unchanged.
#[derive(Debug, Clone)]
pub struct Graph<V, E> {
    /// All points, each mapped to the edges incident to it.
    points: HashMap<V, HashSet<Edge<V, E>>>,
    /// All edges.
    edges: HashSet<Edge<V, E>>,
    /// Payloads of every edge between an unordered pair of points.
    pairs: HashMap<Endpoints<V>, HashSet<E>>,
}

impl<V, E> Graph<V, E>
where
    V: Eq + Hash + Clone,
    E: Eq + Hash + Clone,
{
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self {
            points: HashMap::new(),
            edges: HashSet::new(),
            pairs: HashMap::new(),
        }
    }

    /// Create an empty graph with pre-allocated capacity.
    pub fn with_capacity(point_capacity: usize, edge_capacity: usize) -> Self {
        Self {
            points: HashMap::with_capacity(point_capacity),
            edges: HashSet::with_capacity(edge_capacity),
            pairs: HashMap::with_capacity(edge_capacity),
        }
    }

    /// Number of points.
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Number of edges, counting parallel edges separately.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// True if the graph has no points (and therefore no edges).
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Add a point with no incident edges.
    ///
    /// Fails with [`GraphError::DuplicateValue`] if an equal point exists.
    pub fn add_point(&mut self, value: V) -> GraphResult<()> {
        if self.points.contains_key(&value) {
            return Err(GraphError::DuplicateValue);
        }
        self.points.insert(value, HashSet::new());
        Ok(())
    }

    /// True if a point equal to `value` exists.
    pub fn contains_point(&self, value: &V) -> bool {
        self.points.contains_key(value)
    }

    /// All point values, in no particular order.
    pub fn points(&self) -> HashSet<&V> {
        self.points.keys().collect()
    }

    /// Remove a point and every edge incident to it.
    ///
    /// Returns `false` without touching anything if the point does not exist.
    pub fn remove_point(&mut self, value: &V) -> bool {
        // The detached incidence set is the complete removal plan.
        let Some(incident) = self.points.remove(value) else {
            return false;
        };

        for edge in &incident {
            if let Some(other) = edge.endpoints().opposite(value) {
                if let Some(other_incident) = self.points.get_mut(other) {
                    other_incident.remove(edge);
                }
            }
            self.edges.remove(edge);
            self.unindex_pair(edge);
        }

        log::debug!(
            "Removed point with {} incident edges ({} points, {} edges left)",
            incident.len(),
            self.points.len(),
            self.edges.len()
        );
        true
    }

    /// Connect two existing points with an edge carrying `payload`.
    ///
    /// Returns `Ok(false)` if an identical edge (same payload, same pair)
    /// is already present. Edges with a different payload between the same
    /// pair are added alongside existing ones.
    pub fn add_edge(&mut self, source: &V, target: &V, payload: E) -> GraphResult<bool> {
        self.require_pair(source, target)?;

        let edge = Edge::new(source.clone(), target.clone(), payload.clone());
        if self.edges.contains(&edge) {
            return Ok(false);
        }

        for end in edge.endpoints().as_array() {
            if let Some(incident) = self.points.get_mut(end) {
                incident.insert(edge.clone());
            }
        }
        self.pairs
            .entry(edge.endpoints().clone())
            .or_default()
            .insert(payload);
        self.edges.insert(edge);

        log::trace!("Added edge ({} edges total)", self.edges.len());
        Ok(true)
    }

    /// True if an edge with exactly this payload connects the pair.
    pub fn contains_edge(&self, source: &V, target: &V, payload: &E) -> bool {
        self.edges
            .contains(&Edge::new(source.clone(), target.clone(), payload.clone()))
    }

    /// Remove the single edge between the pair carrying `payload`.
    ///
    /// Returns `Ok(false)` if no such edge exists.
    pub fn remove_edge(&mut self, source: &V, target: &V, payload: &E) -> GraphResult<bool> {
        self.require_pair(source, target)?;

        let edge = Edge::new(source.clone(), target.clone(), payload.clone());
        if !self.edges.remove(&edge) {
            return Ok(false);
        }
        self.detach_incidence(&edge);
        self.unindex_pair(&edge);
        Ok(true)
    }

    /// Remove every edge directly connecting the pair, in either direction.
    ///
    /// Returns the number of edges removed; zero if the points were not
    /// connected.
    pub fn disconnect(&mut self, source: &V, target: &V) -> GraphResult<usize> {
        self.require_pair(source, target)?;

        let key = Endpoints::new(source.clone(), target.clone());
        let Some(payloads) = self.pairs.remove(&key) else {
            return Ok(0);
        };

        let removed = payloads.len();
        for payload in payloads {
            let edge = Edge::new(source.clone(), target.clone(), payload);
            self.edges.remove(&edge);
            self.detach_incidence(&edge);
        }

        log::debug!("Disconnected pair, removed {} parallel edges", removed);
        Ok(removed)
    }

    /// Payload of one edge connecting the pair, or `None` if unconnected.
    ///
    /// When parallel edges exist, which one is returned is unspecified.
    pub fn get_edge(&self, source: &V, target: &V) -> GraphResult<Option<&E>> {
        self.require_pair(source, target)?;
        Ok(self
            .pairs
            .get(&Endpoints::new(source.clone(), target.clone()))
            .and_then(|payloads| payloads.iter().next()))
    }

    /// Payloads of every edge connecting the pair.
    pub fn get_edges(&self, source: &V, target: &V) -> GraphResult<HashSet<&E>> {
        self.require_pair(source, target)?;
        Ok(self
            .pairs
            .get(&Endpoints::new(source.clone(), target.clone()))
            .map(|payloads| payloads.iter().collect())
            .unwrap_or_default())
    }

    /// Payloads of every edge incident to `point`.
    pub fn incident_edges(&self, point: &V) -> GraphResult<HashSet<&E>> {
        Ok(self
            .incidence(point)?
            .iter()
            .map(|edge| edge.payload())
            .collect())
    }

    /// Distinct points one edge away from `point`, never including itself.
    pub fn neighbors(&self, point: &V) -> GraphResult<HashSet<&V>> {
        Ok(self
            .incidence(point)?
            .iter()
            .filter_map(|edge| edge.endpoints().opposite(point))
            .filter(|other| *other != point)
            .collect())
    }

    /// Number of edges incident to `point`. A self-loop counts once.
    pub fn degree(&self, point: &V) -> GraphResult<usize> {
        Ok(self.incidence(point)?.len())
    }

    /// Iterate every edge as `(first endpoint, second endpoint, payload)`.
    pub fn edges(&self) -> impl Iterator<Item = (&V, &V, &E)> + '_ {
        self.edges.iter().map(|edge| {
            let ends = edge.endpoints();
            (ends.first(), ends.second(), edge.payload())
        })
    }

    /// Remove all points and edges.
    pub fn clear(&mut self) {
        self.points.clear();
        self.edges.clear();
        self.pairs.clear();
    }

    /// Verify that the incidence sets and pair index mirror the edge set.
    pub fn check_consistency(&self) -> GraphResult<()> {
        for edge in &self.edges {
            for end in edge.endpoints().as_array() {
                match self.points.get(end) {
                    None => {
                        return Err(GraphError::Inconsistent(
                            "edge references a missing point".into(),
                        ))
                    }
                    Some(incident) if !incident.contains(edge) => {
                        return Err(GraphError::Inconsistent(
                            "edge missing from an endpoint's incidence".into(),
                        ))
                    }
                    Some(_) => {}
                }
            }
            let indexed = self
                .pairs
                .get(edge.endpoints())
                .is_some_and(|payloads| payloads.contains(edge.payload()));
            if !indexed {
                return Err(GraphError::Inconsistent(
                    "edge missing from the pair index".into(),
                ));
            }
        }

        for (point, incident) in &self.points {
            for edge in incident {
                if !edge.endpoints().contains(point) {
                    return Err(GraphError::Inconsistent(
                        "incidence holds an edge that does not touch its point".into(),
                    ));
                }
                if !self.edges.contains(edge) {
                    return Err(GraphError::Inconsistent(
                        "incidence holds an edge absent from the edge set".into(),
                    ));
                }
            }
        }

        for (ends, payloads) in &self.pairs {
            if payloads.is_empty() {
                return Err(GraphError::Inconsistent("empty pair index entry".into()));
            }
            for payload in payloads {
                let edge = Edge::new(ends.first().clone(), ends.second().clone(), payload.clone());
                if !self.edges.contains(&edge) {
                    return Err(GraphError::Inconsistent(
                        "pair index holds an edge absent from the edge set".into(),
                    ));
                }
            }
        }

        Ok(())
    }

    fn incidence(&self, point: &V) -> GraphResult<&HashSet<Edge<V, E>>> {
        self.points
            .get(point)
            .ok_or(GraphError::PointNotFound(PointRole::Point))
    }

    fn require_pair(&self, source: &V, target: &V) -> GraphResult<()> {
        if !self.points.contains_key(source) {
            return Err(GraphError::PointNotFound(PointRole::Source));
        }
        if !self.points.contains_key(target) {
            return Err(GraphError::PointNotFound(PointRole::Target));
        }
        Ok(())
    }

    /// Drop `edge` from the incidence sets of both of its ends.
    fn detach_incidence(&mut self, edge: &Edge<V, E>) {
        for end in edge.endpoints().as_array() {
            if let Some(incident) = self.points.get_mut(end) {
                incident.remove(edge);
            }
        }
    }

    fn unindex_pair(&mut self, edge: &Edge<V, E>) {
        if let Some(payloads) = self.pairs.get_mut(edge.endpoints()) {
            payloads.remove(edge.payload());
            if payloads.is_empty() {
                self.pairs.remove(edge.endpoints());
            }
        }
    }
}

impl<V, E> Default for Graph<V, E>
where
    V: Eq + Hash + Clone,
    E: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

/// Adds points, silently skipping values already present.
impl<V, E> Extend<V> for Graph<V, E>
where
    V: Eq + Hash + Clone,
    E: Eq + Hash + Clone,
{
    fn extend<I: IntoIterator<Item = V>>(&mut self, iter: I) {
        for value in iter {
            self.points.entry(value).or_default();
        }
    }
}

impl<V, E> FromIterator<V> for Graph<V, E>
where
    V: Eq + Hash + Clone,
    E: Eq + Hash + Clone,
{
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        let mut graph = Self::new();
        graph.extend(iter);
        graph
    }
}
