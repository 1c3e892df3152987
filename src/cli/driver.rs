//! Demo driver — random population, edge specs, and neighbor reports.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use crate::graph::{Graph, GraphBuilder};
use crate::types::{
    GraphError, GraphResult, DEFAULT_EDGE_ATTEMPTS, DEFAULT_MAX_WEIGHT, DEFAULT_MIN_WEIGHT,
    DEFAULT_POINT_COUNT,
};

/// The graph type the driver works with: named points, weighted edges.
pub type DemoGraph = Graph<String, u32>;

/// Parameters for random population.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoParams {
    /// How many points to create.
    pub point_count: usize,
    /// How many times to try connecting a random point to a non-neighbor.
    pub edge_attempts: usize,
    /// Smallest weight (inclusive).
    pub min_weight: u32,
    /// Largest weight (exclusive).
    pub max_weight: u32,
    /// Seed for a reproducible graph; entropy when `None`.
    pub seed: Option<u64>,
}

impl Default for DemoParams {
    fn default() -> Self {
        Self {
            point_count: DEFAULT_POINT_COUNT,
            edge_attempts: DEFAULT_EDGE_ATTEMPTS,
            min_weight: DEFAULT_MIN_WEIGHT,
            max_weight: DEFAULT_MAX_WEIGHT,
            seed: None,
        }
    }
}

/// Name of the `index`-th demo point: `A`..`Z`, then `P26`, `P27`, ...
pub fn point_name(index: usize) -> String {
    if index < 26 {
        char::from(b'A' + index as u8).to_string()
    } else {
        format!("P{}", index)
    }
}

/// Build a random graph.
///
/// Each attempt picks a random point and connects it to a random point it
/// is not yet adjacent to. Attempts from a point already adjacent to every
/// other point are skipped, so the edge count may be below `edge_attempts`.
pub fn populate(params: &DemoParams) -> GraphResult<DemoGraph> {
    if params.min_weight >= params.max_weight {
        return Err(GraphError::InvalidArgument(format!(
            "empty weight range {}..{}",
            params.min_weight, params.max_weight
        )));
    }

    let mut rng = match params.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let names: Vec<String> = (0..params.point_count).map(point_name).collect();
    let mut graph = DemoGraph::with_capacity(names.len(), params.edge_attempts);
    for name in &names {
        graph.add_point(name.clone())?;
    }

    let mut skipped = 0usize;
    for _ in 0..params.edge_attempts {
        let Some(start) = names.choose(&mut rng) else {
            break;
        };
        let adjacent = graph.neighbors(start)?;
        let candidates: Vec<&String> = names
            .iter()
            .filter(|name| *name != start && !adjacent.contains(name))
            .collect();
        let Some(end) = candidates.choose(&mut rng).copied() else {
            skipped += 1;
            continue;
        };
        let weight = rng.gen_range(params.min_weight..params.max_weight);
        graph.add_edge(start, end, weight)?;
    }

    log::debug!(
        "Populated {} points and {} edges ({} attempts skipped)",
        graph.point_count(),
        graph.edge_count(),
        skipped
    );
    Ok(graph)
}

/// One item of a `build` command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphSpec {
    /// A lone point: `A`.
    Point(String),
    /// A weighted edge: `A-B:10`.
    Edge {
        source: String,
        target: String,
        weight: u32,
    },
}

/// Parse `A` or `A-B:10`.
pub fn parse_spec(text: &str) -> GraphResult<GraphSpec> {
    let text = text.trim();
    let Some((ends, weight)) = text.split_once(':') else {
        if text.is_empty() || text.contains('-') {
            return Err(GraphError::InvalidArgument(format!(
                "expected a point name or SOURCE-TARGET:WEIGHT, got {:?}",
                text
            )));
        }
        return Ok(GraphSpec::Point(text.to_string()));
    };

    let (source, target) = ends.split_once('-').ok_or_else(|| {
        GraphError::InvalidArgument(format!("edge {:?} is missing '-' between endpoints", text))
    })?;
    let (source, target) = (source.trim(), target.trim());
    if source.is_empty() || target.is_empty() {
        return Err(GraphError::InvalidArgument(format!(
            "edge {:?} needs a non-empty source and target",
            text
        )));
    }
    if target.contains('-') {
        return Err(GraphError::InvalidArgument(format!(
            "edge {:?} has more than one '-', point names cannot contain '-'",
            text
        )));
    }
    let weight = weight.trim().parse::<u32>().map_err(|e| {
        GraphError::InvalidArgument(format!("edge {:?} has a bad weight: {}", text, e))
    })?;

    Ok(GraphSpec::Edge {
        source: source.to_string(),
        target: target.to_string(),
        weight,
    })
}

/// Build a graph from specs. Points named only by an edge are created
/// first, in order of appearance; naming a point twice is not an error.
pub fn build_from_specs(specs: &[GraphSpec]) -> GraphResult<DemoGraph> {
    let mut seen: Vec<&str> = Vec::new();
    let mut builder = GraphBuilder::new();
    for spec in specs {
        let names: Vec<&str> = match spec {
            GraphSpec::Point(name) => vec![name.as_str()],
            GraphSpec::Edge { source, target, .. } => vec![source.as_str(), target.as_str()],
        };
        for name in names {
            if !seen.contains(&name) {
                seen.push(name);
                builder.point(name.to_string());
            }
        }
    }
    for spec in specs {
        if let GraphSpec::Edge {
            source,
            target,
            weight,
        } = spec
        {
            builder.edge(source.clone(), target.clone(), *weight);
        }
    }
    builder.build()
}

/// A neighbor of a reported point and the edge payload toward it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NeighborReport {
    pub neighbor: String,
    pub edge: Option<u32>,
}

/// A point with its neighbors, as printed by the CLI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PointReport {
    pub point: String,
    pub degree: usize,
    pub neighbors: Vec<NeighborReport>,
}

/// Report every point (sorted by name) with its sorted neighbors and the
/// `get_edge` payload toward each.
pub fn report(graph: &DemoGraph) -> GraphResult<Vec<PointReport>> {
    let mut points: Vec<&String> = graph.points().into_iter().collect();
    points.sort();

    let mut reports = Vec::with_capacity(points.len());
    for point in points {
        let mut neighbors: Vec<&String> = graph.neighbors(point)?.into_iter().collect();
        neighbors.sort();
        let neighbors = neighbors
            .into_iter()
            .map(|neighbor| {
                Ok(NeighborReport {
                    neighbor: neighbor.clone(),
                    edge: graph.get_edge(point, neighbor)?.copied(),
                })
            })
            .collect::<GraphResult<Vec<_>>>()?;
        reports.push(PointReport {
            point: point.clone(),
            degree: graph.degree(point)?,
            neighbors,
        });
    }
    Ok(reports)
}
