//! CLI command implementations.

use super::driver::{self, DemoGraph, DemoParams, PointReport};
use crate::types::GraphResult;

/// Randomly populate a graph and print every point with its neighbors.
pub fn cmd_demo(params: &DemoParams, remove: Option<&str>, json: bool) -> GraphResult<()> {
    let mut graph = driver::populate(params)?;
    apply_removal(&mut graph, remove);
    print_graph(&graph, json)
}

/// Build a graph from `A` / `A-B:10` specs and print it.
pub fn cmd_build(specs: &[String], remove: Option<&str>, json: bool) -> GraphResult<()> {
    let specs = specs
        .iter()
        .map(|s| driver::parse_spec(s))
        .collect::<GraphResult<Vec<_>>>()?;
    let mut graph = driver::build_from_specs(&specs)?;
    apply_removal(&mut graph, remove);
    print_graph(&graph, json)
}

fn apply_removal(graph: &mut DemoGraph, remove: Option<&str>) {
    if let Some(name) = remove {
        if graph.remove_point(&name.to_string()) {
            log::info!("Removed point {}", name);
        } else {
            log::warn!("Point {} not in graph, nothing removed", name);
        }
    }
}

fn print_graph(graph: &DemoGraph, json: bool) -> GraphResult<()> {
    let reports = driver::report(graph)?;

    if json {
        let out = serde_json::json!({
            "points": graph.point_count(),
            "edges": graph.edge_count(),
            "report": reports,
        });
        println!("{}", serde_json::to_string_pretty(&out).unwrap_or_default());
    } else {
        println!("Points: {}", graph.point_count());
        println!("Edges: {}", graph.edge_count());
        for report in &reports {
            print_report(report);
        }
    }
    Ok(())
}

fn print_report(report: &PointReport) {
    if report.neighbors.is_empty() {
        println!("  {} (isolated)", report.point);
        return;
    }
    let parts: Vec<String> = report
        .neighbors
        .iter()
        .map(|n| match n.edge {
            Some(weight) => format!("{} [{}]", n.neighbor, weight),
            None => n.neighbor.clone(),
        })
        .collect();
    println!(
        "  {} (degree {}) -> {}",
        report.point,
        report.degree,
        parts.join(", ")
    );
}
