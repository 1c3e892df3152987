//! Builder and demo driver tests.

use point_graph::cli::driver::{
    build_from_specs, parse_spec, point_name, populate, report, DemoParams, GraphSpec,
};
use point_graph::graph::GraphBuilder;
use point_graph::types::error::{GraphError, PointRole};

// ==================== Builder Tests ====================

#[test]
fn test_builder_basic() {
    let mut builder = GraphBuilder::new();
    builder
        .points(["A", "B", "C"])
        .edge("A", "B", 10)
        .edge("B", "C", 20)
        .edge("A", "B", 11);
    let graph = builder.build().unwrap();

    assert_eq!(graph.point_count(), 3);
    assert_eq!(graph.edge_count(), 3);
    assert_eq!(graph.get_edges(&"A", &"B").unwrap().len(), 2);
    graph.check_consistency().unwrap();
}

#[test]
fn test_builder_duplicate_point() {
    let mut builder: GraphBuilder<&str, u32> = GraphBuilder::new();
    builder.point("A").point("A");
    assert!(matches!(builder.build(), Err(GraphError::DuplicateValue)));
}

#[test]
fn test_builder_edge_to_unknown_point() {
    let mut builder = GraphBuilder::new();
    builder.point("A").edge("A", "B", 1u32);
    assert!(matches!(
        builder.build(),
        Err(GraphError::PointNotFound(PointRole::Target))
    ));
}

// ==================== Spec Parsing Tests ====================

#[test]
fn test_parse_point_and_edge() {
    assert_eq!(parse_spec("A").unwrap(), GraphSpec::Point("A".into()));
    assert_eq!(
        parse_spec(" A - B : 10 ").unwrap(),
        GraphSpec::Edge {
            source: "A".into(),
            target: "B".into(),
            weight: 10
        }
    );
}

#[test]
fn test_parse_invalid_specs() {
    for bad in ["", "A-B", "A:10", "-B:10", "A-:10", "A-B:x", "A-B:-1", "A-B-C:5"] {
        match parse_spec(bad) {
            Err(GraphError::InvalidArgument(_)) => {}
            other => panic!("Expected InvalidArgument for {:?}, got {:?}", bad, other),
        }
    }
}

#[test]
fn test_build_from_specs_creates_named_points() {
    let specs: Vec<GraphSpec> = ["A-B:10", "B-C:20", "D"]
        .iter()
        .map(|s| parse_spec(s).unwrap())
        .collect();
    let graph = build_from_specs(&specs).unwrap();

    assert_eq!(graph.point_count(), 4);
    assert_eq!(graph.edge_count(), 2);
    assert_eq!(graph.get_edge(&"A".to_string(), &"B".to_string()).unwrap(), Some(&10));
    assert!(graph.neighbors(&"D".to_string()).unwrap().is_empty());
}

// ==================== Population Tests ====================

#[test]
fn test_point_names() {
    assert_eq!(point_name(0), "A");
    assert_eq!(point_name(9), "J");
    assert_eq!(point_name(25), "Z");
    assert_eq!(point_name(26), "P26");
}

#[test]
fn test_populate_default_shape() {
    let params = DemoParams {
        seed: Some(42),
        ..DemoParams::default()
    };
    let graph = populate(&params).unwrap();
    graph.check_consistency().unwrap();

    assert_eq!(graph.point_count(), 10);
    assert!(graph.edge_count() <= 15);
    assert!(graph.edge_count() > 0);
    for (_, _, weight) in graph.edges() {
        assert!((50..100).contains(weight));
    }
}

#[test]
fn test_populate_never_connects_neighbors_twice() {
    let params = DemoParams {
        point_count: 4,
        edge_attempts: 50,
        seed: Some(7),
        ..DemoParams::default()
    };
    let graph = populate(&params).unwrap();

    // Four points admit at most six distinct pairs.
    assert!(graph.edge_count() <= 6);
    for (a, b, _) in graph.edges() {
        assert_ne!(a, b);
        assert_eq!(graph.get_edges(a, b).unwrap().len(), 1);
    }
}

#[test]
fn test_populate_is_reproducible_with_seed() {
    let params = DemoParams {
        seed: Some(1234),
        ..DemoParams::default()
    };
    let first = report(&populate(&params).unwrap()).unwrap();
    let second = report(&populate(&params).unwrap()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_populate_rejects_empty_weight_range() {
    let params = DemoParams {
        min_weight: 10,
        max_weight: 10,
        ..DemoParams::default()
    };
    assert!(matches!(
        populate(&params),
        Err(GraphError::InvalidArgument(_))
    ));
}

#[test]
fn test_populate_without_points() {
    let params = DemoParams {
        point_count: 0,
        ..DemoParams::default()
    };
    let graph = populate(&params).unwrap();
    assert!(graph.is_empty());
}

#[test]
fn test_populate_then_remove_point_stays_consistent() {
    let params = DemoParams {
        seed: Some(99),
        ..DemoParams::default()
    };
    let mut graph = populate(&params).unwrap();
    let removed = point_name(0);
    let neighbors: Vec<String> = graph
        .neighbors(&removed)
        .unwrap()
        .into_iter()
        .cloned()
        .collect();

    assert!(graph.remove_point(&removed));
    graph.check_consistency().unwrap();
    assert_eq!(graph.point_count(), 9);
    for neighbor in &neighbors {
        assert!(!graph.neighbors(neighbor).unwrap().contains(&removed));
    }
    for (a, b, _) in graph.edges() {
        assert_ne!(a, &removed);
        assert_ne!(b, &removed);
    }

    // A second removal of the same name changes nothing.
    let edges = graph.edge_count();
    assert!(!graph.remove_point(&removed));
    assert_eq!(graph.edge_count(), edges);
}

// ==================== Report Tests ====================

#[test]
fn test_report_lists_sorted_neighbors() {
    let specs: Vec<GraphSpec> = ["B-C:20", "A-B:10", "E"]
        .iter()
        .map(|s| parse_spec(s).unwrap())
        .collect();
    let graph = build_from_specs(&specs).unwrap();
    let reports = report(&graph).unwrap();

    let names: Vec<&str> = reports.iter().map(|r| r.point.as_str()).collect();
    assert_eq!(names, ["A", "B", "C", "E"]);

    let b = &reports[1];
    assert_eq!(b.degree, 2);
    assert_eq!(b.neighbors.len(), 2);
    assert_eq!(b.neighbors[0].neighbor, "A");
    assert_eq!(b.neighbors[0].edge, Some(10));
    assert_eq!(b.neighbors[1].neighbor, "C");
    assert_eq!(b.neighbors[1].edge, Some(20));
    assert!(reports[3].neighbors.is_empty());
}

#[test]
fn test_report_serializes_to_json() {
    let specs = vec![parse_spec("A-B:10").unwrap()];
    let graph = build_from_specs(&specs).unwrap();
    let value = serde_json::to_value(report(&graph).unwrap()).unwrap();

    assert_eq!(value[0]["point"], "A");
    assert_eq!(value[0]["neighbors"][0]["neighbor"], "B");
    assert_eq!(value[0]["neighbors"][0]["edge"], 10);
}
