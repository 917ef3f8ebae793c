//! Integration tests for the roadmap flowchart graph

use pathboard_core::graph::RoadmapGraph;
use pathboard_core::models::NodeStatus;
use pathboard_types::{FlowchartData, RawFlowEdge, RawFlowNode};

fn node(id: &str, label: &str) -> RawFlowNode {
    RawFlowNode {
        id: Some(id.to_string()),
        label: Some(label.to_string()),
        ..Default::default()
    }
}

fn edge(source: &str, target: &str) -> RawFlowEdge {
    RawFlowEdge {
        source: Some(source.to_string()),
        target: Some(target.to_string()),
    }
}

#[test]
fn test_empty_graph() {
    let graph = RoadmapGraph::new();
    assert!(graph.is_empty());
    assert_eq!(graph.node_count(), 0);
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn test_parse_well_formed_payload() {
    let data = FlowchartData {
        nodes: vec![
            node("step-1", "HTML"),
            node("step-2", "CSS"),
            node("step-3", "JavaScript"),
        ],
        edges: vec![edge("step-1", "step-2"), edge("step-2", "step-3")],
    };

    let (graph, report) = RoadmapGraph::parse(&data);

    assert!(report.is_clean());
    assert_eq!(graph.node_count(), 3);
    assert_eq!(graph.edge_count(), 2);
    assert_eq!(graph.get_node("step-2").unwrap().label, "CSS");
    assert_eq!(graph.summary(), "3 nodes • 2 connections");
}

#[test]
fn test_fail_soft_parse_drops_only_anonymous_node() {
    // One node missing both id and label, one well-formed: exactly one
    // node survives, no error
    let data = FlowchartData {
        nodes: vec![RawFlowNode::default(), node("step-1", "Intro")],
        edges: vec![],
    };

    let (graph, report) = RoadmapGraph::parse(&data);

    assert_eq!(graph.node_count(), 1);
    assert_eq!(report.nodes_dropped, 1);
    assert!(graph.get_node("step-1").is_some());
}

#[test]
fn test_status_defaults_applied_during_parse() {
    let data = FlowchartData {
        nodes: vec![
            node("step-1", "No status"),
            RawFlowNode {
                id: Some("step-2".to_string()),
                label: Some("Weird status".to_string()),
                status: Some("someday-maybe".to_string()),
                ..Default::default()
            },
        ],
        edges: vec![],
    };

    let (graph, _) = RoadmapGraph::parse(&data);

    // Missing and unrecognized status both land on Todo
    assert_eq!(graph.get_node("step-1").unwrap().status, NodeStatus::Todo);
    assert_eq!(graph.get_node("step-2").unwrap().status, NodeStatus::Todo);
}

#[test]
fn test_status_and_completion_are_independent() {
    // Intentionally permissive: done with completion=40 parses as-is
    let data = FlowchartData {
        nodes: vec![RawFlowNode {
            id: Some("step-1".to_string()),
            label: Some("Intro".to_string()),
            status: Some("done".to_string()),
            completion: Some(40),
            ..Default::default()
        }],
        edges: vec![],
    };

    let (graph, _) = RoadmapGraph::parse(&data);
    let parsed = graph.get_node("step-1").unwrap();

    assert_eq!(parsed.status, NodeStatus::Done);
    assert_eq!(parsed.completion, 40);
}

#[test]
fn test_dangling_edges_never_reach_renderer() {
    let data = FlowchartData {
        nodes: vec![node("a", "A"), node("b", "B")],
        edges: vec![edge("a", "b"), edge("a", "missing"), edge("ghost", "b")],
    };

    let (graph, report) = RoadmapGraph::parse(&data);

    assert_eq!(graph.edge_count(), 1);
    assert_eq!(report.edges_dropped, 2);
    for (source, target) in graph.resolved_edges() {
        assert!(graph.get_node(&source.id).is_some());
        assert!(graph.get_node(&target.id).is_some());
    }
}

#[test]
fn test_disconnected_components_tolerated() {
    let data = FlowchartData {
        nodes: vec![
            node("a", "A"),
            node("b", "B"),
            node("c", "Island"),
            node("d", "Other island"),
        ],
        edges: vec![edge("a", "b")],
    };

    let (graph, report) = RoadmapGraph::parse(&data);

    assert!(report.is_clean());
    assert_eq!(graph.node_count(), 4);
    assert_eq!(graph.edge_count(), 1);
}

#[test]
fn test_node_normalization_round_trip() {
    let data = FlowchartData {
        nodes: vec![RawFlowNode {
            id: Some("step-4".to_string()),
            label: Some("Async".to_string()),
            description: Some("Futures and executors".to_string()),
            content: None,
            status: Some("in-progress".to_string()),
            completion: Some(60),
            difficulty: Some("hard".to_string()),
            time_spent: Some("6h".to_string()),
            resources: Some(vec!["The async book".to_string()]),
            redirect_url: Some("https://rust-lang.github.io/async-book/".to_string()),
            x: Some(40.0),
            y: Some(300.0),
        }],
        edges: vec![],
    };

    let (graph, _) = RoadmapGraph::parse(&data);
    let parsed = graph.get_node("step-4").unwrap();

    assert_eq!(parsed.status, NodeStatus::InProgress);
    assert_eq!(parsed.completion, 60);
    assert_eq!(parsed.difficulty, "hard");
    assert_eq!(parsed.time_spent, "6h");
    assert_eq!(parsed.resources.len(), 1);
    assert_eq!(parsed.detail_body(), Some("Futures and executors"));
    assert_eq!(parsed.position.x, 40.0);
    assert_eq!(parsed.position.y, 300.0);
}

#[test]
fn test_stress_large_flowchart() {
    let nodes = (0..500)
        .map(|i| node(&format!("step-{i}"), &format!("Step {i}")))
        .collect();
    let edges = (0..499)
        .map(|i| edge(&format!("step-{i}"), &format!("step-{}", i + 1)))
        .collect();

    let (graph, report) = RoadmapGraph::parse(&FlowchartData { nodes, edges });

    assert!(report.is_clean());
    assert_eq!(graph.node_count(), 500);
    assert_eq!(graph.edge_count(), 499);
    assert_eq!(graph.node_ids()[499], "step-499");
}
