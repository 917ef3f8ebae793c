//! Roadmap flowchart graph using petgraph
//!
//! Wraps a directed graph of normalized flowchart nodes. The structure is
//! deliberately permissive: disconnected components, multi-edges and
//! self-loops are all tolerated, since the graph is whatever the admin
//! editor authored. Parsing is fail-soft - malformed records are dropped
//! with the remainder intact, never an error.
//!
//! # Example
//!
//! ```
//! use pathboard_core::graph::RoadmapGraph;
//! use pathboard_types::{FlowchartData, RawFlowEdge, RawFlowNode};
//!
//! let data = FlowchartData {
//!     nodes: vec![
//!         RawFlowNode {
//!             id: Some("step-1".to_string()),
//!             label: Some("HTML Basics".to_string()),
//!             ..Default::default()
//!         },
//!         RawFlowNode {
//!             id: Some("step-2".to_string()),
//!             label: Some("CSS Basics".to_string()),
//!             ..Default::default()
//!         },
//!     ],
//!     edges: vec![RawFlowEdge {
//!         source: Some("step-1".to_string()),
//!         target: Some("step-2".to_string()),
//!     }],
//! };
//!
//! let (graph, report) = RoadmapGraph::parse(&data);
//! assert_eq!(graph.node_count(), 2);
//! assert_eq!(graph.edge_count(), 1);
//! assert!(report.is_clean());
//! assert_eq!(graph.summary(), "2 nodes • 1 connections");
//! ```

use crate::error::GraphParseReport;
use crate::models::{FlowEdge, FlowNode};
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use std::collections::HashMap;
use tracing::warn;

/// A roadmap's flowchart as a directed graph
///
/// Nodes are normalized `FlowNode`s, edges carry no data (presentation is
/// uniform renderer policy). Node insertion order is preserved - it drives
/// default numeric labeling, not traversal.
#[derive(Debug, Clone, Default)]
pub struct RoadmapGraph {
    graph: DiGraph<FlowNode, ()>,

    /// Map from node id to node index
    node_index: HashMap<String, NodeIndex>,
}

impl RoadmapGraph {
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a raw flowchart payload into a validated graph
    ///
    /// Never fails: a node missing both `id` and `label` is dropped, a
    /// duplicate id replaces the earlier node (last-wins), and an edge with
    /// a missing or dangling endpoint is dropped. Everything dropped is
    /// counted in the returned report.
    pub fn parse(data: &pathboard_types::FlowchartData) -> (Self, GraphParseReport) {
        let mut roadmap = Self::new();
        let mut report = GraphParseReport::default();

        for raw in &data.nodes {
            let Some(node) = FlowNode::from_raw(raw) else {
                warn!("dropping flowchart node with neither id nor label");
                report.nodes_dropped += 1;
                continue;
            };

            if let Some(&existing) = roadmap.node_index.get(&node.id) {
                warn!(node_id = %node.id, "duplicate node id, keeping last");
                report.duplicate_ids += 1;
                roadmap.graph[existing] = node;
            } else {
                let id = node.id.clone();
                let idx = roadmap.graph.add_node(node);
                roadmap.node_index.insert(id, idx);
            }
        }

        for raw in &data.edges {
            let endpoints = raw.source.as_deref().zip(raw.target.as_deref());
            let resolved = endpoints.and_then(|(source, target)| {
                roadmap
                    .node_index
                    .get(source)
                    .copied()
                    .zip(roadmap.node_index.get(target).copied())
            });

            match resolved {
                Some((source, target)) => {
                    roadmap.graph.add_edge(source, target, ());
                }
                None => {
                    warn!(
                        source = raw.source.as_deref().unwrap_or("<missing>"),
                        target = raw.target.as_deref().unwrap_or("<missing>"),
                        "dropping edge with unresolved endpoint"
                    );
                    report.edges_dropped += 1;
                }
            }
        }

        (roadmap, report)
    }

    /// Number of nodes, the progress denominator
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of resolved connections
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// The "N nodes • M connections" header line
    pub fn summary(&self) -> String {
        format!(
            "{} nodes • {} connections",
            self.node_count(),
            self.edge_count()
        )
    }

    /// Get a node by id
    pub fn get_node(&self, id: &str) -> Option<&FlowNode> {
        self.node_index.get(id).map(|&idx| &self.graph[idx])
    }

    /// Nodes in insertion order
    pub fn nodes(&self) -> impl Iterator<Item = &FlowNode> {
        self.graph.node_weights()
    }

    /// All node ids, in insertion order
    pub fn node_ids(&self) -> Vec<String> {
        self.nodes().map(|n| n.id.clone()).collect()
    }

    /// Edges as resolved source/target node pairs
    ///
    /// Dangling references were dropped at parse time, so every edge
    /// yielded here has both endpoints.
    pub fn resolved_edges(&self) -> impl Iterator<Item = (&FlowNode, &FlowNode)> {
        self.graph
            .edge_references()
            .map(|e| (&self.graph[e.source()], &self.graph[e.target()]))
    }

    /// Edges as id pairs, for re-serialization
    pub fn edges(&self) -> Vec<FlowEdge> {
        self.resolved_edges()
            .map(|(source, target)| FlowEdge {
                source: source.id.clone(),
                target: target.id.clone(),
            })
            .collect()
    }
}
