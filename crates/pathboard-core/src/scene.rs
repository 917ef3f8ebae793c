//! Scene builder - the renderer-agnostic half of the flowchart canvas
//!
//! Turns `(graph, completion set)` into flat visual primitives. Rendering
//! technology (SVG, canvas, any layout library) consumes the scene without
//! touching the status engine or the progress tracker, and the build is a
//! pure function: identical inputs yield an identical scene, so re-render
//! after an unrelated state change reproduces identical node visuals.

use crate::models::{NodeStatus, Position};
use crate::progress::ProgressTracker;
use crate::status::{ordinal_label, status_icon, status_label, StatusStyle};
use crate::RoadmapGraph;

/// Node box size in scene units; layout positions are box top-left corners
pub const NODE_WIDTH: f64 = 180.0;
pub const NODE_HEIGHT: f64 = 72.0;

/// Margin kept around the graph when fitting the view
pub const FIT_PADDING: f64 = 48.0;

/// Everything a renderer needs to paint one node
#[derive(Debug, Clone, PartialEq)]
pub struct NodeVisual {
    pub id: String,
    pub label: String,
    /// Numeric badge, derived from the id convention
    pub ordinal: String,
    pub status: NodeStatus,
    pub style: StatusStyle,
    pub icon: &'static str,
    pub status_label: &'static str,
    /// 0-100, drawn as the in-node completion bar
    pub completion: u8,
    /// Render the external-link glyph
    pub has_redirect: bool,
    /// Learner marked this node complete in the current session
    pub completed: bool,
    /// Box top-left corner
    pub position: Position,
}

/// A resolved connector between two node box centers
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeVisual {
    pub from: Position,
    pub to: Position,
}

/// Axis-aligned bounds of the scene, for fit-view framing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneBounds {
    pub min_x: f64,
    pub min_y: f64,
    pub width: f64,
    pub height: f64,
}

impl Default for SceneBounds {
    fn default() -> Self {
        Self {
            min_x: 0.0,
            min_y: 0.0,
            width: NODE_WIDTH + 2.0 * FIT_PADDING,
            height: NODE_HEIGHT + 2.0 * FIT_PADDING,
        }
    }
}

/// Flat, renderer-ready description of the flowchart
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlowScene {
    pub nodes: Vec<NodeVisual>,
    pub edges: Vec<EdgeVisual>,
    pub bounds: Option<SceneBounds>,
}

impl FlowScene {
    /// Build the scene for the current graph and completion set
    pub fn build(graph: &RoadmapGraph, tracker: &ProgressTracker) -> Self {
        let nodes: Vec<NodeVisual> = graph
            .nodes()
            .map(|node| NodeVisual {
                id: node.id.clone(),
                label: node.label.clone(),
                ordinal: ordinal_label(node),
                status: node.status,
                style: StatusStyle::for_status(node.status),
                icon: status_icon(node.status),
                status_label: status_label(node.status),
                completion: node.completion,
                has_redirect: node.redirect_url.is_some(),
                completed: tracker.is_node_completed(&node.id),
                position: node.position,
            })
            .collect();

        let edges = graph
            .resolved_edges()
            .map(|(source, target)| EdgeVisual {
                from: box_center(source.position),
                to: box_center(target.position),
            })
            .collect();

        let bounds = bounds_of(&nodes);

        Self {
            nodes,
            edges,
            bounds,
        }
    }

    /// Fit-view frame; a sensible default when the graph is empty
    pub fn fit_bounds(&self) -> SceneBounds {
        self.bounds.unwrap_or_default()
    }
}

fn box_center(top_left: Position) -> Position {
    Position {
        x: top_left.x + NODE_WIDTH / 2.0,
        y: top_left.y + NODE_HEIGHT / 2.0,
    }
}

fn bounds_of(nodes: &[NodeVisual]) -> Option<SceneBounds> {
    let first = nodes.first()?.position;
    let mut min_x = first.x;
    let mut min_y = first.y;
    let mut max_x = first.x;
    let mut max_y = first.y;

    for node in nodes {
        min_x = min_x.min(node.position.x);
        min_y = min_y.min(node.position.y);
        max_x = max_x.max(node.position.x);
        max_y = max_y.max(node.position.y);
    }

    Some(SceneBounds {
        min_x: min_x - FIT_PADDING,
        min_y: min_y - FIT_PADDING,
        width: (max_x - min_x) + NODE_WIDTH + 2.0 * FIT_PADDING,
        height: (max_y - min_y) + NODE_HEIGHT + 2.0 * FIT_PADDING,
    })
}
