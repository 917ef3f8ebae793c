//! Normalized flowchart node/edge models
//!
//! Raw records arrive from the admin editor with every field optional
//! (see `pathboard_types::RawFlowNode`). Normalization fills defaults so
//! downstream code never deals with missing fields.

use pathboard_types::RawFlowNode;
use serde::{Deserialize, Serialize};

/// Per-node completion status
///
/// Unrecognized wire values fail soft into `Todo` - an explicit
/// default-case policy, not an error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeStatus {
    #[default]
    Todo,
    InProgress,
    Done,
}

impl NodeStatus {
    /// Parse status from string (not implementing FromStr trait to keep simple)
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "done" | "complete" | "completed" => Self::Done,
            "in-progress" | "in_progress" | "active" => Self::InProgress,
            _ => Self::Todo,
        }
    }
}

/// Admin-authored layout coordinates for one node
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// One visual box in the flowchart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowNode {
    /// Unique within a graph; duplicates are last-wins
    pub id: String,
    pub label: String,
    pub description: Option<String>,
    /// Preferred over `description` for the detail panel
    pub content: Option<String>,
    pub status: NodeStatus,
    /// Percentage 0-100, independent of `status`
    pub completion: u8,
    /// Display-only label (easy/medium/hard)
    pub difficulty: String,
    /// Display-only, e.g. "2h"
    pub time_spent: String,
    pub resources: Vec<String>,
    /// Presence toggles the external-link affordance
    pub redirect_url: Option<String>,
    pub position: Position,
}

impl FlowNode {
    /// Normalize a raw node record, or drop it
    ///
    /// Returns `None` only when both `id` and `label` are missing; a node
    /// with a label but no id adopts the label as its id.
    pub fn from_raw(raw: &RawFlowNode) -> Option<Self> {
        let id = raw
            .id
            .clone()
            .filter(|s| !s.is_empty())
            .or_else(|| raw.label.clone().filter(|s| !s.is_empty()))?;
        let label = raw.label.clone().filter(|s| !s.is_empty()).unwrap_or_else(|| id.clone());

        Some(Self {
            id,
            label,
            description: raw.description.clone(),
            content: raw.content.clone(),
            status: raw
                .status
                .as_deref()
                .map(NodeStatus::from_str)
                .unwrap_or_default(),
            completion: raw.completion.unwrap_or(0).clamp(0, 100) as u8,
            difficulty: raw
                .difficulty
                .clone()
                .unwrap_or_else(|| "medium".to_string()),
            time_spent: raw.time_spent.clone().unwrap_or_else(|| "0h".to_string()),
            resources: raw.resources.clone().unwrap_or_default(),
            redirect_url: raw.redirect_url.clone().filter(|s| !s.is_empty()),
            position: Position {
                x: raw.x.unwrap_or(0.0),
                y: raw.y.unwrap_or(0.0),
            },
        })
    }

    /// Long-form text for the detail panel: `content` wins, `description`
    /// is the fallback
    pub fn detail_body(&self) -> Option<&str> {
        self.content
            .as_deref()
            .or(self.description.as_deref())
            .filter(|s| !s.is_empty())
    }
}

/// One connector in the flowchart, by node-id reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowEdge {
    pub source: String,
    pub target: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_from_str_fail_soft() {
        assert_eq!(NodeStatus::from_str("done"), NodeStatus::Done);
        assert_eq!(NodeStatus::from_str("Completed"), NodeStatus::Done);
        assert_eq!(NodeStatus::from_str("in-progress"), NodeStatus::InProgress);
        assert_eq!(NodeStatus::from_str("todo"), NodeStatus::Todo);
        // Unknown values are To Do, never an error
        assert_eq!(NodeStatus::from_str("blocked???"), NodeStatus::Todo);
        assert_eq!(NodeStatus::from_str(""), NodeStatus::Todo);
    }

    #[test]
    fn test_from_raw_defaults() {
        let raw = RawFlowNode {
            id: Some("step-1".to_string()),
            label: Some("Intro".to_string()),
            ..Default::default()
        };
        let node = FlowNode::from_raw(&raw).unwrap();

        assert_eq!(node.status, NodeStatus::Todo);
        assert_eq!(node.completion, 0);
        assert_eq!(node.difficulty, "medium");
        assert_eq!(node.time_spent, "0h");
        assert!(node.resources.is_empty());
        assert!(node.redirect_url.is_none());
    }

    #[test]
    fn test_from_raw_drops_anonymous_node() {
        let raw = RawFlowNode::default();
        assert!(FlowNode::from_raw(&raw).is_none());
    }

    #[test]
    fn test_from_raw_label_only_adopts_label_as_id() {
        let raw = RawFlowNode {
            label: Some("Closures".to_string()),
            ..Default::default()
        };
        let node = FlowNode::from_raw(&raw).unwrap();
        assert_eq!(node.id, "Closures");
        assert_eq!(node.label, "Closures");
    }

    #[test]
    fn test_from_raw_clamps_completion() {
        let raw = RawFlowNode {
            id: Some("step-1".to_string()),
            completion: Some(140),
            ..Default::default()
        };
        assert_eq!(FlowNode::from_raw(&raw).unwrap().completion, 100);

        let raw = RawFlowNode {
            id: Some("step-1".to_string()),
            completion: Some(-3),
            ..Default::default()
        };
        assert_eq!(FlowNode::from_raw(&raw).unwrap().completion, 0);
    }

    #[test]
    fn test_detail_body_prefers_content() {
        let raw = RawFlowNode {
            id: Some("step-2".to_string()),
            description: Some("short".to_string()),
            content: Some("long form".to_string()),
            ..Default::default()
        };
        let node = FlowNode::from_raw(&raw).unwrap();
        assert_eq!(node.detail_body(), Some("long form"));

        let raw = RawFlowNode {
            id: Some("step-2".to_string()),
            description: Some("short".to_string()),
            ..Default::default()
        };
        let node = FlowNode::from_raw(&raw).unwrap();
        assert_eq!(node.detail_body(), Some("short"));
    }
}
