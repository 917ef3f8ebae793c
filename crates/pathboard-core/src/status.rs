//! Node status engine
//!
//! Pure mapping from a node's status to its presentation: color triple,
//! icon name, badge label, plus the id-derived ordinal badge.

use crate::models::{FlowNode, NodeStatus};
use once_cell::sync::Lazy;
use regex::Regex;

/// Presentation triple for one status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusStyle {
    /// Node fill, hex
    pub background: &'static str,
    /// Node border, hex
    pub border: &'static str,
    /// Title text, hex
    pub text: &'static str,
}

impl StatusStyle {
    /// Fixed palette per status; unrecognized statuses were already
    /// normalized to `Todo` at parse time
    pub fn for_status(status: NodeStatus) -> Self {
        match status {
            NodeStatus::Done => Self {
                background: "#e8f5e9",
                border: "#4caf50",
                text: "#1b5e20",
            },
            NodeStatus::InProgress => Self {
                background: "#fff8e1",
                border: "#ffc107",
                text: "#7a5c00",
            },
            NodeStatus::Todo => Self {
                background: "#e3f2fd",
                border: "#2196f3",
                text: "#0d47a1",
            },
        }
    }
}

/// Icon name for the status badge (lucide icon ids)
pub fn status_icon(status: NodeStatus) -> &'static str {
    match status {
        NodeStatus::Done => "check-circle",
        NodeStatus::InProgress => "zap",
        NodeStatus::Todo => "circle",
    }
}

/// Badge label for the status
pub fn status_label(status: NodeStatus) -> &'static str {
    match status {
        NodeStatus::Done => "Done",
        NodeStatus::InProgress => "In Progress",
        NodeStatus::Todo => "To Do",
    }
}

static ORDINAL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"-(\d+)$").unwrap());

/// Numeric badge shown on a node, parsed from the `"<prefix>-<n>"` id
/// convention with `"1"` as the fallback
///
/// Single isolation point for the id-format coupling: replacing it with an
/// explicit authored order field would touch only this function.
pub fn ordinal_label(node: &FlowNode) -> String {
    ORDINAL_RE
        .captures(&node.id)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<u64>().ok())
        .map(|n| n.to_string())
        .unwrap_or_else(|| "1".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pathboard_types::RawFlowNode;

    fn node_with_id(id: &str) -> FlowNode {
        FlowNode::from_raw(&RawFlowNode {
            id: Some(id.to_string()),
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn test_missing_status_matches_todo() {
        // A node with no status field gets the exact same treatment as an
        // explicit "todo"
        let defaulted = node_with_id("step-1");
        let explicit = FlowNode::from_raw(&RawFlowNode {
            id: Some("step-2".to_string()),
            status: Some("todo".to_string()),
            ..Default::default()
        })
        .unwrap();

        assert_eq!(
            StatusStyle::for_status(defaulted.status),
            StatusStyle::for_status(explicit.status)
        );
        assert_eq!(status_icon(defaulted.status), status_icon(explicit.status));
        assert_eq!(
            status_label(defaulted.status),
            status_label(explicit.status)
        );
    }

    #[test]
    fn test_unrecognized_status_falls_back_to_todo_style() {
        let node = FlowNode::from_raw(&RawFlowNode {
            id: Some("step-1".to_string()),
            status: Some("paused".to_string()),
            ..Default::default()
        })
        .unwrap();

        assert_eq!(status_label(node.status), "To Do");
        assert_eq!(StatusStyle::for_status(node.status).border, "#2196f3");
    }

    #[test]
    fn test_palette_per_status() {
        assert_eq!(StatusStyle::for_status(NodeStatus::Done).border, "#4caf50");
        assert_eq!(
            StatusStyle::for_status(NodeStatus::InProgress).border,
            "#ffc107"
        );
        assert_eq!(status_icon(NodeStatus::Done), "check-circle");
        assert_eq!(status_label(NodeStatus::InProgress), "In Progress");
    }

    #[test]
    fn test_ordinal_label_from_id_suffix() {
        assert_eq!(ordinal_label(&node_with_id("step-1")), "1");
        assert_eq!(ordinal_label(&node_with_id("step-12")), "12");
        assert_eq!(ordinal_label(&node_with_id("node-007")), "7");
    }

    #[test]
    fn test_ordinal_label_fallback() {
        assert_eq!(ordinal_label(&node_with_id("intro")), "1");
        assert_eq!(ordinal_label(&node_with_id("step-")), "1");
        assert_eq!(ordinal_label(&node_with_id("step-0")), "0");
    }
}
