//! Core data models

mod flowchart;

pub use flowchart::{FlowEdge, FlowNode, NodeStatus, Position};
