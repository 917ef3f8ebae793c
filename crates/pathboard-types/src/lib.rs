//! pathboard-types - Shared data types for pathboard
//!
//! This crate contains pure data structures without heavy dependencies.
//! No tokio, no async runtime - just serde-serializable types.
//!
//! Used by:
//! - pathboard-core (graph model, store)
//! - pathboard-web (frontend WASM + API handlers)

pub mod models;

// Re-export model types
pub use models::{
    FlowchartData, RawFlowEdge, RawFlowNode, ReviewEntry, ReviewSubmission, RoadmapRecord,
    RoadmapSummary, StepRecord,
};
