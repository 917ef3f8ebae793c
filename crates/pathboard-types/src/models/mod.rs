//! Wire-format data models shared between server and frontend

mod review;
mod roadmap;

pub use review::{ReviewEntry, ReviewSubmission};
pub use roadmap::{
    FlowchartData, RawFlowEdge, RawFlowNode, RoadmapRecord, RoadmapSummary, StepRecord,
};
