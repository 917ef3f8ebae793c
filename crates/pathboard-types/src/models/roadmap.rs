//! Roadmap record and flowchart payload as served by the content API
//!
//! Field names are camelCase on the wire. The flowchart payload is kept
//! permissive: every per-node field except the identifying pair is optional
//! so that one sloppy record cannot fail the whole roadmap (normalization
//! happens in pathboard-core).

use serde::{Deserialize, Serialize};

/// Full roadmap record returned by `GET /api/roadmaps/{id}`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapRecord {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Long-form markdown/HTML body shown on the overview tab
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default = "default_difficulty")]
    pub difficulty: String,
    /// Display string, e.g. "6 weeks"
    #[serde(default)]
    pub estimated_time: Option<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
    /// Linear walkthrough list - independent of the flowchart graph
    #[serde(default)]
    pub steps: Vec<StepRecord>,
    /// Aggregate rating, server-computed from reviews
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub enrolled_count: u64,
    #[serde(default)]
    pub image: Option<String>,
    /// Optional graph visualization; absence means the flowchart section
    /// is simply not rendered
    #[serde(default)]
    pub flowchart_data: Option<FlowchartData>,
}

fn default_difficulty() -> String {
    "medium".to_string()
}

/// One entry of the linear Learning Steps list
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepRecord {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub resources: Vec<String>,
}

/// Condensed roadmap for the listing page
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapSummary {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_difficulty")]
    pub difficulty: String,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub enrolled_count: u64,
}

impl From<&RoadmapRecord> for RoadmapSummary {
    fn from(record: &RoadmapRecord) -> Self {
        Self {
            id: record.id.clone(),
            title: record.title.clone(),
            description: record.description.clone(),
            difficulty: record.difficulty.clone(),
            rating: record.rating,
            enrolled_count: record.enrolled_count,
        }
    }
}

/// Raw flowchart payload embedded in a roadmap record
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowchartData {
    #[serde(default)]
    pub nodes: Vec<RawFlowNode>,
    #[serde(default)]
    pub edges: Vec<RawFlowEdge>,
}

/// Untrusted node record as authored in the admin flowchart editor
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawFlowNode {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub completion: Option<i64>,
    #[serde(default)]
    pub difficulty: Option<String>,
    #[serde(default)]
    pub time_spent: Option<String>,
    #[serde(default)]
    pub resources: Option<Vec<String>>,
    #[serde(default)]
    pub redirect_url: Option<String>,
    #[serde(default)]
    pub x: Option<f64>,
    #[serde(default)]
    pub y: Option<f64>,
}

/// Untrusted edge record; endpoints may dangle
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawFlowEdge {
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub target: Option<String>,
}
