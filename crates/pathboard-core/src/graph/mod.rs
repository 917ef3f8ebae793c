//! Roadmap flowchart graph

mod roadmap_graph;

pub use roadmap_graph::RoadmapGraph;
