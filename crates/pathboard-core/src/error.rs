//! Error types for pathboard-core
//!
//! Graph parsing never fails hard: malformed records degrade into report
//! entries so a partially-specified roadmap still renders what it validly
//! can. Hard errors are reserved for the store boundary (IO, unknown ids,
//! invalid review payloads).

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for pathboard operations
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Content directory not found: {path}")]
    ContentDirNotFound { path: PathBuf },

    #[error("Failed to parse JSON in {path}: {message}")]
    JsonParse {
        path: PathBuf,
        message: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Roadmap not found: {roadmap_id}")]
    RoadmapNotFound { roadmap_id: String },

    #[error("Invalid rating {rating}: must be between 1 and 5")]
    InvalidRating { rating: u8 },
}

/// Outcome of a fail-soft flowchart parse
///
/// The graph itself is always produced; this report records what was
/// dropped along the way so callers can log or surface a degraded state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GraphParseReport {
    /// Nodes dropped because both `id` and `label` were missing
    pub nodes_dropped: usize,
    /// Nodes that replaced an earlier node with the same id (last-wins)
    pub duplicate_ids: usize,
    /// Edges dropped for a missing or dangling endpoint
    pub edges_dropped: usize,
}

impl GraphParseReport {
    /// True when every raw record made it into the graph unchanged
    pub fn is_clean(&self) -> bool {
        self.nodes_dropped == 0 && self.duplicate_ids == 0 && self.edges_dropped == 0
    }
}

/// Report of errors encountered while loading a content directory
///
/// Enables graceful degradation: one unreadable roadmap file must not
/// blank the whole store.
#[derive(Debug, Default)]
pub struct StoreLoadReport {
    pub roadmaps_loaded: usize,
    pub roadmaps_failed: usize,
    /// Human-readable description per failed file
    pub errors: Vec<String>,
}

impl StoreLoadReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_failure(&mut self, path: &std::path::Path, message: impl std::fmt::Display) {
        self.roadmaps_failed += 1;
        self.errors.push(format!("{}: {}", path.display(), message));
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}
