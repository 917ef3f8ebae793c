//! Roadmap content store
//!
//! In-memory store over a content directory of roadmap JSON files.
//! Thread-safe: records live in a DashMap (read-heavy, per-entry locking),
//! review lists behind parking_lot::RwLock. Loading is fail-soft per file -
//! one unreadable roadmap must not blank the store.

use crate::error::{CoreError, StoreLoadReport};
use chrono::Utc;
use dashmap::DashMap;
use parking_lot::RwLock;
use pathboard_types::{ReviewEntry, ReviewSubmission, RoadmapRecord, RoadmapSummary};
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

/// Central store for roadmap records, reviews and engagement counters
#[derive(Debug, Default)]
pub struct RoadmapStore {
    /// Records by roadmap id
    roadmaps: DashMap<String, Arc<RoadmapRecord>>,

    /// Append-only review lists by roadmap id
    reviews: RwLock<HashMap<String, Vec<ReviewEntry>>>,

    /// Fire-and-forget telemetry counters
    download_counts: DashMap<String, u64>,
    share_counts: DashMap<String, u64>,
}

impl RoadmapStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Load every `*.json` roadmap under `content_dir`
    ///
    /// Files that fail to read or parse are skipped and reported; only a
    /// missing directory is a hard error.
    pub fn load_from_dir(content_dir: &Path) -> Result<(Self, StoreLoadReport), CoreError> {
        if !content_dir.is_dir() {
            return Err(CoreError::ContentDirNotFound {
                path: content_dir.to_path_buf(),
            });
        }

        let store = Self::new();
        let mut report = StoreLoadReport::new();

        for entry in WalkDir::new(content_dir)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .filter(|e| e.path().extension().is_some_and(|ext| ext == "json"))
        {
            let path = entry.path();
            match load_record(path) {
                Ok(record) => {
                    debug!(roadmap_id = %record.id, path = %path.display(), "loaded roadmap");
                    store.insert(record);
                    report.roadmaps_loaded += 1;
                }
                Err(err) => {
                    warn!(path = %path.display(), error = %err, "skipping roadmap file");
                    report.add_failure(path, err);
                }
            }
        }

        info!(
            loaded = report.roadmaps_loaded,
            failed = report.roadmaps_failed,
            "roadmap content loaded"
        );
        Ok((store, report))
    }

    /// Insert or replace a record
    pub fn insert(&self, record: RoadmapRecord) {
        self.roadmaps.insert(record.id.clone(), Arc::new(record));
    }

    /// Fetch a record with its server-computed aggregate rating applied
    pub fn get(&self, id: &str) -> Option<RoadmapRecord> {
        let record = self.roadmaps.get(id)?;
        let mut record = (**record).clone();
        if let Some(rating) = self.aggregate_rating(id) {
            record.rating = rating;
        }
        Some(record)
    }

    /// Summaries of all roadmaps, sorted by title
    pub fn list(&self) -> Vec<RoadmapSummary> {
        let mut summaries: Vec<RoadmapSummary> = self
            .roadmaps
            .iter()
            .map(|entry| RoadmapSummary::from(entry.value().as_ref()))
            .collect();
        summaries.sort_by(|a, b| a.title.cmp(&b.title));
        summaries
    }

    pub fn roadmap_count(&self) -> usize {
        self.roadmaps.len()
    }

    /// Reviews for a roadmap, in submission order
    pub fn reviews(&self, id: &str) -> Vec<ReviewEntry> {
        self.reviews.read().get(id).cloned().unwrap_or_default()
    }

    /// Append a review, stamping username and timestamp server-side
    pub fn add_review(
        &self,
        id: &str,
        username: &str,
        submission: ReviewSubmission,
    ) -> Result<ReviewEntry, CoreError> {
        if !(1..=5).contains(&submission.rating) {
            return Err(CoreError::InvalidRating {
                rating: submission.rating,
            });
        }
        if !self.roadmaps.contains_key(id) {
            return Err(CoreError::RoadmapNotFound {
                roadmap_id: id.to_string(),
            });
        }

        let entry = ReviewEntry {
            username: username.to_string(),
            rating: submission.rating,
            review: submission.review,
            created_at: Utc::now(),
        };

        self.reviews
            .write()
            .entry(id.to_string())
            .or_default()
            .push(entry.clone());

        Ok(entry)
    }

    /// Mean of submitted ratings; `None` falls back to the seeded rating
    fn aggregate_rating(&self, id: &str) -> Option<f64> {
        let reviews = self.reviews.read();
        let list = reviews.get(id)?;
        if list.is_empty() {
            return None;
        }
        let sum: u64 = list.iter().map(|r| r.rating as u64).sum();
        Some(sum as f64 / list.len() as f64)
    }

    /// Telemetry: a learner downloaded this roadmap
    pub fn record_download(&self, id: &str) {
        *self.download_counts.entry(id.to_string()).or_insert(0) += 1;
    }

    /// Telemetry: a learner shared this roadmap
    pub fn record_share(&self, id: &str) {
        *self.share_counts.entry(id.to_string()).or_insert(0) += 1;
    }

    pub fn download_count(&self, id: &str) -> u64 {
        self.download_counts.get(id).map(|c| *c).unwrap_or(0)
    }

    pub fn share_count(&self, id: &str) -> u64 {
        self.share_counts.get(id).map(|c| *c).unwrap_or(0)
    }
}

fn load_record(path: &Path) -> Result<RoadmapRecord, CoreError> {
    let raw = std::fs::read_to_string(path).map_err(|source| CoreError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    let mut record: RoadmapRecord =
        serde_json::from_str(&raw).map_err(|source| CoreError::JsonParse {
            path: path.to_path_buf(),
            message: source.to_string(),
            source,
        })?;

    // Records without an explicit id adopt the file stem
    if record.id.is_empty() {
        record.id = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
    }

    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record(id: &str) -> RoadmapRecord {
        RoadmapRecord {
            id: id.to_string(),
            title: format!("Roadmap {id}"),
            description: String::new(),
            content: None,
            difficulty: "medium".to_string(),
            estimated_time: None,
            technologies: vec![],
            steps: vec![],
            rating: 3.5,
            enrolled_count: 0,
            image: None,
            flowchart_data: None,
        }
    }

    #[test]
    fn test_get_unknown_roadmap() {
        let store = RoadmapStore::new();
        assert!(store.get("nope").is_none());
    }

    #[test]
    fn test_seeded_rating_until_first_review() {
        let store = RoadmapStore::new();
        store.insert(sample_record("rust"));

        assert_eq!(store.get("rust").unwrap().rating, 3.5);

        store
            .add_review(
                "rust",
                "alice",
                ReviewSubmission {
                    rating: 5,
                    review: None,
                },
            )
            .unwrap();
        store
            .add_review(
                "rust",
                "bob",
                ReviewSubmission {
                    rating: 4,
                    review: Some("solid".to_string()),
                },
            )
            .unwrap();

        assert_eq!(store.get("rust").unwrap().rating, 4.5);
        assert_eq!(store.reviews("rust").len(), 2);
    }

    #[test]
    fn test_add_review_rejects_invalid_rating() {
        let store = RoadmapStore::new();
        store.insert(sample_record("rust"));

        assert!(matches!(
            store.add_review(
                "rust",
                "alice",
                ReviewSubmission {
                    rating: 0,
                    review: None
                }
            ),
            Err(CoreError::InvalidRating { rating: 0 })
        ));
    }

    #[test]
    fn test_add_review_unknown_roadmap() {
        let store = RoadmapStore::new();
        assert!(matches!(
            store.add_review(
                "ghost",
                "alice",
                ReviewSubmission {
                    rating: 4,
                    review: None
                }
            ),
            Err(CoreError::RoadmapNotFound { .. })
        ));
    }

    #[test]
    fn test_engagement_counters() {
        let store = RoadmapStore::new();
        store.insert(sample_record("rust"));

        store.record_download("rust");
        store.record_download("rust");
        store.record_share("rust");

        assert_eq!(store.download_count("rust"), 2);
        assert_eq!(store.share_count("rust"), 1);
        assert_eq!(store.download_count("other"), 0);
    }

    #[test]
    fn test_load_from_dir_fail_soft() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("rust.json"),
            serde_json::to_string(&sample_record("rust")).unwrap(),
        )
        .unwrap();
        std::fs::write(dir.path().join("broken.json"), "{not json").unwrap();
        std::fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let (store, report) = RoadmapStore::load_from_dir(dir.path()).unwrap();

        assert_eq!(store.roadmap_count(), 1);
        assert_eq!(report.roadmaps_loaded, 1);
        assert_eq!(report.roadmaps_failed, 1);
        assert!(store.get("rust").is_some());
    }

    #[test]
    fn test_load_from_missing_dir_is_hard_error() {
        let err = RoadmapStore::load_from_dir(Path::new("/definitely/not/here")).unwrap_err();
        assert!(matches!(err, CoreError::ContentDirNotFound { .. }));
    }
}
