//! Review wire types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single review as stored and returned by the server
///
/// `username` and `created_at` are stamped server-side on submission;
/// the collection is append-only from the client's perspective.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewEntry {
    pub username: String,
    /// Star rating, 1-5
    pub rating: u8,
    #[serde(default)]
    pub review: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Client payload for `POST /api/roadmaps/{id}/reviews`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewSubmission {
    pub rating: u8,
    #[serde(default)]
    pub review: Option<String>,
}
