//! API client for the roadmap content endpoints
//!
//! All calls are async and non-blocking with respect to the canvas UI.
//! Telemetry posts are fire-and-forget: failures are logged and swallowed,
//! never surfaced.

use gloo_net::http::Request;
use pathboard_types::{ReviewEntry, ReviewSubmission, RoadmapRecord, RoadmapSummary};

/// Error taxonomy for API calls
///
/// `Unauthorized` is kept distinct so the review form can prompt for login
/// instead of showing a generic failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    Unauthorized,
    NotFound,
    Http(u16),
    Network(String),
    Parse(String),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Unauthorized => write!(f, "Not logged in"),
            ApiError::NotFound => write!(f, "Not found"),
            ApiError::Http(status) => write!(f, "HTTP error: {}", status),
            ApiError::Network(msg) => write!(f, "Network error: {}", msg),
            ApiError::Parse(msg) => write!(f, "Parse error: {}", msg),
        }
    }
}

fn status_error(status: u16) -> ApiError {
    match status {
        401 => ApiError::Unauthorized,
        404 => ApiError::NotFound,
        other => ApiError::Http(other),
    }
}

/// Locally remembered identity, forwarded as the `x-user` header
///
/// Session management itself is a collaborator concern; the client only
/// needs something to attach so the server can distinguish 401.
pub fn current_user() -> Option<String> {
    let storage = leptos::web_sys::window()?.local_storage().ok()??;
    storage
        .get_item("pathboard_user")
        .ok()?
        .filter(|s| !s.is_empty())
}

/// Fetch the roadmap listing
pub async fn fetch_roadmaps() -> Result<Vec<RoadmapSummary>, ApiError> {
    let response = Request::get("/api/roadmaps")
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(status_error(response.status()));
    }

    response
        .json::<Vec<RoadmapSummary>>()
        .await
        .map_err(|e| ApiError::Parse(e.to_string()))
}

/// Fetch one roadmap record by id
pub async fn fetch_roadmap(id: &str) -> Result<RoadmapRecord, ApiError> {
    let response = Request::get(&format!("/api/roadmaps/{}", id))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(status_error(response.status()));
    }

    response
        .json::<RoadmapRecord>()
        .await
        .map_err(|e| ApiError::Parse(e.to_string()))
}

/// Fetch the review list for a roadmap
pub async fn fetch_reviews(id: &str) -> Result<Vec<ReviewEntry>, ApiError> {
    let response = Request::get(&format!("/api/roadmaps/{}/reviews", id))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(status_error(response.status()));
    }

    response
        .json::<Vec<ReviewEntry>>()
        .await
        .map_err(|e| ApiError::Parse(e.to_string()))
}

/// Submit a review; requires an authenticated identity
pub async fn submit_review(
    id: &str,
    submission: &ReviewSubmission,
) -> Result<ReviewEntry, ApiError> {
    let mut request = Request::post(&format!("/api/roadmaps/{}/reviews", id));
    if let Some(user) = current_user() {
        request = request.header("x-user", &user);
    }

    let response = request
        .json(submission)
        .map_err(|e| ApiError::Parse(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(status_error(response.status()));
    }

    response
        .json::<ReviewEntry>()
        .await
        .map_err(|e| ApiError::Parse(e.to_string()))
}

/// Fire-and-forget: count a roadmap download
pub async fn record_download_event(id: &str) {
    let result = Request::post(&format!("/api/roadmaps/{}/download", id))
        .send()
        .await;
    if let Err(e) = result {
        leptos::logging::log!("download event not recorded: {}", e);
    }
}

/// Fire-and-forget: count a roadmap share
pub async fn record_share_event(id: &str) {
    let result = Request::post(&format!("/api/roadmaps/{}/share", id))
        .send()
        .await;
    if let Err(e) = result {
        leptos::logging::log!("share event not recorded: {}", e);
    }
}
