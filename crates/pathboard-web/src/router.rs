//! Web router using Axum
//!
//! Serves the roadmap content API consumed by the frontend. Review
//! submission requires an identity header so unauthenticated calls fail
//! with a distinguishable 401.

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::Html;
use axum::routing::{get, post};
use axum::{Json, Router};
use pathboard_core::{CoreError, RoadmapStore};
use pathboard_types::{ReviewEntry, ReviewSubmission, RoadmapRecord, RoadmapSummary};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::debug;

/// Create the web router
pub fn create_router(store: Arc<RoadmapStore>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(index_handler))
        .route("/api/health", get(health_handler))
        .route("/api/roadmaps", get(list_handler))
        .route("/api/roadmaps/{id}", get(roadmap_handler))
        .route(
            "/api/roadmaps/{id}/reviews",
            get(reviews_handler).post(submit_review_handler),
        )
        .route("/api/roadmaps/{id}/download", post(download_handler))
        .route("/api/roadmaps/{id}/share", post(share_handler))
        .layer(cors)
        .with_state(store)
}

async fn index_handler() -> Html<String> {
    Html(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>pathboard - Learning Roadmap Viewer</title>
</head>
<body>
    <h1>pathboard API</h1>
    <p>The API is running. Build the frontend with <code>trunk build --release</code>
       and serve it against this server, or query the API directly:</p>
    <ul>
        <li><a href="/api/health">/api/health</a></li>
        <li><a href="/api/roadmaps">/api/roadmaps</a></li>
    </ul>
</body>
</html>"#
            .to_string(),
    )
}

async fn health_handler() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn list_handler(State(store): State<Arc<RoadmapStore>>) -> Json<Vec<RoadmapSummary>> {
    Json(store.list())
}

async fn roadmap_handler(
    State(store): State<Arc<RoadmapStore>>,
    Path(id): Path<String>,
) -> Result<Json<RoadmapRecord>, (StatusCode, String)> {
    store
        .get(&id)
        .map(Json)
        .ok_or_else(|| (StatusCode::NOT_FOUND, format!("roadmap not found: {id}")))
}

async fn reviews_handler(
    State(store): State<Arc<RoadmapStore>>,
    Path(id): Path<String>,
) -> Json<Vec<ReviewEntry>> {
    Json(store.reviews(&id))
}

async fn submit_review_handler(
    State(store): State<Arc<RoadmapStore>>,
    Path(id): Path<String>,
    headers: HeaderMap,
    Json(submission): Json<ReviewSubmission>,
) -> Result<(StatusCode, Json<ReviewEntry>), (StatusCode, String)> {
    // Session management is the auth collaborator's concern; the identity
    // header is all this endpoint needs to distinguish 401
    let username = headers
        .get("x-user")
        .and_then(|v| v.to_str().ok())
        .filter(|s| !s.is_empty())
        .ok_or_else(|| (StatusCode::UNAUTHORIZED, "login required".to_string()))?;

    match store.add_review(&id, username, submission) {
        Ok(entry) => Ok((StatusCode::CREATED, Json(entry))),
        Err(err @ CoreError::InvalidRating { .. }) => {
            Err((StatusCode::UNPROCESSABLE_ENTITY, err.to_string()))
        }
        Err(err @ CoreError::RoadmapNotFound { .. }) => {
            Err((StatusCode::NOT_FOUND, err.to_string()))
        }
        Err(err) => Err((StatusCode::INTERNAL_SERVER_ERROR, err.to_string())),
    }
}

async fn download_handler(
    State(store): State<Arc<RoadmapStore>>,
    Path(id): Path<String>,
) -> StatusCode {
    debug!(roadmap_id = %id, "download event");
    store.record_download(&id);
    StatusCode::NO_CONTENT
}

async fn share_handler(
    State(store): State<Arc<RoadmapStore>>,
    Path(id): Path<String>,
) -> StatusCode {
    debug!(roadmap_id = %id, "share event");
    store.record_share(&id);
    StatusCode::NO_CONTENT
}
