use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use super::StubState;
use crate::models::*;

async fn delay(state: &StubState) {
    if !state.latency.is_zero() {
        tokio::time::sleep(state.latency).await;
    }
}

fn not_found(what: &str, id: i64) -> (StatusCode, String) {
    tracing::warn!("{} {} not found", what, id);
    (StatusCode::NOT_FOUND, format!("{} {} not found", what, id))
}

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

pub async fn list_posts(State(state): State<Arc<StubState>>) -> Json<Vec<Post>> {
    delay(&state).await;
    Json(state.fixture.posts.clone())
}

pub async fn get_author(
    State(state): State<Arc<StubState>>,
    Path(id): Path<i64>,
) -> Result<Json<Author>, (StatusCode, String)> {
    delay(&state).await;
    state
        .fixture
        .author(id)
        .cloned()
        .map(Json)
        .ok_or_else(|| not_found("author", id))
}

pub async fn list_comments(
    State(state): State<Arc<StubState>>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<Comment>>, (StatusCode, String)> {
    delay(&state).await;
    state
        .fixture
        .comments_for(id)
        .map(Json)
        .ok_or_else(|| not_found("post", id))
}
