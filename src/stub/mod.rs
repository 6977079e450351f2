//! Stub feed server for local development.
//!
//! Serves a [`FeedFixture`] under `/api/slow`, optionally delaying every
//! response to make concurrency visible.

mod fixture;
mod handlers;

pub use fixture::FeedFixture;

use std::sync::Arc;
use std::time::Duration;

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

/// Path prefix the stub serves the feed under.
pub const BASE_PATH: &str = "/api/slow";

/// Shared, read-only server state.
#[derive(Debug)]
pub struct StubState {
    pub fixture: FeedFixture,
    /// Added to every feed response.
    pub latency: Duration,
}

pub fn create_router(fixture: FeedFixture, latency: Duration) -> Router {
    let state = Arc::new(StubState { fixture, latency });

    let api = Router::new()
        .route("/posts", get(handlers::list_posts))
        .route("/posts/{id}/comments", get(handlers::list_comments))
        .route("/authors/{id}", get(handlers::get_author))
        .route("/health", get(handlers::health));

    Router::new()
        .nest(BASE_PATH, api)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
