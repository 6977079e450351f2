//! Access to the remote feed service.
//!
//! [`FeedSource`] is the seam the orchestration layer is written against.
//! [`FeedClient`] implements it over HTTP; tests substitute in-memory sources.

mod client;
pub mod decode;
mod endpoint;

pub use client::{FeedClient, FetchError};
pub use endpoint::Endpoint;

use async_trait::async_trait;

use crate::models::{Author, Comment, Post};

/// Source of posts, authors and comments.
///
/// Every call resolves exactly once, with either the decoded value or a
/// [`FetchError`]. Implementations are shared across concurrently running
/// tasks and must not require external locking.
#[async_trait]
pub trait FeedSource: Send + Sync + 'static {
    /// List all posts, in server order.
    async fn posts(&self) -> Result<Vec<Post>, FetchError>;

    /// Look up a single author by id.
    async fn author(&self, author_id: i64) -> Result<Author, FetchError>;

    /// List the comments of a post, in server order.
    async fn comments(&self, post_id: i64) -> Result<Vec<Comment>, FetchError>;
}
