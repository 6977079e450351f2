//! HTTP client for the feed service.
//!
//! One [`FeedClient`] is built at startup from a [`FeedConfig`] and shared by
//! every concurrent fetch. The underlying `reqwest::Client` is reference
//! counted, so cloning the client is cheap and all clones share one pool.

use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;

use super::decode::{decode_author, decode_comments, decode_posts};
use super::{Endpoint, FeedSource};
use crate::config::FeedConfig;
use crate::models::{Author, Comment, Post};

/// Failure of a single fetch.
///
/// The variants are kept apart for diagnostics only; callers treat them all
/// the same way.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {endpoint} failed: {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{endpoint} returned {status}: {body}")]
    Status {
        endpoint: String,
        status: u16,
        body: String,
    },

    #[error("{endpoint} returned an empty body")]
    EmptyResponse { endpoint: String },

    #[error("could not decode response from {endpoint}: {source}")]
    Decode {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("fetch task failed: {0}")]
    TaskFailed(String),
}

impl FetchError {
    /// Path of the endpoint that failed, if the failure came from a request.
    pub fn endpoint(&self) -> Option<&str> {
        match self {
            Self::Transport { endpoint, .. }
            | Self::Status { endpoint, .. }
            | Self::EmptyResponse { endpoint }
            | Self::Decode { endpoint, .. } => Some(endpoint),
            Self::TaskFailed(_) => None,
        }
    }
}

/// HTTP implementation of [`FeedSource`].
#[derive(Debug, Clone)]
pub struct FeedClient {
    base_url: String,
    client: Client,
}

impl FeedClient {
    /// Build the shared client. Timeouts from `config` apply to every request.
    pub fn new(config: &FeedConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.request_timeout)
            .build()?;
        Ok(Self::with_client(config.base_url.clone(), client))
    }

    /// Wrap an already configured `reqwest::Client`.
    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        Self {
            base_url: base_url.into(),
            client,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET `endpoint` and return the raw body of a successful response.
    async fn get(&self, endpoint: Endpoint) -> Result<Vec<u8>, FetchError> {
        let url = endpoint.url(&self.base_url);
        let transport = |source| FetchError::Transport {
            endpoint: endpoint.path(),
            source,
        };

        tracing::debug!(%endpoint, "GET {}", url);
        let response = self.client.get(&url).send().await.map_err(transport)?;
        let status = response.status();
        let body = response.bytes().await.map_err(transport)?;
        tracing::debug!(%endpoint, status = status.as_u16(), bytes = body.len(), "response received");
        tracing::trace!(%endpoint, body = %String::from_utf8_lossy(&body));

        if !status.is_success() {
            return Err(FetchError::Status {
                endpoint: endpoint.path(),
                status: status.as_u16(),
                body: String::from_utf8_lossy(&body).into_owned(),
            });
        }
        Ok(body.to_vec())
    }
}

#[async_trait]
impl FeedSource for FeedClient {
    async fn posts(&self) -> Result<Vec<Post>, FetchError> {
        let body = self.get(Endpoint::Posts).await?;
        decode_posts(&body)
    }

    async fn author(&self, author_id: i64) -> Result<Author, FetchError> {
        let body = self.get(Endpoint::Author(author_id)).await?;
        decode_author(author_id, &body)
    }

    async fn comments(&self, post_id: i64) -> Result<Vec<Comment>, FetchError> {
        let body = self.get(Endpoint::Comments(post_id)).await?;
        decode_comments(post_id, &body)
    }
}
