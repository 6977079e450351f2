//! Typed decoding of response bodies, one function per endpoint shape.
//!
//! A body that is empty (or only whitespace) is reported as
//! [`FetchError::EmptyResponse`], never as an empty value. `[]` is a valid
//! empty list.

use serde::de::DeserializeOwned;

use super::{Endpoint, FetchError};
use crate::models::{Author, Comment, Post};

/// Decode the body of [`Endpoint::Posts`].
pub fn decode_posts(body: &[u8]) -> Result<Vec<Post>, FetchError> {
    parse(Endpoint::Posts, body)
}

/// Decode the body of [`Endpoint::Author`].
pub fn decode_author(author_id: i64, body: &[u8]) -> Result<Author, FetchError> {
    parse(Endpoint::Author(author_id), body)
}

/// Decode the body of [`Endpoint::Comments`].
pub fn decode_comments(post_id: i64, body: &[u8]) -> Result<Vec<Comment>, FetchError> {
    parse(Endpoint::Comments(post_id), body)
}

fn parse<T: DeserializeOwned>(endpoint: Endpoint, body: &[u8]) -> Result<T, FetchError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(FetchError::EmptyResponse {
            endpoint: endpoint.path(),
        });
    }
    serde_json::from_slice(body).map_err(|source| FetchError::Decode {
        endpoint: endpoint.path(),
        source,
    })
}
