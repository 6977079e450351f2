use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A post as served by the `posts` endpoint.
///
/// Posts are immutable once decoded. The `author_id` is resolved separately
/// through the `authors/{id}` endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: i64,
    pub author_id: i64,
    pub content: String,
    /// Publish time as Unix seconds.
    pub published: i64,
    #[serde(default)]
    pub liked_by_me: bool,
    #[serde(default)]
    pub likes: i32,
    #[serde(default)]
    pub attachment: Option<Attachment>,
}

impl Post {
    /// Publish time as a UTC timestamp, if it is representable.
    pub fn published_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.published, 0)
    }
}

/// Media attached to a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    pub url: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: AttachmentType,
}

/// The kind of media an [`Attachment`] points at.
///
/// Only images exist today; new kinds are added as variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum AttachmentType {
    Image,
}

impl AttachmentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Image => "image",
        }
    }
}
