use serde::{Deserialize, Serialize};

/// A comment on a post, served by `posts/{id}/comments`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: i64,
    pub post_id: i64,
    pub author_id: i64,
    pub content: String,
    /// Publish time as Unix seconds.
    pub published: i64,
    #[serde(default)]
    pub liked_by_me: bool,
    #[serde(default)]
    pub likes: i32,
}
