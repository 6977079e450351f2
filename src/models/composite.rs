use serde::{Deserialize, Serialize};

use super::{Author, Comment, Post};

/// A post together with its author and its comments.
///
/// There is no separate identity: the record is identified by `post.id`.
/// Comments keep the order the server returned them in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostWithCommentsAndAuthor {
    pub post: Post,
    pub author: Author,
    pub comments: Vec<Comment>,
}

impl PostWithCommentsAndAuthor {
    pub fn id(&self) -> i64 {
        self.post.id
    }
}

/// Shorter name used by the orchestration layer.
pub type CompositeRecord = PostWithCommentsAndAuthor;
