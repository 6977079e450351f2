use serde::{Deserialize, Serialize};

/// The author of a post, served by `authors/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Avatar URL or file name, passed through as served.
    pub avatar: String,
}
