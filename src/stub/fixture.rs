use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::models::*;

/// The data set served by the stub server.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FeedFixture {
    #[serde(default)]
    pub posts: Vec<Post>,
    #[serde(default)]
    pub authors: Vec<Author>,
    /// Comments of all posts; each is served under its `post_id`.
    #[serde(default)]
    pub comments: Vec<Comment>,
}

impl FeedFixture {
    /// Load a fixture from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading fixture {}", path.display()))?;
        serde_json::from_str(&raw).with_context(|| format!("parsing fixture {}", path.display()))
    }

    pub fn author(&self, id: i64) -> Option<&Author> {
        self.authors.iter().find(|a| a.id == id)
    }

    /// Comments of a post in fixture order, or `None` if the post is unknown.
    pub fn comments_for(&self, post_id: i64) -> Option<Vec<Comment>> {
        if !self.posts.iter().any(|p| p.id == post_id) {
            return None;
        }
        Some(
            self.comments
                .iter()
                .filter(|c| c.post_id == post_id)
                .cloned()
                .collect(),
        )
    }

    /// A small built-in data set.
    pub fn sample() -> Self {
        let authors = vec![
            Author {
                id: 1,
                name: "Netology".to_string(),
                avatar: "netology.jpg".to_string(),
            },
            Author {
                id: 2,
                name: "Sber".to_string(),
                avatar: "sber.jpg".to_string(),
            },
        ];

        let posts = vec![
            Post {
                id: 1,
                author_id: 1,
                content: "Welcome to the feed!".to_string(),
                published: 1_642_410_000,
                liked_by_me: false,
                likes: 12,
                attachment: None,
            },
            Post {
                id: 2,
                author_id: 2,
                content: "Our new office is open.".to_string(),
                published: 1_642_496_400,
                liked_by_me: true,
                likes: 3,
                attachment: Some(Attachment {
                    url: "office.jpg".to_string(),
                    description: "The new office".to_string(),
                    kind: AttachmentType::Image,
                }),
            },
            Post {
                id: 3,
                author_id: 1,
                content: "Nothing to discuss here.".to_string(),
                published: 1_642_582_800,
                liked_by_me: false,
                likes: 0,
                attachment: None,
            },
        ];

        let comments = vec![
            Comment {
                id: 1,
                post_id: 1,
                author_id: 2,
                content: "Glad to be here".to_string(),
                published: 1_642_413_600,
                liked_by_me: false,
                likes: 1,
            },
            Comment {
                id: 2,
                post_id: 1,
                author_id: 1,
                content: "Thanks!".to_string(),
                published: 1_642_417_200,
                liked_by_me: true,
                likes: 0,
            },
            Comment {
                id: 3,
                post_id: 2,
                author_id: 1,
                content: "Congratulations".to_string(),
                published: 1_642_500_000,
                liked_by_me: false,
                likes: 5,
            },
        ];

        Self {
            posts,
            authors,
            comments,
        }
    }
}
