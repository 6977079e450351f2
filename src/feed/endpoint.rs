use std::fmt;

/// A read-only endpoint of the feed service, relative to the base URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// `posts`
    Posts,
    /// `authors/{id}`
    Author(i64),
    /// `posts/{id}/comments`
    Comments(i64),
}

impl Endpoint {
    pub fn path(&self) -> String {
        match self {
            Self::Posts => "posts".to_string(),
            Self::Author(id) => format!("authors/{}", id),
            Self::Comments(post_id) => format!("posts/{}/comments", post_id),
        }
    }

    /// Full URL for this endpoint under `base_url`.
    pub fn url(&self, base_url: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), self.path())
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        assert_eq!(Endpoint::Posts.path(), "posts");
        assert_eq!(Endpoint::Author(10).path(), "authors/10");
        assert_eq!(Endpoint::Comments(2).path(), "posts/2/comments");
    }

    #[test]
    fn test_url_normalizes_trailing_slash() {
        let with_slash = Endpoint::Author(7).url("http://localhost:9999/api/slow/");
        let without = Endpoint::Author(7).url("http://localhost:9999/api/slow");
        assert_eq!(with_slash, "http://localhost:9999/api/slow/authors/7");
        assert_eq!(with_slash, without);
    }
}
