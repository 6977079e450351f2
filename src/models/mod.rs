//! Domain models for the feed.
//!
//! # Fetched Entities
//!
//! Decoded straight from the feed service and read-only afterwards:
//!
//! - [`Post`]: A published post, optionally carrying one [`Attachment`].
//! - [`Author`]: The user who wrote a post.
//! - [`Comment`]: A reply attached to a post.
//!
//! ## Composite
//!
//! - [`PostWithCommentsAndAuthor`]: A post joined with its author and comments.
//!   Only ever built once all three parts have been fetched successfully.

mod author;
mod comment;
mod composite;
mod post;

pub use author::*;
pub use comment::*;
pub use composite::*;
pub use post::*;
