//! Fetch a feed of posts and join every post with its author and comments.
//!
//! The entry point is [`assemble::fetch_feed`], which lists posts through a
//! [`feed::FeedSource`] and then runs [`assemble::assemble`] over them.

pub mod assemble;
pub mod config;
pub mod feed;
pub mod models;
pub mod render;
pub mod stub;
