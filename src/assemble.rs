//! Concurrent fetch-and-join of posts with their authors and comments.
//!
//! [`assemble`] fans out one task per post; each task runs [`join_post`],
//! which fetches the author and the comments of its post concurrently. The
//! output keeps input order and is all-or-nothing: the first failure fails
//! the whole batch.

use std::sync::Arc;

use tokio::task::JoinSet;

use crate::feed::{FeedSource, FetchError};
use crate::models::{CompositeRecord, Post};

/// Fetch the author and comments of `post` and combine them.
///
/// Both requests are in flight at the same time. If either fails, that error
/// is returned and the other request is dropped.
pub async fn join_post<S>(source: &S, post: Post) -> Result<CompositeRecord, FetchError>
where
    S: FeedSource + ?Sized,
{
    let (author, comments) =
        tokio::try_join!(source.author(post.author_id), source.comments(post.id))?;

    Ok(CompositeRecord {
        post,
        author,
        comments,
    })
}

/// Join every post with its author and comments, preserving input order.
///
/// One task is spawned per post, all at once. Results are placed by the
/// index of their post, not by completion order. On the first failure the
/// remaining tasks are aborted and drained; their results are discarded.
pub async fn assemble<S>(
    source: Arc<S>,
    posts: Vec<Post>,
) -> Result<Vec<CompositeRecord>, FetchError>
where
    S: FeedSource + ?Sized,
{
    let total = posts.len();
    if total == 0 {
        return Ok(Vec::new());
    }
    tracing::info!(posts = total, "assembling feed");

    let mut tasks = JoinSet::new();
    for (index, post) in posts.into_iter().enumerate() {
        let source = Arc::clone(&source);
        tasks.spawn(async move { (index, join_post(source.as_ref(), post).await) });
    }

    let mut slots: Vec<Option<CompositeRecord>> = vec![None; total];
    let mut failure: Option<FetchError> = None;

    while let Some(joined) = tasks.join_next().await {
        if failure.is_some() {
            // Batch already failed; drain without looking.
            continue;
        }
        let error = match joined {
            Ok((index, Ok(record))) => {
                slots[index] = Some(record);
                continue;
            }
            Ok((index, Err(e))) => {
                tracing::warn!(index, error = %e, "post assembly failed");
                e
            }
            Err(e) => {
                tracing::warn!(error = %e, "assembly task did not complete");
                FetchError::TaskFailed(e.to_string())
            }
        };
        failure = Some(error);
        tasks.abort_all();
    }

    if let Some(error) = failure {
        return Err(error);
    }

    let records = slots
        .into_iter()
        .collect::<Option<Vec<CompositeRecord>>>()
        .ok_or_else(|| FetchError::TaskFailed("assembly ended with an empty slot".to_string()))?;

    tracing::info!(records = records.len(), "feed assembled");
    Ok(records)
}

/// List all posts and assemble them.
///
/// Issues `2N + 1` requests for `N` posts when everything succeeds.
pub async fn fetch_feed<S>(source: Arc<S>) -> Result<Vec<CompositeRecord>, FetchError>
where
    S: FeedSource + ?Sized,
{
    let posts = source.posts().await?;
    tracing::debug!(posts = posts.len(), "posts listed");
    assemble(source, posts).await
}
