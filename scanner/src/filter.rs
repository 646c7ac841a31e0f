use tracing::debug;

use tradewatch_core::{to_lower, CoreError, MatchRow, Post, SortMode, SourceSpec};

use crate::source::PostSource;

/// Produce one row per (post, term) pair where the term appears in the
/// post's lowercased title or body. Terms are expected lowercase already.
pub fn match_posts(posts: &[Post], spec: &SourceSpec) -> Vec<MatchRow> {
    let mut rows = Vec::new();
    for post in posts {
        let title = to_lower(Some(&post.title));
        let body = to_lower(post.body.as_deref());
        let flair = to_lower(post.flair.as_deref());
        for term in &spec.terms {
            if title.contains(term.as_str()) || body.contains(term.as_str()) {
                rows.push(MatchRow {
                    title: title.clone(),
                    url: post.url.clone(),
                    body: body.clone(),
                    flair: flair.clone(),
                    term: term.clone(),
                    subreddit: spec.subreddit.clone(),
                });
            }
        }
    }
    rows
}

/// Drop rows whose flair is not in the allow-list. An empty allow-list
/// means no flair filtering.
pub fn retain_flairs(rows: &mut Vec<MatchRow>, flairs: &[String]) {
    if flairs.is_empty() {
        return;
    }
    rows.retain(|row| flairs.contains(&row.flair));
}

/// Fetch one source and return its term-matched, flair-filtered rows.
pub async fn search_source<S: PostSource>(
    source: &S,
    spec: &SourceSpec,
    sort: SortMode,
) -> Result<Vec<MatchRow>, CoreError> {
    let posts = source
        .list_posts(&spec.subreddit, sort, spec.post_limit)
        .await?;
    let mut rows = match_posts(&posts, spec);
    retain_flairs(&mut rows, &spec.flairs);
    debug!(
        "r/{}: {} match rows from {} posts",
        spec.subreddit,
        rows.len(),
        posts.len()
    );
    Ok(rows)
}
