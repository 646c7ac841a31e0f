use reddit_client::RedditClient;
use tradewatch_core::{CoreError, Post, SortMode};

/// Anything able to list posts for a subreddit under a sort mode, bounded
/// to `limit` results. The live Reddit client implements this; tests
/// substitute canned sources.
#[async_trait::async_trait]
pub trait PostSource {
    async fn list_posts(
        &self,
        subreddit: &str,
        sort: SortMode,
        limit: u32,
    ) -> Result<Vec<Post>, CoreError>;
}

#[async_trait::async_trait]
impl PostSource for RedditClient {
    async fn list_posts(
        &self,
        subreddit: &str,
        sort: SortMode,
        limit: u32,
    ) -> Result<Vec<Post>, CoreError> {
        self.fetch_posts(subreddit, sort, limit).await
    }
}
