mod api;
mod auth;

pub use api::{
    RedditApiClient, RedditListing, RedditListingChild, RedditListingData, RedditPostData,
};
pub use auth::RedditToken;

use tracing::info;

use tradewatch_core::{CoreError, Post, RedditApiError, RedditCredentials, SortMode};

/// Authenticated Reddit API client for a script-type app.
///
/// Call [`RedditClient::authenticate`] once before fetching; the client
/// holds the resulting token for the lifetime of the run.
pub struct RedditClient {
    credentials: RedditCredentials,
    api: RedditApiClient,
    token: Option<RedditToken>,
}

impl RedditClient {
    pub fn new(credentials: RedditCredentials) -> Result<Self, CoreError> {
        let api = RedditApiClient::new(credentials.user_agent.clone())?;
        Ok(Self {
            credentials,
            api,
            token: None,
        })
    }

    /// Exchange the script app's username and password for an access token.
    pub async fn authenticate(&mut self) -> Result<(), CoreError> {
        let token = auth::exchange_password_grant(&self.credentials).await?;
        info!(
            "Authenticated with Reddit as u/{}",
            self.credentials.username
        );
        self.token = Some(token);
        Ok(())
    }

    pub fn is_authenticated(&self) -> bool {
        self.token
            .as_ref()
            .map(|token| !token.is_expired())
            .unwrap_or(false)
    }

    pub fn set_token(&mut self, token: RedditToken) {
        self.token = Some(token);
    }

    fn access_token(&self) -> Result<&str, CoreError> {
        match &self.token {
            Some(token) if token.is_expired() => {
                Err(CoreError::RedditApi(RedditApiError::InvalidToken))
            }
            Some(token) => Ok(&token.access_token),
            None => Err(CoreError::RedditApi(RedditApiError::AuthenticationFailed {
                reason: "Not authenticated. Call authenticate() first".to_string(),
            })),
        }
    }

    /// Fetch up to `limit` posts from a subreddit listing, following the
    /// pagination cursor across pages as needed.
    pub async fn fetch_posts(
        &self,
        subreddit: &str,
        sort: SortMode,
        limit: u32,
    ) -> Result<Vec<Post>, CoreError> {
        let access_token = self.access_token()?;

        let mut posts = Vec::new();
        let mut after: Option<String> = None;
        while (posts.len() as u32) < limit {
            let remaining = limit - posts.len() as u32;
            let listing = self
                .api
                .get_subreddit_posts(access_token, subreddit, sort, remaining, after.as_deref())
                .await?;

            let RedditListingData {
                children,
                after: next,
                ..
            } = listing.data;
            if children.is_empty() {
                break;
            }
            for child in children {
                if (posts.len() as u32) >= limit {
                    break;
                }
                posts.push(Post::from(child.data));
            }
            match next {
                Some(cursor) => after = Some(cursor),
                None => break,
            }
        }

        info!("Fetched {} posts from r/{}/{}", posts.len(), subreddit, sort);
        Ok(posts)
    }
}
