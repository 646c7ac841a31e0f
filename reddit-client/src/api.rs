use std::time::Duration;

use reqwest::{Client, Method, Response};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use tradewatch_core::{CoreError, Post, RedditApiError, SortMode};

const REDDIT_API_BASE: &str = "https://oauth.reddit.com";

/// Reddit serves at most 100 entries per listing page no matter what
/// `limit` is requested; larger fetches follow the `after` cursor.
pub(crate) const MAX_PAGE_SIZE: u32 = 100;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedditListing<T> {
    pub kind: String,
    pub data: RedditListingData<T>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedditListingData<T> {
    pub children: Vec<RedditListingChild<T>>,
    pub after: Option<String>,
    pub before: Option<String>,
    pub dist: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedditListingChild<T> {
    pub kind: String,
    pub data: T,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedditPostData {
    pub id: String,
    pub title: String,
    pub selftext: String,
    pub author: String,
    pub subreddit: String,
    pub url: String,
    pub permalink: String,
    pub link_flair_text: Option<String>,
    pub created_utc: f64,
    pub score: i32,
    pub stickied: bool,
    pub is_self: bool,
}

#[derive(Debug)]
pub struct RedditApiClient {
    http_client: Client,
    user_agent: String,
}

impl RedditApiClient {
    pub fn new(user_agent: String) -> Result<Self, CoreError> {
        let http_client = Client::builder()
            .user_agent(&user_agent)
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            http_client,
            user_agent,
        })
    }

    async fn make_request(
        &self,
        method: Method,
        endpoint: &str,
        access_token: &str,
        query_params: &[(&str, &str)],
    ) -> Result<Response, CoreError> {
        let url = format!("{}{}", REDDIT_API_BASE, endpoint);

        let mut request_builder = self
            .http_client
            .request(method.clone(), &url)
            .bearer_auth(access_token)
            .header("User-Agent", &self.user_agent);
        if !query_params.is_empty() {
            request_builder = request_builder.query(query_params);
        }

        debug!("Making Reddit API request: {} {}", method, endpoint);
        let response = match request_builder.send().await {
            Ok(response) => response,
            Err(e) => {
                error!("Network error for {} {}: {}", method, endpoint, e);
                if e.is_timeout() {
                    return Err(CoreError::RedditApi(RedditApiError::RequestTimeout));
                }
                return Err(CoreError::Network(e));
            }
        };

        let status = response.status();
        if status.is_success() {
            debug!("Request successful: {} {}", status, endpoint);
            return Ok(response);
        }

        error!("Request failed with status: {} for {}", status, endpoint);
        let api_error = match status.as_u16() {
            429 => {
                let retry_after = response
                    .headers()
                    .get("retry-after")
                    .and_then(|value| value.to_str().ok())
                    .and_then(|value| value.parse::<u64>().ok())
                    .unwrap_or(60);
                RedditApiError::RateLimitExceeded { retry_after }
            }
            401 => RedditApiError::InvalidToken,
            403 => RedditApiError::Forbidden {
                resource: endpoint.to_string(),
            },
            404 => RedditApiError::InvalidResponse {
                details: format!("resource not found: {}", endpoint),
            },
            code if status.is_server_error() => RedditApiError::ServerError { status_code: code },
            _ => RedditApiError::InvalidResponse {
                details: format!("unexpected status {} for {}", status, endpoint),
            },
        };
        Err(CoreError::RedditApi(api_error))
    }

    /// Fetch a single listing page of up to `limit` posts. `after` is the
    /// pagination cursor returned by the previous page, if any.
    pub async fn get_subreddit_posts(
        &self,
        access_token: &str,
        subreddit: &str,
        sort: SortMode,
        limit: u32,
        after: Option<&str>,
    ) -> Result<RedditListing<RedditPostData>, CoreError> {
        let endpoint = listing_endpoint(subreddit, sort);
        let limit_str = limit.min(MAX_PAGE_SIZE).to_string();
        // raw_json=1 stops Reddit HTML-escaping titles and selftext.
        let mut params: Vec<(&str, &str)> = vec![("limit", limit_str.as_str()), ("raw_json", "1")];
        if let Some(after_val) = after {
            params.push(("after", after_val));
        }

        let response = self
            .make_request(Method::GET, &endpoint, access_token, &params)
            .await?;

        let listing: RedditListing<RedditPostData> = response.json().await.map_err(|e| {
            error!("Failed to parse subreddit posts: {}", e);
            CoreError::RedditApi(RedditApiError::InvalidResponse {
                details: format!("failed to parse posts for r/{}", subreddit),
            })
        })?;

        debug!(
            "Fetched page of {} posts from r/{}/{}",
            listing.data.children.len(),
            subreddit,
            sort
        );
        Ok(listing)
    }
}

pub(crate) fn listing_endpoint(subreddit: &str, sort: SortMode) -> String {
    format!("/r/{}/{}", subreddit, sort.as_str())
}

impl From<RedditPostData> for Post {
    fn from(post_data: RedditPostData) -> Self {
        Self {
            id: post_data.id,
            title: post_data.title,
            body: if post_data.is_self && !post_data.selftext.is_empty() {
                Some(post_data.selftext)
            } else {
                None
            },
            subreddit: post_data.subreddit,
            url: post_data.url,
            flair: post_data.link_flair_text,
            created_utc: post_data.created_utc as i64,
        }
    }
}
