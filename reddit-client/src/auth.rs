use std::time::{Duration, SystemTime};

use oauth2::basic::BasicClient;
use oauth2::reqwest::async_http_client;
use oauth2::{
    AuthType, AuthUrl, ClientId, ClientSecret, RequestTokenError, ResourceOwnerPassword,
    ResourceOwnerUsername, Scope, TokenResponse, TokenUrl,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use tradewatch_core::{CoreError, RedditApiError, RedditCredentials};

const AUTH_URL: &str = "https://www.reddit.com/api/v1/authorize";
const TOKEN_URL: &str = "https://www.reddit.com/api/v1/access_token";

// Password grants expire without a refresh token; a fresh exchange replaces
// an expired token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedditToken {
    pub access_token: String,
    pub expires_at: SystemTime,
    pub scope: Vec<String>,
}

impl RedditToken {
    pub fn is_expired(&self) -> bool {
        SystemTime::now() >= self.expires_at
    }
}

/// Exchange script-app credentials for an access token using the OAuth2
/// resource-owner password grant, the flow Reddit prescribes for
/// single-account script apps.
pub(crate) async fn exchange_password_grant(
    credentials: &RedditCredentials,
) -> Result<RedditToken, CoreError> {
    let auth_url = AuthUrl::new(AUTH_URL.to_string()).map_err(|e| {
        RedditApiError::AuthenticationFailed {
            reason: e.to_string(),
        }
    })?;
    let token_url = TokenUrl::new(TOKEN_URL.to_string()).map_err(|e| {
        RedditApiError::AuthenticationFailed {
            reason: e.to_string(),
        }
    })?;

    // Reddit expects the app id/secret as HTTP basic auth on the token
    // endpoint, not as form fields.
    let oauth = BasicClient::new(
        ClientId::new(credentials.client_id.clone()),
        Some(ClientSecret::new(credentials.client_secret.clone())),
        auth_url,
        Some(token_url),
    )
    .set_auth_type(AuthType::BasicAuth);

    debug!(
        "Requesting password-grant token for u/{}",
        credentials.username
    );

    let user_agent = credentials.user_agent.clone();
    let response = oauth
        .exchange_password(
            &ResourceOwnerUsername::new(credentials.username.clone()),
            &ResourceOwnerPassword::new(credentials.password.clone()),
        )
        .add_scope(Scope::new("read".to_string()))
        .request_async(move |request| send_token_request(request, user_agent))
        .await
        .map_err(|e| match e {
            RequestTokenError::ServerResponse(response) => RedditApiError::AuthenticationFailed {
                reason: response.to_string(),
            },
            other => RedditApiError::AuthenticationFailed {
                reason: other.to_string(),
            },
        })?;

    let expires_in = response.expires_in().unwrap_or(Duration::from_secs(3600));
    let scope = response
        .scopes()
        .map(|scopes| scopes.iter().map(|s| s.to_string()).collect())
        .unwrap_or_default();

    Ok(RedditToken {
        access_token: response.access_token().secret().clone(),
        expires_at: SystemTime::now() + expires_in,
        scope,
    })
}

// Reddit throttles token requests that lack a descriptive User-Agent, and
// the stock oauth2 sender does not set one.
async fn send_token_request(
    mut request: oauth2::HttpRequest,
    user_agent: String,
) -> Result<oauth2::HttpResponse, oauth2::reqwest::Error<reqwest::Error>> {
    let value = oauth2::http::HeaderValue::from_str(&user_agent)
        .map_err(|e| oauth2::reqwest::Error::Other(format!("invalid user agent: {e}")))?;
    request
        .headers
        .insert(oauth2::http::header::USER_AGENT, value);
    async_http_client(request).await
}
