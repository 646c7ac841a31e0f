use tradewatch_core::{ConfigError, CoreError, RedditApiError};

#[test]
fn test_reddit_api_error_display() {
    let err = CoreError::RedditApi(RedditApiError::RateLimitExceeded { retry_after: 60 });
    assert_eq!(
        err.to_string(),
        "Reddit API error: Rate limit exceeded. Retry after 60 seconds"
    );

    let err = CoreError::RedditApi(RedditApiError::InvalidToken);
    assert!(err.to_string().contains("Invalid OAuth token"));

    let err = CoreError::RedditApi(RedditApiError::ServerError { status_code: 503 });
    assert!(err.to_string().contains("503"));
}

#[test]
fn test_config_error_display() {
    let err = CoreError::Config(ConfigError::MissingField {
        field: "reddit.client_id".to_string(),
    });
    assert!(err.to_string().contains("reddit.client_id"));

    let err = CoreError::Config(ConfigError::InvalidValue {
        field: "sort".to_string(),
        value: "controversial".to_string(),
    });
    assert_eq!(
        err.to_string(),
        "Configuration error: Invalid value for sort: controversial"
    );
}

#[test]
fn test_error_conversions() {
    fn fails_with_api_error() -> Result<(), CoreError> {
        Err(RedditApiError::RequestTimeout)?
    }
    assert!(matches!(
        fails_with_api_error(),
        Err(CoreError::RedditApi(RedditApiError::RequestTimeout))
    ));

    fn fails_with_config_error() -> Result<(), CoreError> {
        Err(ConfigError::FileNotFound {
            path: "tradewatch.toml".to_string(),
        })?
    }
    assert!(matches!(
        fails_with_config_error(),
        Err(CoreError::Config(ConfigError::FileNotFound { .. }))
    ));

    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
    let err: CoreError = io_err.into();
    assert!(matches!(err, CoreError::Io(_)));
}
