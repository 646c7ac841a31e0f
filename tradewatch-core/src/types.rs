use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::ConfigError;

/// Read-only projection of a forum post. Fields the API leaves null stay
/// absent here; normalization to the `"none"` fallback happens at match
/// time, not at fetch time.
#[derive(Debug, Clone)]
pub struct Post {
    pub id: String,
    pub title: String,
    pub body: Option<String>,
    pub subreddit: String,
    pub url: String,
    pub flair: Option<String>,
    pub created_utc: i64,
}

/// One retained (post, search term) pair. A post matching two terms
/// produces two rows. Text fields are already lowercased.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRow {
    pub title: String,
    pub url: String,
    pub body: String,
    pub flair: String,
    pub term: String,
    pub subreddit: String,
}

/// Output column names, in order. `MatchRow::columns` pairs with these.
pub const OUTPUT_COLUMNS: [&str; 6] = ["title", "url", "body", "link_flair_text", "match", "sub"];

impl MatchRow {
    pub fn columns(&self) -> [&str; 6] {
        [
            &self.title,
            &self.url,
            &self.body,
            &self.flair,
            &self.term,
            &self.subreddit,
        ]
    }
}

/// One input-table row: a subreddit to scan plus its search terms, flair
/// allow-list, and fetch cap. Term and flair lists are lowercase; an empty
/// flair list means no flair filtering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceSpec {
    pub subreddit: String,
    pub terms: Vec<String>,
    pub flairs: Vec<String>,
    pub post_limit: u32,
}

/// Listing order requested from Reddit. Closed set; anything else is
/// rejected at parse time rather than silently fetching nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
    #[default]
    New,
    Hot,
    Top,
}

impl SortMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortMode::New => "new",
            SortMode::Hot => "hot",
            SortMode::Top => "top",
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "new" => Ok(SortMode::New),
            "hot" => Ok(SortMode::Hot),
            "top" => Ok(SortMode::Top),
            other => Err(ConfigError::InvalidValue {
                field: "sort".to_string(),
                value: other.to_string(),
            }),
        }
    }
}
