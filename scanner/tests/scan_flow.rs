use std::collections::HashMap;
use std::fs;

use scanner::{parse_source_specs, scan_sources, PostSource};
use tradewatch_core::{CoreError, Post, RedditApiError, SortMode};

struct StubSource {
    by_subreddit: HashMap<String, Vec<Post>>,
}

#[async_trait::async_trait]
impl PostSource for StubSource {
    async fn list_posts(
        &self,
        subreddit: &str,
        _sort: SortMode,
        limit: u32,
    ) -> Result<Vec<Post>, CoreError> {
        match self.by_subreddit.get(subreddit) {
            Some(posts) => Ok(posts.iter().take(limit as usize).cloned().collect()),
            None => Err(CoreError::RedditApi(RedditApiError::Forbidden {
                resource: format!("/r/{}/new", subreddit),
            })),
        }
    }
}

fn post(title: &str, body: Option<&str>, flair: Option<&str>, url: &str) -> Post {
    Post {
        id: "abc123".to_string(),
        title: title.to_string(),
        body: body.map(str::to_string),
        subreddit: "ignored".to_string(),
        url: url.to_string(),
        flair: flair.map(str::to_string),
        created_utc: 0,
    }
}

fn stub_with_two_sources() -> StubSource {
    let mut by_subreddit = HashMap::new();
    by_subreddit.insert(
        "boardgamesales".to_string(),
        vec![
            post(
                "Selling Catan and Wingspan",
                None,
                Some("For Sale"),
                "https://reddit.com/bgs/1",
            ),
            post(
                "Wingspan auction",
                None,
                Some("Auction"),
                "https://reddit.com/bgs/2",
            ),
        ],
    );
    by_subreddit.insert(
        "boardgames".to_string(),
        vec![post(
            "Catan strategy",
            Some("settlement placement"),
            None,
            "https://reddit.com/bg/3",
        )],
    );
    StubSource { by_subreddit }
}

#[tokio::test]
async fn scan_concatenates_sources_in_row_order() {
    let input = "source,items,flairs,post_limit\n\
                 boardgamesales,\"catan,wingspan\",for sale,10\n\
                 boardgames,catan,,10\n";
    let specs = parse_source_specs(input).unwrap();
    let source = stub_with_two_sources();

    let table = scan_sources(&source, &specs, SortMode::New).await.unwrap();

    let rows = table.rows();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].subreddit, "boardgamesales");
    assert_eq!(rows[0].term, "catan");
    assert_eq!(rows[1].subreddit, "boardgamesales");
    assert_eq!(rows[1].term, "wingspan");
    assert_eq!(rows[2].subreddit, "boardgames");
    assert_eq!(rows[2].term, "catan");
}

#[tokio::test]
async fn same_post_in_two_sources_is_not_deduplicated() {
    let shared = post("Selling Catan", None, None, "https://reddit.com/x/1");
    let mut by_subreddit = HashMap::new();
    by_subreddit.insert("first".to_string(), vec![shared.clone()]);
    by_subreddit.insert("second".to_string(), vec![shared]);
    let source = StubSource { by_subreddit };

    let specs =
        parse_source_specs("source,items,flairs,post_limit\nfirst,catan,,10\nsecond,catan,,10\n")
            .unwrap();
    let table = scan_sources(&source, &specs, SortMode::New).await.unwrap();

    assert_eq!(table.len(), 2);
    assert_eq!(table.rows()[0].subreddit, "first");
    assert_eq!(table.rows()[1].subreddit, "second");
}

#[tokio::test]
async fn failing_source_aborts_scan() {
    let input = "source,items,flairs,post_limit\n\
                 boardgamesales,catan,,10\n\
                 privatesub,catan,,10\n";
    let specs = parse_source_specs(input).unwrap();
    let source = stub_with_two_sources();

    let result = scan_sources(&source, &specs, SortMode::New).await;
    assert!(matches!(
        result,
        Err(CoreError::RedditApi(RedditApiError::Forbidden { .. }))
    ));
}

#[tokio::test]
async fn scan_writes_expected_csv() {
    let input = "source,items,flairs,post_limit\n\
                 boardgamesales,\"catan,wingspan\",for sale,10\n\
                 boardgames,catan,,10\n";
    let specs = parse_source_specs(input).unwrap();
    let source = stub_with_two_sources();

    let table = scan_sources(&source, &specs, SortMode::New).await.unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("output.csv");
    table.write_csv(&path).unwrap();

    let written = fs::read_to_string(&path).unwrap();
    let expected = "title,url,body,link_flair_text,match,sub\n\
        selling catan and wingspan,https://reddit.com/bgs/1,none,for sale,catan,boardgamesales\n\
        selling catan and wingspan,https://reddit.com/bgs/1,none,for sale,wingspan,boardgamesales\n\
        catan strategy,https://reddit.com/bg/3,settlement placement,none,catan,boardgames\n";
    assert_eq!(written, expected);
}
