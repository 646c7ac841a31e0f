use std::path::Path;
use std::path::PathBuf;

use tradewatch_core::{AppConfig, ConfigError, CoreError, SortMode};

fn full_config() -> &'static str {
    r#"
[reddit]
client_id = "abc123"
client_secret = "shhh"
user_agent = "tradewatch/0.1 by trader"
username = "trader"
password = "hunter2"

[scan]
sort = "top"
input = "sources.csv"
output = "matches.csv"
"#
}

#[test]
fn test_full_config_parses() {
    let config = AppConfig::from_toml(full_config()).unwrap();
    assert_eq!(config.reddit.client_id, "abc123");
    assert_eq!(config.reddit.user_agent, "tradewatch/0.1 by trader");
    assert_eq!(config.scan.sort, SortMode::Top);
    assert_eq!(config.scan.input, PathBuf::from("sources.csv"));
    assert_eq!(config.scan.output, PathBuf::from("matches.csv"));
}

#[test]
fn test_scan_section_is_optional() {
    let config = AppConfig::from_toml(
        r#"
[reddit]
client_id = "abc123"
client_secret = "shhh"
user_agent = "tradewatch/0.1 by trader"
username = "trader"
password = "hunter2"
"#,
    )
    .unwrap();
    assert_eq!(config.scan.sort, SortMode::New);
    assert_eq!(config.scan.input, PathBuf::from("input.csv"));
    assert_eq!(config.scan.output, PathBuf::from("output.csv"));
}

#[test]
fn test_unknown_sort_mode_is_a_parse_error() {
    let result = AppConfig::from_toml(&full_config().replace("\"top\"", "\"controversial\""));
    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[test]
fn test_blank_credential_is_missing_field() {
    let result = AppConfig::from_toml(&full_config().replace("\"shhh\"", "\"  \""));
    assert!(matches!(
        result,
        Err(ConfigError::MissingField { ref field }) if field == "reddit.client_secret"
    ));
}

#[test]
fn test_missing_reddit_table_is_a_parse_error() {
    let result = AppConfig::from_toml("[scan]\nsort = \"new\"\n");
    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[test]
fn test_load_reports_missing_file() {
    let result = AppConfig::load(Path::new("/nonexistent/tradewatch.toml"));
    assert!(matches!(
        result,
        Err(CoreError::Config(ConfigError::FileNotFound { .. }))
    ));
}
