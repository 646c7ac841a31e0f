use tradewatch_core::{split_list, ConfigError, CoreError, SourceSpec};

use crate::csv;

pub const SOURCE_COL: &str = "source";
pub const ITEMS_COL: &str = "items";
pub const FLAIRS_COL: &str = "flairs";
pub const LIMIT_COL: &str = "post_limit";

/// Parse the scan table: a header row naming `source`, `items`, `flairs`
/// and `post_limit` (any column order), then one row per subreddit. The
/// `items` and `flairs` cells hold comma-joined lists; empty cells mean no
/// terms and no flair filtering respectively.
pub fn parse_source_specs(text: &str) -> Result<Vec<SourceSpec>, CoreError> {
    let rows = csv::parse_rows(text, ',');
    let Some((header, data_rows)) = rows.split_first() else {
        return Err(ConfigError::InvalidFormat {
            details: "scan table is empty".to_string(),
        }
        .into());
    };

    let source_idx = column_index(header, SOURCE_COL)?;
    let items_idx = column_index(header, ITEMS_COL)?;
    let flairs_idx = column_index(header, FLAIRS_COL)?;
    let limit_idx = column_index(header, LIMIT_COL)?;

    let mut specs = Vec::with_capacity(data_rows.len());
    for (i, row) in data_rows.iter().enumerate() {
        // Header occupies line 1.
        let line = i + 2;

        let subreddit =
            non_empty(cell(row, source_idx)).ok_or_else(|| ConfigError::InvalidFormat {
                details: format!("line {}: missing source", line),
            })?;
        let terms = split_list(non_empty(cell(row, items_idx)), ',');
        let flairs = split_list(non_empty(cell(row, flairs_idx)), ',');

        let limit_cell =
            non_empty(cell(row, limit_idx)).ok_or_else(|| ConfigError::InvalidFormat {
                details: format!("line {}: missing post_limit", line),
            })?;
        let post_limit = parse_post_limit(limit_cell)?;

        specs.push(SourceSpec {
            subreddit: subreddit.to_string(),
            terms,
            flairs,
            post_limit,
        });
    }

    Ok(specs)
}

fn column_index(header: &[String], name: &str) -> Result<usize, ConfigError> {
    header
        .iter()
        .position(|cell| cell.trim().eq_ignore_ascii_case(name))
        .ok_or_else(|| ConfigError::InvalidFormat {
            details: format!("missing required column: {}", name),
        })
}

fn cell(row: &[String], idx: usize) -> Option<&str> {
    row.get(idx).map(String::as_str)
}

fn non_empty(cell: Option<&str>) -> Option<&str> {
    cell.filter(|value| !value.is_empty())
}

fn parse_post_limit(value: &str) -> Result<u32, ConfigError> {
    let parsed = value
        .trim()
        .parse::<u32>()
        .map_err(|_| ConfigError::InvalidValue {
            field: LIMIT_COL.to_string(),
            value: value.to_string(),
        })?;
    if parsed == 0 {
        return Err(ConfigError::InvalidValue {
            field: LIMIT_COL.to_string(),
            value: value.to_string(),
        });
    }
    Ok(parsed)
}
