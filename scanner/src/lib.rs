pub mod csv;
pub mod filter;
pub mod input;
pub mod source;
pub mod table;

pub use filter::*;
pub use input::*;
pub use source::*;
pub use table::*;

use tracing::info;

use tradewatch_core::{CoreError, SortMode, SourceSpec};

/// Scan each source in order and concatenate its match rows into one
/// table. A fetch failure on any source aborts the whole run; rows
/// accumulated from earlier sources are discarded with it.
pub async fn scan_sources<S: PostSource>(
    source: &S,
    specs: &[SourceSpec],
    sort: SortMode,
) -> Result<MatchTable, CoreError> {
    let mut table = MatchTable::new();
    for spec in specs {
        info!(
            "Scanning r/{}/{} for {} terms (limit {})",
            spec.subreddit,
            sort,
            spec.terms.len(),
            spec.post_limit
        );
        let rows = search_source(source, spec, sort).await?;
        table.extend(rows);
    }
    Ok(table)
}
