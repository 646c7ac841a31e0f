use std::fs;
use std::path::Path;

use tradewatch_core::{CoreError, MatchRow, OUTPUT_COLUMNS};

use crate::csv;

/// Ordered accumulation of match rows across all scanned sources.
#[derive(Debug, Default)]
pub struct MatchTable {
    rows: Vec<MatchRow>,
}

impl MatchTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[MatchRow] {
        &self.rows
    }

    /// Append a batch of rows, preserving their order after existing rows.
    pub fn extend(&mut self, rows: Vec<MatchRow>) {
        self.rows.extend(rows);
    }

    /// Serialize the table with its fixed header row.
    pub fn to_csv(&self) -> String {
        let mut buf: Vec<u8> = Vec::new();
        let _ = csv::write_row(&mut buf, &OUTPUT_COLUMNS, ',');
        for row in &self.rows {
            let _ = csv::write_row(&mut buf, &row.columns(), ',');
        }

        match String::from_utf8(buf) {
            Ok(s) => s,
            Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
        }
    }

    /// Write the table to `path`, replacing any existing file.
    pub fn write_csv(&self, path: &Path) -> Result<(), CoreError> {
        fs::write(path, self.to_csv())?;
        Ok(())
    }
}
