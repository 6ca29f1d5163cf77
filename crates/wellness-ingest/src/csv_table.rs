use std::path::{Path, PathBuf};

use csv::ReaderBuilder;

use crate::error::Result;

/// A raw CSV file in memory: normalized headers plus trimmed string cells.
/// This is the input shape for the schema-normalization adapter; nothing
/// downstream of that adapter sees raw tables.
#[derive(Debug, Clone)]
pub struct CsvTable {
    pub path: PathBuf,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl CsvTable {
    pub fn read(path: &Path) -> Result<Self> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(path)?;
        let headers: Vec<String> = reader.headers()?.iter().map(normalize_header).collect();
        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            rows.push(record.iter().map(normalize_cell).collect());
        }
        Ok(Self {
            path: path.to_path_buf(),
            headers,
            rows,
        })
    }

    /// Index of the first header matching any alias, case-insensitive.
    pub fn column(&self, aliases: &[&str]) -> Option<usize> {
        self.headers.iter().position(|header| {
            aliases
                .iter()
                .any(|alias| header.eq_ignore_ascii_case(alias))
        })
    }

    /// Cell content for a resolved column in one row; short rows read as
    /// empty (the reader is flexible about ragged data).
    pub fn cell<'a>(&self, row: &'a [String], column: Option<usize>) -> &'a str {
        column
            .and_then(|index| row.get(index))
            .map(String::as_str)
            .unwrap_or("")
    }
}

fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}
