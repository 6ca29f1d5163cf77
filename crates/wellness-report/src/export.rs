//! CSV export of a ranked recommendation list.
//!
//! The body is a plain CSV table (rank, title, theme, theme_name, score,
//! address, description). User and cluster metadata ride along as a
//! `# key: value` comment preamble so the body stays machine-readable; the
//! matching reader skips the preamble.

use std::io::{Read, Write};

use anyhow::{Context, Result};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use wellness_model::{Classification, Cluster, theme_name};
use wellness_recommend::ScoredDestination;

/// Descriptions longer than this are cut at a character boundary and
/// suffixed with `...` in the export projection.
const DESCRIPTION_LIMIT: usize = 100;

/// Who and what produced the ranked list.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportMetadata {
    pub user: Option<String>,
    pub cluster: Cluster,
    pub confidence: f64,
    pub generated_at: Option<DateTime<Utc>>,
}

impl ExportMetadata {
    pub fn from_classification(user: Option<String>, classification: &Classification) -> Self {
        Self {
            user,
            cluster: classification.cluster,
            confidence: classification.confidence,
            generated_at: Some(Utc::now()),
        }
    }
}

/// One row of the flattened projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportRow {
    pub rank: usize,
    pub title: String,
    pub theme: String,
    pub theme_name: String,
    pub score: f64,
    pub address: String,
    pub description: String,
}

impl ExportRow {
    fn from_scored(rank: usize, scored: &ScoredDestination) -> Self {
        let destination = &scored.destination;
        Self {
            rank,
            title: destination.title.clone(),
            theme: destination.theme.clone(),
            theme_name: theme_name(&destination.theme)
                .unwrap_or(destination.theme.as_str())
                .to_string(),
            score: scored.weighted_score,
            address: destination.address.clone(),
            description: truncate_description(&destination.description),
        }
    }
}

/// Write the metadata preamble and the ranked rows.
pub fn write_export<W: Write>(
    mut writer: W,
    metadata: &ExportMetadata,
    items: &[ScoredDestination],
) -> Result<()> {
    if let Some(user) = &metadata.user {
        writeln!(writer, "# user: {user}").context("write export preamble")?;
    }
    writeln!(writer, "# cluster: {}", metadata.cluster.id()).context("write export preamble")?;
    writeln!(writer, "# cluster_name: {}", metadata.cluster.profile().name)
        .context("write export preamble")?;
    writeln!(writer, "# confidence: {:.4}", metadata.confidence)
        .context("write export preamble")?;
    if let Some(at) = metadata.generated_at {
        writeln!(
            writer,
            "# generated_at: {}",
            at.to_rfc3339_opts(SecondsFormat::Secs, true)
        )
        .context("write export preamble")?;
    }

    let mut csv_writer = csv::Writer::from_writer(writer);
    for (index, scored) in items.iter().enumerate() {
        csv_writer
            .serialize(ExportRow::from_scored(index + 1, scored))
            .context("write export row")?;
    }
    csv_writer.flush().context("flush export")?;
    Ok(())
}

/// Convenience wrapper returning the export as a string.
pub fn export_to_string(metadata: &ExportMetadata, items: &[ScoredDestination]) -> Result<String> {
    let mut buffer = Vec::new();
    write_export(&mut buffer, metadata, items)?;
    String::from_utf8(buffer).context("export is not valid utf-8")
}

/// Read back the rows of an export, skipping the metadata preamble.
pub fn read_export<R: Read>(reader: R) -> Result<Vec<ExportRow>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .comment(Some(b'#'))
        .from_reader(reader);
    let mut rows = Vec::new();
    for row in csv_reader.deserialize() {
        rows.push(row.context("read export row")?);
    }
    Ok(rows)
}

/// Default download file name, timestamped to the second.
pub fn export_file_name(user: Option<&str>, at: DateTime<Utc>) -> String {
    format!(
        "wellness_recommendations_{}_{}.csv",
        user.unwrap_or("user"),
        at.format("%Y%m%d_%H%M%S")
    )
}

fn truncate_description(description: &str) -> String {
    if description.chars().count() <= DESCRIPTION_LIMIT {
        return description.to_string();
    }
    let mut truncated: String = description.chars().take(DESCRIPTION_LIMIT).collect();
    truncated.push_str("...");
    truncated
}
