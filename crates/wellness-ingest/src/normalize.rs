//! The schema-normalization adapter.
//!
//! Source files come from several export generations and disagree on column
//! naming. All of that tolerance lives here, executed once at load time;
//! everything downstream sees the canonical [`Destination`] shape and can
//! assume clean input.

use std::collections::BTreeMap;

use tracing::{debug, warn};

use wellness_model::{Affinity, Cluster, DEFAULT_THEME_CODE, Destination, NearbySpot};

use crate::csv_table::CsvTable;
use crate::error::{IngestError, Result};

pub const CONTENT_ID_ALIASES: &[&str] = &["contentId", "content_id"];
const TITLE_ALIASES: &[&str] = &["title", "title_x", "name"];
const LONGITUDE_ALIASES: &[&str] = &["mapX", "longitude"];
const LATITUDE_ALIASES: &[&str] = &["mapY", "latitude"];
const ADDRESS_ALIASES: &[&str] = &["addr1", "address"];
const DESCRIPTION_ALIASES: &[&str] = &["overview", "description"];
const THEME_ALIASES: &[&str] = &["wellnessThemaCd", "wellness_theme"];
const REGION_ALIASES: &[&str] = &["lDongRegnCd", "region_code"];

const NATURE_ALIASES: &[&str] = &["nature", "natureScore"];
const CULTURE_ALIASES: &[&str] = &["culture", "cultureScore"];
const HEALING_ALIASES: &[&str] = &["healing", "healingScore"];

const CLUSTER_SCORE_COLUMNS: [&str; Cluster::COUNT] =
    ["score_cluster_0", "score_cluster_1", "score_cluster_2"];

const WELLNESS_ID_ALIASES: &[&str] = &["wellness_contentId", "wellness_content_id"];
const NEARBY_ID_ALIASES: &[&str] = &["nearby_contentid", "nearby_content_id"];
const NEARBY_TITLE_ALIASES: &[&str] = &["nearby_title", "title"];
const NEARBY_CATEGORY_ALIASES: [&[&str]; 3] = [
    &["nearby_category1"],
    &["nearby_category2"],
    &["nearby_category3"],
];

/// Inner-join the destination list with the cluster score table on the
/// content id and produce canonical records. Rows without a join partner
/// are dropped; the output keeps the list file's row order, which is the
/// natural order later used to break ranking ties.
pub fn destinations_from_tables(list: &CsvTable, scores: &CsvTable) -> Result<Vec<Destination>> {
    let list_id = list
        .column(CONTENT_ID_ALIASES)
        .ok_or_else(|| IngestError::MissingJoinKey {
            path: list.path.clone(),
            expected: CONTENT_ID_ALIASES,
        })?;
    let scores_id = scores
        .column(CONTENT_ID_ALIASES)
        .ok_or_else(|| IngestError::MissingJoinKey {
            path: scores.path.clone(),
            expected: CONTENT_ID_ALIASES,
        })?;
    let title = list
        .column(TITLE_ALIASES)
        .ok_or_else(|| IngestError::MissingColumn {
            path: list.path.clone(),
            expected: TITLE_ALIASES,
        })?;

    let longitude = list.column(LONGITUDE_ALIASES);
    let latitude = list.column(LATITUDE_ALIASES);
    let address = list.column(ADDRESS_ALIASES);
    let description = list.column(DESCRIPTION_ALIASES);
    let theme = list.column(THEME_ALIASES);
    let region = list.column(REGION_ALIASES);

    let affinities = [
        ("nature", scores.column(NATURE_ALIASES)),
        ("culture", scores.column(CULTURE_ALIASES)),
        ("healing", scores.column(HEALING_ALIASES)),
    ];
    for (name, column) in affinities {
        if column.is_none() {
            warn!(
                column = name,
                path = %scores.path.display(),
                default = Affinity::DEFAULT_SCORE,
                "affinity column missing, defaulting"
            );
        }
    }
    let cluster_score_columns: [Option<usize>; Cluster::COUNT] =
        CLUSTER_SCORE_COLUMNS.map(|name| scores.column(&[name]));

    // First score row per content id wins, matching the join semantics of
    // the original export pipeline.
    let mut score_rows: BTreeMap<&str, &Vec<String>> = BTreeMap::new();
    for row in &scores.rows {
        let id = scores.cell(row, Some(scores_id));
        if id.is_empty() {
            continue;
        }
        score_rows.entry(id).or_insert(row);
    }

    let mut destinations = Vec::new();
    let mut dropped = 0usize;
    for row in &list.rows {
        let content_id = list.cell(row, Some(list_id));
        if content_id.is_empty() {
            dropped += 1;
            continue;
        }
        let Some(&score_row) = score_rows.get(content_id) else {
            dropped += 1;
            continue;
        };

        let affinity = Affinity::new(
            affinity_value(scores, score_row, affinities[0].1),
            affinity_value(scores, score_row, affinities[1].1),
            affinity_value(scores, score_row, affinities[2].1),
        );
        let cluster_scores =
            cluster_score_columns.map(|column| parse_f64(scores.cell(score_row, column)));

        destinations.push(Destination {
            content_id: content_id.to_string(),
            title: list.cell(row, Some(title)).to_string(),
            latitude: coordinate(list.cell(row, latitude)),
            longitude: coordinate(list.cell(row, longitude)),
            address: list.cell(row, address).to_string(),
            description: list.cell(row, description).to_string(),
            theme: theme_code(list.cell(row, theme)),
            region: region_code(list.cell(row, region)),
            affinity,
            cluster_scores,
        });
    }
    if dropped > 0 {
        debug!(dropped, "destination rows without a join partner");
    }
    Ok(destinations)
}

/// Normalize the nearby-attraction table. Row order is preserved: the file
/// is already sorted by priority.
pub fn nearby_from_table(table: &CsvTable) -> Result<Vec<NearbySpot>> {
    let wellness_id =
        table
            .column(WELLNESS_ID_ALIASES)
            .ok_or_else(|| IngestError::MissingJoinKey {
                path: table.path.clone(),
                expected: WELLNESS_ID_ALIASES,
            })?;
    let nearby_id = table
        .column(NEARBY_ID_ALIASES)
        .ok_or_else(|| IngestError::MissingColumn {
            path: table.path.clone(),
            expected: NEARBY_ID_ALIASES,
        })?;
    let title = table.column(NEARBY_TITLE_ALIASES);
    let categories = NEARBY_CATEGORY_ALIASES.map(|aliases| table.column(aliases));

    let mut spots = Vec::new();
    for row in &table.rows {
        let owner = table.cell(row, Some(wellness_id));
        if owner.is_empty() {
            continue;
        }
        spots.push(NearbySpot {
            wellness_content_id: owner.to_string(),
            content_id: table.cell(row, Some(nearby_id)).to_string(),
            title: table.cell(row, title).to_string(),
            categories: categories.map(|column| table.cell(row, column).to_string()),
        });
    }
    Ok(spots)
}

fn affinity_value(table: &CsvTable, row: &[String], column: Option<usize>) -> f64 {
    parse_f64(table.cell(row, column))
        .map(|value| value.clamp(0.0, 1.0))
        .unwrap_or(Affinity::DEFAULT_SCORE)
}

fn parse_f64(cell: &str) -> Option<f64> {
    if cell.is_empty() {
        return None;
    }
    cell.parse::<f64>().ok()
}

fn coordinate(cell: &str) -> f64 {
    parse_f64(cell).unwrap_or(0.0)
}

fn theme_code(cell: &str) -> String {
    if cell.is_empty() {
        DEFAULT_THEME_CODE.to_string()
    } else {
        cell.to_string()
    }
}

/// Region codes arrive as integers, floats (`"31.0"`), or garbage; 0 means
/// unknown.
fn region_code(cell: &str) -> u32 {
    if let Ok(code) = cell.parse::<u32>() {
        return code;
    }
    match cell.parse::<f64>() {
        Ok(value) if value >= 0.0 => value as u32,
        _ => 0,
    }
}
