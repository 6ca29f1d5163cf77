use std::path::{Path, PathBuf};

use tracing::info;

use wellness_model::{Destination, NearbySpot};

use crate::csv_table::CsvTable;
use crate::error::Result;
use crate::normalize::{destinations_from_tables, nearby_from_table};

/// Default file names inside a data directory.
pub const DESTINATION_LIST_FILE: &str = "wellness_tourism_list.csv";
pub const CLUSTER_SCORE_FILE: &str = "wellness_cluster_score.csv";
pub const NEARBY_SPOTS_FILE: &str = "wellness_nearby_spots_list.csv";

/// Locations of the tabular data sources.
#[derive(Debug, Clone)]
pub struct DataPaths {
    pub destinations: PathBuf,
    pub cluster_scores: PathBuf,
    pub nearby_spots: Option<PathBuf>,
}

impl DataPaths {
    /// Conventional layout: all files directly inside one directory. The
    /// nearby-spot table is optional.
    pub fn from_dir(dir: &Path) -> Self {
        let nearby = dir.join(NEARBY_SPOTS_FILE);
        Self {
            destinations: dir.join(DESTINATION_LIST_FILE),
            cluster_scores: dir.join(CLUSTER_SCORE_FILE),
            nearby_spots: nearby.exists().then_some(nearby),
        }
    }
}

/// Load, join, and normalize the destination dataset. The sole I/O entry
/// point for destination data; everything it returns is canonical.
pub fn load_destinations(paths: &DataPaths) -> Result<Vec<Destination>> {
    let list = CsvTable::read(&paths.destinations)?;
    let scores = CsvTable::read(&paths.cluster_scores)?;
    let destinations = destinations_from_tables(&list, &scores)?;
    info!(
        count = destinations.len(),
        list = %paths.destinations.display(),
        scores = %paths.cluster_scores.display(),
        "loaded destinations"
    );
    Ok(destinations)
}

/// Load the nearby-attraction table, preserving file order.
pub fn load_nearby_spots(path: &Path) -> Result<Vec<NearbySpot>> {
    let table = CsvTable::read(path)?;
    let spots = nearby_from_table(&table)?;
    info!(count = spots.len(), path = %path.display(), "loaded nearby spots");
    Ok(spots)
}
