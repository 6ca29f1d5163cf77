use std::collections::BTreeMap;

use serde::Serialize;

use wellness_model::{Affinity, Destination};

/// Aggregate statistics over the loaded destination dataset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatasetSummary {
    pub total_destinations: usize,
    pub theme_counts: BTreeMap<String, usize>,
    pub region_counts: BTreeMap<u32, usize>,
    pub mean_affinity: Affinity,
}

pub fn summarize(destinations: &[Destination]) -> DatasetSummary {
    let mut theme_counts = BTreeMap::new();
    let mut region_counts = BTreeMap::new();
    let mut sums = (0.0f64, 0.0f64, 0.0f64);
    for destination in destinations {
        *theme_counts
            .entry(destination.theme.clone())
            .or_insert(0usize) += 1;
        *region_counts.entry(destination.region).or_insert(0usize) += 1;
        sums.0 += destination.affinity.nature;
        sums.1 += destination.affinity.culture;
        sums.2 += destination.affinity.healing;
    }
    let count = destinations.len();
    let mean = |sum: f64| if count == 0 { 0.0 } else { sum / count as f64 };
    DatasetSummary {
        total_destinations: count,
        theme_counts,
        region_counts,
        mean_affinity: Affinity::new(mean(sums.0), mean(sums.1), mean(sums.2)),
    }
}
