use serde::{Deserialize, Serialize};

use crate::cluster::Cluster;

/// Normalized affinity of a destination along the three latent wellness
/// dimensions. Values live in [0, 1]; the ingest adapter substitutes
/// [`Affinity::DEFAULT_SCORE`] wherever the source data has no value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Affinity {
    pub nature: f64,
    pub culture: f64,
    pub healing: f64,
}

impl Affinity {
    pub const DEFAULT_SCORE: f64 = 0.5;

    pub fn new(nature: f64, culture: f64, healing: f64) -> Self {
        Self {
            nature,
            culture,
            healing,
        }
    }
}

impl Default for Affinity {
    fn default() -> Self {
        Self {
            nature: Self::DEFAULT_SCORE,
            culture: Self::DEFAULT_SCORE,
            healing: Self::DEFAULT_SCORE,
        }
    }
}

/// Canonical destination record, produced once by the ingest adapter from
/// the two source tables. Read-only after load: scoring and filtering
/// operate on copies and never write back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Destination {
    /// Join key shared by the source tables.
    pub content_id: String,
    pub title: String,
    pub latitude: f64,
    pub longitude: f64,
    pub address: String,
    pub description: String,
    /// Wellness theme code, e.g. `A0202`.
    pub theme: String,
    /// Administrative region code; 0 when unknown.
    pub region: u32,
    pub affinity: Affinity,
    /// Precomputed per-cluster rank scores where the source provides them.
    pub cluster_scores: [Option<f64>; Cluster::COUNT],
}

impl Destination {
    pub fn cluster_score(&self, cluster: Cluster) -> Option<f64> {
        self.cluster_scores[cluster.index()]
    }
}

/// One row of the nearby-attraction table: a spot in the vicinity of a
/// wellness destination. Source file order is the priority order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NearbySpot {
    /// Content id of the wellness destination this spot belongs to.
    pub wellness_content_id: String,
    pub content_id: String,
    pub title: String,
    pub categories: [String; 3],
}
