use std::ops::Index;

use serde::{Deserialize, Serialize};

use crate::cluster::{Cluster, ClusterProfile};

/// Accumulated integer score per cluster for one answer set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScoreVector([u32; Cluster::COUNT]);

impl ScoreVector {
    pub fn zero() -> Self {
        Self::default()
    }

    pub fn from_scores(scores: [u32; Cluster::COUNT]) -> Self {
        Self(scores)
    }

    pub fn add(&mut self, cluster: Cluster, weight: u32) {
        self.0[cluster.index()] += weight;
    }

    pub fn get(&self, cluster: Cluster) -> u32 {
        self.0[cluster.index()]
    }

    pub fn total(&self) -> u32 {
        self.0.iter().sum()
    }

    pub fn max(&self) -> u32 {
        self.0.iter().copied().max().unwrap_or(0)
    }

    /// Clusters attaining the maximum score, ascending id order. This order
    /// is the documented fallback when tie-breaking is inconclusive.
    pub fn leaders(&self) -> Vec<Cluster> {
        let max = self.max();
        Cluster::ALL
            .into_iter()
            .filter(|cluster| self.get(*cluster) == max)
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Cluster, u32)> + '_ {
        Cluster::ALL.into_iter().map(|cluster| (cluster, self.get(cluster)))
    }
}

impl Index<Cluster> for ScoreVector {
    type Output = u32;

    fn index(&self, cluster: Cluster) -> &u32 {
        &self.0[cluster.index()]
    }
}

/// Outcome of classifying a complete answer set. The full score vector is
/// retained for display and debugging.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub cluster: Cluster,
    /// Winning score over total score; 0.0 when every score is zero.
    pub confidence: f64,
    pub scores: ScoreVector,
}

impl Classification {
    pub fn profile(&self) -> &'static ClusterProfile {
        self.cluster.profile()
    }

    pub fn winning_score(&self) -> u32 {
        self.scores[self.cluster]
    }
}
