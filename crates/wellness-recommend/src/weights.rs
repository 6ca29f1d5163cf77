use serde::Serialize;

use wellness_model::{Affinity, Cluster};

/// Per-cluster coefficients over the three affinity dimensions. Static
/// configuration, one row per archetype; each row sums to 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AffinityWeights {
    pub nature: f64,
    pub culture: f64,
    pub healing: f64,
}

static WEIGHTS: [AffinityWeights; Cluster::COUNT] = [
    // Economic: long-stay visitors weight healing highest.
    AffinityWeights {
        nature: 0.3,
        culture: 0.2,
        healing: 0.5,
    },
    // General: balanced between nature and culture.
    AffinityWeights {
        nature: 0.4,
        culture: 0.4,
        healing: 0.2,
    },
    // Premium: short, consumption-driven trips lean on culture.
    AffinityWeights {
        nature: 0.2,
        culture: 0.5,
        healing: 0.3,
    },
];

impl AffinityWeights {
    pub fn for_cluster(cluster: Cluster) -> AffinityWeights {
        WEIGHTS[cluster.index()]
    }

    /// Linear combination of a destination's affinities under these weights.
    pub fn apply(&self, affinity: &Affinity) -> f64 {
        affinity.nature * self.nature + affinity.culture * self.culture
            + affinity.healing * self.healing
    }
}
