use serde::Serialize;

use wellness_model::{Cluster, Destination};

use crate::weights::AffinityWeights;

pub const DEFAULT_TOP_K: usize = 10;

/// A destination copy carrying its derived score. The source records are
/// never written to; every scoring pass produces fresh copies.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredDestination {
    pub destination: Destination,
    pub weighted_score: f64,
}

/// Score every destination under the cluster's affinity weights, keeping
/// the input order.
pub fn score_destinations(cluster: Cluster, destinations: &[Destination]) -> Vec<ScoredDestination> {
    let weights = AffinityWeights::for_cluster(cluster);
    destinations
        .iter()
        .map(|destination| ScoredDestination {
            weighted_score: weights.apply(&destination.affinity),
            destination: destination.clone(),
        })
        .collect()
}

/// The top `k` destinations by weighted score, descending. The sort is
/// stable: equal scores keep the dataset's natural order. An empty input
/// yields an empty list, not an error.
pub fn top_k(cluster: Cluster, destinations: &[Destination], k: usize) -> Vec<ScoredDestination> {
    let mut scored = score_destinations(cluster, destinations);
    sort_descending(&mut scored);
    scored.truncate(k);
    scored
}

/// Stable descending order on the derived score. `total_cmp` gives a total
/// order, so pathological float inputs cannot poison the sort.
pub(crate) fn sort_descending(items: &mut [ScoredDestination]) {
    items.sort_by(|a, b| b.weighted_score.total_cmp(&a.weighted_score));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::destination;

    #[test]
    fn scores_follow_the_cluster_weights() {
        let destinations = vec![destination("a", 1.0, 0.0, 0.0)];
        let scored = score_destinations(Cluster::General, &destinations);
        assert_eq!(scored[0].weighted_score, 0.4);
        // Source slice untouched.
        assert_eq!(destinations[0].affinity.nature, 1.0);
    }

    #[test]
    fn top_k_sorts_descending_and_truncates() {
        let destinations = vec![
            destination("low", 0.1, 0.1, 0.1),
            destination("high", 0.9, 0.9, 0.9),
            destination("mid", 0.5, 0.5, 0.5),
        ];
        let ranked = top_k(Cluster::Economic, &destinations, 2);
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].destination.content_id, "high");
        assert_eq!(ranked[1].destination.content_id, "mid");
    }

    #[test]
    fn ties_keep_natural_order() {
        let destinations = vec![
            destination("first", 0.5, 0.5, 0.5),
            destination("second", 0.5, 0.5, 0.5),
            destination("third", 0.5, 0.5, 0.5),
        ];
        let ranked = top_k(Cluster::Premium, &destinations, 10);
        let ids: Vec<&str> = ranked
            .iter()
            .map(|scored| scored.destination.content_id.as_str())
            .collect();
        assert_eq!(ids, vec!["first", "second", "third"]);
    }

    #[test]
    fn empty_collection_yields_empty_list() {
        for cluster in Cluster::ALL {
            assert!(top_k(cluster, &[], 10).is_empty());
        }
    }
}
