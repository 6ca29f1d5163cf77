//! Property tests for weighted scoring and ranking.

use proptest::prelude::*;

use wellness_model::{Affinity, Cluster, Destination};
use wellness_recommend::{score_destinations, top_k};

fn destination(id: usize, affinity: Affinity) -> Destination {
    Destination {
        content_id: id.to_string(),
        title: format!("Destination {id}"),
        latitude: 37.0,
        longitude: 127.0,
        address: String::new(),
        description: String::new(),
        theme: "A0202".to_string(),
        region: 1,
        affinity,
        cluster_scores: [None; Cluster::COUNT],
    }
}

fn affinities() -> impl Strategy<Value = Affinity> {
    (0.0..=1.0f64, 0.0..=1.0f64, 0.0..=1.0f64)
        .prop_map(|(nature, culture, healing)| Affinity::new(nature, culture, healing))
}

fn clusters() -> impl Strategy<Value = Cluster> {
    prop_oneof![
        Just(Cluster::Economic),
        Just(Cluster::General),
        Just(Cluster::Premium),
    ]
}

proptest! {
    #[test]
    fn raising_healing_never_lowers_the_score(
        cluster in clusters(),
        affinity in affinities(),
        bump in 0.0..=1.0f64,
    ) {
        let healing = (affinity.healing + bump).min(1.0);
        let raised = Affinity { healing, ..affinity };
        let base = score_destinations(cluster, &[destination(0, affinity)]);
        let bumped = score_destinations(cluster, &[destination(0, raised)]);
        prop_assert!(bumped[0].weighted_score >= base[0].weighted_score);
    }

    #[test]
    fn top_k_is_bounded_and_descending(
        cluster in clusters(),
        affinities in prop::collection::vec(affinities(), 0..40),
        k in 0usize..20,
    ) {
        let destinations: Vec<Destination> = affinities
            .into_iter()
            .enumerate()
            .map(|(id, affinity)| destination(id, affinity))
            .collect();
        let ranked = top_k(cluster, &destinations, k);
        prop_assert!(ranked.len() <= k);
        for pair in ranked.windows(2) {
            prop_assert!(pair[0].weighted_score >= pair[1].weighted_score);
        }
    }

    #[test]
    fn equal_scores_preserve_input_order(
        cluster in clusters(),
        count in 1usize..30,
    ) {
        let affinity = Affinity::new(0.4, 0.4, 0.4);
        let destinations: Vec<Destination> =
            (0..count).map(|id| destination(id, affinity)).collect();
        let ranked = top_k(cluster, &destinations, count);
        let ids: Vec<usize> = ranked
            .iter()
            .map(|scored| scored.destination.content_id.parse().unwrap())
            .collect();
        let expected: Vec<usize> = (0..count).collect();
        prop_assert_eq!(ids, expected);
    }
}
