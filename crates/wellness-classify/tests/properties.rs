//! Property tests for the classifier over the full valid answer space.

use proptest::prelude::*;

use wellness_classify::{classify, compute_scores};
use wellness_model::{AnswerSet, Cluster, QuestionId};

fn valid_answer_sets() -> impl Strategy<Value = AnswerSet> {
    (
        0..4usize,
        0..4usize,
        0..4usize,
        0..4usize,
        0..4usize,
        0..4usize,
        0..3usize,
    )
        .prop_map(|(q1, q2, q3, q4, q5, q6, q7)| {
            QuestionId::ALL
                .into_iter()
                .zip([q1, q2, q3, q4, q5, q6, q7])
                .collect()
        })
}

proptest! {
    #[test]
    fn classification_is_always_well_formed(answers in valid_answer_sets()) {
        let result = classify(&answers).unwrap();
        prop_assert!(result.cluster.id() < Cluster::COUNT as u8);
        prop_assert!((0.0..=1.0).contains(&result.confidence));
    }

    #[test]
    fn confidence_is_winner_over_total(answers in valid_answer_sets()) {
        let result = classify(&answers).unwrap();
        let total = result.scores.total();
        if total == 0 {
            prop_assert_eq!(result.confidence, 0.0);
        } else {
            let expected = f64::from(result.scores[result.cluster]) / f64::from(total);
            prop_assert_eq!(result.confidence, expected);
        }
    }

    #[test]
    fn strict_maximum_always_wins(answers in valid_answer_sets()) {
        let scores = compute_scores(&answers);
        let leaders = scores.leaders();
        if let [single] = leaders.as_slice() {
            let result = classify(&answers).unwrap();
            prop_assert_eq!(result.cluster, *single);
        }
    }

    #[test]
    fn winner_is_always_a_tied_leader(answers in valid_answer_sets()) {
        let result = classify(&answers).unwrap();
        let leaders = compute_scores(&answers).leaders();
        prop_assert!(leaders.contains(&result.cluster));
    }
}
