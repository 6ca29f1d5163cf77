//! Survey scoring and archetype classification.
//!
//! Two entry points with deliberately different contracts:
//!
//! - [`compute_scores`] is the defensive accumulator: questions absent from
//!   the answer set (or carrying an out-of-range option) contribute nothing.
//! - [`classify`] is the user-facing gate: it validates the answer set up
//!   front and rejects anything incomplete or out of range before scoring.

mod error;

use tracing::debug;

use wellness_model::{AnswerSet, Classification, Cluster, QuestionId, ScoreVector, question};

pub use error::ClassifyError;

/// Accumulate per-cluster weights for every answered question.
///
/// Unanswered questions contribute zero; so do option indices with no weight
/// row. Callers wanting strict validation go through [`classify`].
pub fn compute_scores(answers: &AnswerSet) -> ScoreVector {
    let mut scores = ScoreVector::zero();
    for (id, option) in answers.iter() {
        let Some(row) = question(id).weight_row(option) else {
            continue;
        };
        for cluster in Cluster::ALL {
            scores.add(cluster, row[cluster.index()]);
        }
    }
    scores
}

/// Classify a complete answer set into a traveler archetype.
///
/// The winner is the cluster with the maximum accumulated score. Ties are
/// resolved by the stay-duration answer (Q1), then the spend-level answer
/// (Q2); an override only wins when its cluster is among the tied leaders.
/// If both discriminators are inconclusive the lowest tied cluster id wins.
pub fn classify(answers: &AnswerSet) -> Result<Classification, ClassifyError> {
    let missing = answers.missing();
    if !missing.is_empty() {
        return Err(ClassifyError::IncompleteAnswers { missing });
    }
    for (id, option) in answers.iter() {
        let question = question(id);
        if question.weight_row(option).is_none() {
            return Err(ClassifyError::OptionOutOfRange {
                question: id,
                index: option,
                options: question.options.len(),
            });
        }
    }

    let scores = compute_scores(answers);
    let leaders = scores.leaders();
    let cluster = resolve_winner(answers, &leaders);
    let total = scores.total();
    let confidence = if total == 0 {
        0.0
    } else {
        f64::from(scores[cluster]) / f64::from(total)
    };
    debug!(
        cluster = %cluster,
        confidence,
        tied = leaders.len(),
        "classified answer set"
    );
    Ok(Classification {
        cluster,
        confidence,
        scores,
    })
}

fn resolve_winner(answers: &AnswerSet, leaders: &[Cluster]) -> Cluster {
    if let [single] = leaders {
        return *single;
    }
    if let Some(preferred) = stay_duration_override(answers)
        && leaders.contains(&preferred)
    {
        return preferred;
    }
    if let Some(preferred) = spend_level_override(answers)
        && leaders.contains(&preferred)
    {
        return preferred;
    }
    leaders[0]
}

/// Q1 discriminator. Option 2 (11-20 days) intentionally maps to nothing:
/// the reference behavior leaves that case to the Q2 discriminator.
fn stay_duration_override(answers: &AnswerSet) -> Option<Cluster> {
    match answers.get(QuestionId::Q1)? {
        3 => Some(Cluster::Economic),
        1 => Some(Cluster::General),
        0 => Some(Cluster::Premium),
        _ => None,
    }
}

/// Q2 discriminator: budget, mid-range, then everything above.
fn spend_level_override(answers: &AnswerSet) -> Option<Cluster> {
    match answers.get(QuestionId::Q2)? {
        0 => Some(Cluster::Economic),
        1 => Some(Cluster::General),
        _ => Some(Cluster::Premium),
    }
}
