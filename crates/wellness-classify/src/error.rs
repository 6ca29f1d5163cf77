use thiserror::Error;

use wellness_model::QuestionId;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ClassifyError {
    #[error("answer set is incomplete; unanswered questions: {}", join_ids(.missing))]
    IncompleteAnswers { missing: Vec<QuestionId> },
    #[error("answer for {question} is out of range: option {index}, question has {options} options")]
    OptionOutOfRange {
        question: QuestionId,
        index: usize,
        options: usize,
    },
}

fn join_ids(ids: &[QuestionId]) -> String {
    let mut out = String::new();
    for (i, id) in ids.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        out.push_str(id.as_str());
    }
    out
}
