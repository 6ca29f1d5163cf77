use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::question::QuestionId;

/// Selected option indices keyed by question. A set is complete once every
/// question carries an answer; classification refuses anything less.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet {
    answers: BTreeMap<QuestionId, usize>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the selected 0-based option index for a question. Range
    /// checking happens at classification time, not here.
    pub fn set(&mut self, id: QuestionId, option: usize) {
        self.answers.insert(id, option);
    }

    pub fn get(&self, id: QuestionId) -> Option<usize> {
        self.answers.get(&id).copied()
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    /// Questions without an answer, in ascending id order.
    pub fn missing(&self) -> Vec<QuestionId> {
        QuestionId::ALL
            .into_iter()
            .filter(|id| !self.answers.contains_key(id))
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing().is_empty()
    }

    /// Answered questions in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = (QuestionId, usize)> + '_ {
        self.answers.iter().map(|(id, option)| (*id, *option))
    }
}

impl FromIterator<(QuestionId, usize)> for AnswerSet {
    fn from_iter<I: IntoIterator<Item = (QuestionId, usize)>>(iter: I) -> Self {
        Self {
            answers: iter.into_iter().collect(),
        }
    }
}
