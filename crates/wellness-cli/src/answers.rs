//! Answer-set assembly from CLI flags and JSON files.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};

use wellness_model::{AnswerSet, QuestionId};

/// Parse one `q<N>=<option-index>` flag value.
pub fn parse_answer_pair(raw: &str) -> Result<(QuestionId, usize)> {
    let (question, option) = raw
        .split_once('=')
        .ok_or_else(|| anyhow!("invalid answer '{raw}': expected q<N>=<option-index>"))?;
    let id: QuestionId = question
        .trim()
        .parse()
        .map_err(|message: String| anyhow!("{message}"))?;
    let index: usize = option
        .trim()
        .parse()
        .with_context(|| format!("invalid option index in '{raw}'"))?;
    Ok((id, index))
}

/// Assemble the answer set from an optional JSON file (`{"q1":3,...}`) plus
/// `--answer` flag overrides, flags winning on conflict.
pub fn collect_answers(pairs: &[String], file: Option<&Path>) -> Result<AnswerSet> {
    let mut answers = match file {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("read answers file {}", path.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("parse answers file {}", path.display()))?
        }
        None => AnswerSet::new(),
    };
    for raw in pairs {
        let (id, index) = parse_answer_pair(raw)?;
        answers.set(id, index);
    }
    Ok(answers)
}
