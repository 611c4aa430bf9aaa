use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;

use super::bank::QuestionBank;
use super::domain::{Answer, QuestionId, RawScores};

/// Why an answer did not contribute to the score vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IgnoreReason {
    UnknownQuestion,
    OptionOutOfRange,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IgnoredAnswer {
    pub answer: Answer,
    pub reason: IgnoreReason,
}

/// Score vector plus an audit of which answers counted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Aggregate {
    pub scores: RawScores,
    pub counted: Vec<Answer>,
    pub ignored: Vec<IgnoredAnswer>,
}

impl Aggregate {
    /// True when every question in the bank has a counted answer.
    pub fn is_complete(&self, bank: &QuestionBank) -> bool {
        bank.questions().iter().all(|question| {
            self.counted
                .iter()
                .any(|answer| answer.question_id == question.id)
        })
    }
}

/// Sums the weights of each chosen option into a [`RawScores`] vector.
///
/// A later answer for the same question replaces the earlier one before any
/// validation happens. Unknown questions and out-of-range option indices are
/// skipped without failing the batch.
pub fn aggregate(answers: &[Answer], bank: &QuestionBank) -> Aggregate {
    let mut latest: BTreeMap<QuestionId, Answer> = BTreeMap::new();
    for answer in answers {
        latest.insert(answer.question_id, *answer);
    }

    let mut scores = RawScores::default();
    let mut counted = Vec::with_capacity(latest.len());
    let mut ignored = Vec::new();

    for answer in latest.into_values() {
        let Some(question) = bank.get(answer.question_id) else {
            debug!(question = %answer.question_id, "ignoring answer for unknown question");
            ignored.push(IgnoredAnswer {
                answer,
                reason: IgnoreReason::UnknownQuestion,
            });
            continue;
        };

        match answer.option_slot().and_then(|slot| question.option(slot)) {
            Some(option) => {
                scores += &option.weights;
                counted.push(answer);
            }
            None => {
                debug!(
                    question = %answer.question_id,
                    option_index = answer.option_index,
                    available = question.options.len(),
                    "ignoring out-of-range option"
                );
                ignored.push(IgnoredAnswer {
                    answer,
                    reason: IgnoreReason::OptionOutOfRange,
                });
            }
        }
    }

    Aggregate {
        scores,
        counted,
        ignored,
    }
}
