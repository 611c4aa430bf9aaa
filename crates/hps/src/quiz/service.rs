use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};

use super::catalog::{TypeCatalog, TypeProfile};
use super::domain::{PersonalityType, Question, SessionId, Submission};
use super::engine::QuizEngine;
use super::repository::{RepositoryError, ResultRepository, StoredResult};

/// Service composing the scoring engine with the result repository.
pub struct QuizService<R> {
    engine: Arc<QuizEngine>,
    repository: Arc<R>,
}

impl<R> QuizService<R>
where
    R: ResultRepository + 'static,
{
    pub fn new(engine: Arc<QuizEngine>, repository: Arc<R>) -> Self {
        Self { engine, repository }
    }

    pub fn engine(&self) -> &QuizEngine {
        &self.engine
    }

    /// Questions in display order.
    pub fn questions(&self) -> &[Question] {
        self.engine.bank().questions()
    }

    pub fn catalog(&self) -> &TypeCatalog {
        self.engine.catalog()
    }

    pub fn profile(&self, personality_type: PersonalityType) -> &TypeProfile {
        self.engine.catalog().profile(personality_type)
    }

    /// Score a submission and store the result under its session id.
    pub fn submit(&self, submission: Submission) -> Result<StoredResult, QuizServiceError> {
        let Submission {
            session_id,
            answers,
            gender,
        } = submission;

        if session_id.0.trim().is_empty() {
            return Err(QuizServiceError::InvalidSession);
        }

        let evaluation = self.engine.evaluate(&answers, gender);
        let complete = evaluation.aggregate.is_complete(self.engine.bank());

        let record = StoredResult {
            session_id,
            answers,
            gender,
            complete,
            result: evaluation.result,
            completed_at: Utc::now(),
        };

        if let Err(err) = self.repository.save(record.clone()) {
            warn!(session = %record.session_id, error = %err, "failed to store quiz result");
            return Err(err.into());
        }

        info!(
            session = %record.session_id,
            personality_type = %record.result.personality_type,
            counted = evaluation.aggregate.counted.len(),
            ignored = evaluation.aggregate.ignored.len(),
            complete,
            "quiz submission scored"
        );

        Ok(record)
    }

    /// Fetch a previously stored result.
    pub fn result(&self, session_id: &SessionId) -> Result<StoredResult, QuizServiceError> {
        let record = self
            .repository
            .fetch(session_id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum QuizServiceError {
    #[error("session id must not be empty")]
    InvalidSession,
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
