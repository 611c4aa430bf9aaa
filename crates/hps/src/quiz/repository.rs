use chrono::{DateTime, Utc};
use serde::Serialize;

use super::domain::{Answer, Gender, SessionId};
use super::result::QuizResult;

/// Result persisted per session so it can be fetched again later.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredResult {
    pub session_id: SessionId,
    pub answers: Vec<Answer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    pub complete: bool,
    pub result: QuizResult,
    pub completed_at: DateTime<Utc>,
}

/// Storage abstraction for the result sink. Saving an existing session replaces it.
pub trait ResultRepository: Send + Sync {
    fn save(&self, record: StoredResult) -> Result<(), RepositoryError>;
    fn fetch(&self, session_id: &SessionId) -> Result<Option<StoredResult>, RepositoryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
