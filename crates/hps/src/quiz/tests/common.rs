use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::quiz::bank::QuestionBank;
use crate::quiz::domain::{Answer, Gender, SessionId, Submission};
use crate::quiz::engine::QuizEngine;
use crate::quiz::repository::{RepositoryError, ResultRepository, StoredResult};
use crate::quiz::service::QuizService;
use crate::quiz::{quiz_router, TypeCatalog};

pub(super) fn bank() -> QuestionBank {
    QuestionBank::standard().expect("standard bank valid")
}

pub(super) fn engine() -> QuizEngine {
    QuizEngine::standard().expect("standard engine builds")
}

pub(super) fn catalog() -> TypeCatalog {
    TypeCatalog::standard().expect("standard catalog valid")
}

/// Picks the option on every question that leans hardest toward the first
/// or second pole of its axis.
pub(super) fn leaning_answers(first_pole: [bool; 3]) -> Vec<Answer> {
    let bank = bank();
    bank.questions()
        .iter()
        .map(|question| {
            let axis = question.dimension.axis();
            let wants_first = match axis {
                crate::quiz::Axis::Hormone => first_pole[0],
                crate::quiz::Axis::Action => first_pole[1],
                crate::quiz::Axis::Focus => first_pole[2],
            };
            let (index, _) = question
                .options
                .iter()
                .enumerate()
                .max_by_key(|(_, option)| {
                    let (first, second) = option.weights.axis(axis);
                    if wants_first {
                        i64::from(first) - i64::from(second)
                    } else {
                        i64::from(second) - i64::from(first)
                    }
                })
                .expect("question has options");
            Answer::for_slot(question.id, index)
        })
        .collect()
}

pub(super) fn submission(session: &str, answers: Vec<Answer>) -> Submission {
    Submission {
        session_id: SessionId(session.to_string()),
        answers,
        gender: Some(Gender::Female),
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    records: Arc<Mutex<HashMap<SessionId, StoredResult>>>,
}

impl MemoryRepository {
    pub(super) fn len(&self) -> usize {
        self.records.lock().expect("repository mutex poisoned").len()
    }
}

impl ResultRepository for MemoryRepository {
    fn save(&self, record: StoredResult) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        guard.insert(record.session_id.clone(), record);
        Ok(())
    }

    fn fetch(&self, session_id: &SessionId) -> Result<Option<StoredResult>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(session_id).cloned())
    }
}

pub(super) struct UnavailableRepository;

impl ResultRepository for UnavailableRepository {
    fn save(&self, _record: StoredResult) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("offline".to_string()))
    }

    fn fetch(&self, _session_id: &SessionId) -> Result<Option<StoredResult>, RepositoryError> {
        Err(RepositoryError::Unavailable("offline".to_string()))
    }
}

pub(super) fn build_service() -> (QuizService<MemoryRepository>, MemoryRepository) {
    let repository = MemoryRepository::default();
    let service = QuizService::new(Arc::new(engine()), Arc::new(repository.clone()));
    (service, repository)
}

pub(super) fn router_with_service(service: QuizService<MemoryRepository>) -> axum::Router {
    quiz_router(Arc::new(service))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
