use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;

use super::domain::{PersonalityType, SessionId, Submission};
use super::repository::{RepositoryError, ResultRepository};
use super::service::{QuizService, QuizServiceError};

/// Router exposing the question battery, submission, and type catalog endpoints.
pub fn quiz_router<R>(service: Arc<QuizService<R>>) -> Router
where
    R: ResultRepository + 'static,
{
    Router::new()
        .route("/api/questions", get(questions_handler::<R>))
        .route("/api/submit-test", post(submit_handler::<R>))
        .route("/api/results/:session_id", get(result_handler::<R>))
        .route("/api/types", get(types_handler::<R>))
        .route("/api/types/:code", get(type_handler::<R>))
        .with_state(service)
}

pub(crate) async fn questions_handler<R>(State(service): State<Arc<QuizService<R>>>) -> Response
where
    R: ResultRepository + 'static,
{
    (StatusCode::OK, Json(service.questions())).into_response()
}

pub(crate) async fn submit_handler<R>(
    State(service): State<Arc<QuizService<R>>>,
    Json(submission): Json<Submission>,
) -> Response
where
    R: ResultRepository + 'static,
{
    match service.submit(submission) {
        Ok(record) => (StatusCode::OK, Json(record.result)).into_response(),
        Err(QuizServiceError::InvalidSession) => {
            let payload = json!({
                "error": QuizServiceError::InvalidSession.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
        }
    }
}

pub(crate) async fn result_handler<R>(
    State(service): State<Arc<QuizService<R>>>,
    Path(session_id): Path<String>,
) -> Response
where
    R: ResultRepository + 'static,
{
    match service.result(&SessionId(session_id)) {
        Ok(record) => (StatusCode::OK, Json(record)).into_response(),
        Err(QuizServiceError::Repository(RepositoryError::NotFound)) => {
            let payload = json!({
                "error": "test result not found",
            });
            (StatusCode::NOT_FOUND, Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
        }
    }
}

pub(crate) async fn types_handler<R>(State(service): State<Arc<QuizService<R>>>) -> Response
where
    R: ResultRepository + 'static,
{
    (StatusCode::OK, Json(service.catalog().profiles())).into_response()
}

pub(crate) async fn type_handler<R>(
    State(service): State<Arc<QuizService<R>>>,
    Path(code): Path<String>,
) -> Response
where
    R: ResultRepository + 'static,
{
    match code.parse::<PersonalityType>() {
        Ok(personality_type) => {
            (StatusCode::OK, Json(service.profile(personality_type))).into_response()
        }
        Err(err) => {
            let payload = json!({
                "error": err.to_string(),
            });
            (StatusCode::NOT_FOUND, Json(payload)).into_response()
        }
    }
}
