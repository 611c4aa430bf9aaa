//! Hormone Personality System quiz: question battery, scoring, classification,
//! type catalog, and the submission service that ties them to a result store.
//!
//! The pipeline is pure and single-pass: answers are aggregated into a raw
//! six-pole vector, classified into one of eight types, matched to catalog
//! content, and assembled into a [`QuizResult`].

pub mod bank;
pub mod catalog;
pub mod classifier;
pub mod domain;
pub mod engine;
pub mod repository;
pub mod result;
pub mod router;
pub mod scoring;
pub mod service;

#[cfg(test)]
mod tests;

pub use bank::{BankError, QuestionBank};
pub use catalog::{CatalogError, Compatibility, TypeCatalog, TypeProfile};
pub use classifier::{classify, Classification, Percentages};
pub use domain::{
    Answer, Axis, Dimension, Gender, PersonalityType, Pole, Question, QuestionId, QuestionOption,
    RawScores, SessionId, Submission, Weights,
};
pub use engine::{EngineError, Evaluation, QuizEngine};
pub use repository::{RepositoryError, ResultRepository, StoredResult};
pub use result::QuizResult;
pub use router::quiz_router;
pub use scoring::{aggregate, Aggregate, IgnoreReason, IgnoredAnswer};
pub use service::{QuizService, QuizServiceError};
