use std::sync::Arc;

use super::bank::{BankError, QuestionBank};
use super::catalog::{CatalogError, TypeCatalog};
use super::classifier::classify;
use super::domain::{Answer, Gender};
use super::result::{assemble, QuizResult};
use super::scoring::{aggregate, Aggregate};

/// Stateless pipeline: aggregate, classify, look up, assemble.
///
/// Bank and catalog are read-only after construction, so one engine can be
/// shared across any number of concurrent submissions.
#[derive(Debug, Clone)]
pub struct QuizEngine {
    bank: Arc<QuestionBank>,
    catalog: Arc<TypeCatalog>,
}

/// Output of a single evaluation.
#[derive(Debug, Clone)]
pub struct Evaluation {
    pub result: QuizResult,
    pub aggregate: Aggregate,
}

impl QuizEngine {
    pub fn new(bank: Arc<QuestionBank>, catalog: Arc<TypeCatalog>) -> Self {
        Self { bank, catalog }
    }

    pub fn standard() -> Result<Self, EngineError> {
        let bank = QuestionBank::standard()?;
        let catalog = TypeCatalog::standard()?;
        Ok(Self::new(Arc::new(bank), Arc::new(catalog)))
    }

    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    pub fn catalog(&self) -> &TypeCatalog {
        &self.catalog
    }

    pub fn evaluate(&self, answers: &[Answer], gender: Option<Gender>) -> Evaluation {
        let aggregate = aggregate(answers, &self.bank);
        let classification = classify(&aggregate.scores);
        let profile = self.catalog.profile(classification.personality_type);
        let result = assemble(aggregate.scores, &classification, profile, gender);

        Evaluation { result, aggregate }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error(transparent)]
    Bank(#[from] BankError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}
