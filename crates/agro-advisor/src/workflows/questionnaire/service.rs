use std::collections::BTreeMap;

use serde::Serialize;

use super::catalog::{CompletenessReport, Questionnaire};
use super::categories::{category_breakdown, CategoryScore};
use super::scoring::{InvalidInput, RatingSheet, ScoreEngine, ScoreResult, ScoringConfig};

/// Outcome returned to the site once a full answer sheet is scored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuestionnaireOutcome {
    #[serde(flatten)]
    pub result: ScoreResult,
    /// Spanish tier label; `tier` itself serializes as a snake_case id.
    pub level: &'static str,
    pub categories: BTreeMap<String, CategoryScore>,
}

#[derive(Debug, thiserror::Error)]
pub enum QuestionnaireError {
    #[error("answer sheet does not match the questionnaire")]
    Incomplete(CompletenessReport),
    #[error(transparent)]
    Invalid(#[from] InvalidInput),
}

/// Pairs the catalog with the scoring engine and enforces completeness.
pub struct QuestionnaireService {
    questionnaire: Questionnaire,
    engine: ScoreEngine,
}

impl QuestionnaireService {
    pub fn new(questionnaire: Questionnaire, config: ScoringConfig) -> Self {
        Self {
            questionnaire,
            engine: ScoreEngine::new(config),
        }
    }

    pub fn harvest() -> Self {
        Self::new(Questionnaire::harvest(), ScoringConfig::default())
    }

    pub fn questionnaire(&self) -> &Questionnaire {
        &self.questionnaire
    }

    pub fn evaluate(&self, answers: &RatingSheet) -> Result<QuestionnaireOutcome, QuestionnaireError> {
        let report = self.questionnaire.check_complete(answers);
        if !report.is_complete() {
            return Err(QuestionnaireError::Incomplete(report));
        }

        let result = self.engine.score(answers)?;
        let categories =
            category_breakdown(&self.questionnaire, answers, self.engine.config().scale)?;

        tracing::info!(
            questionnaire = %self.questionnaire.id,
            score = result.score,
            tier = result.tier.label(),
            "questionnaire scored"
        );

        Ok(QuestionnaireOutcome {
            level: result.tier.label(),
            result,
            categories,
        })
    }
}
