//! Harvest self-assessment: catalog, scoring engine, and per-category breakdown.

pub mod catalog;
pub mod categories;
pub mod router;
pub mod scoring;
pub mod service;

#[cfg(test)]
mod tests;

pub use catalog::{CompletenessReport, Question, QuestionCategory, Questionnaire, ScaleLabels};
pub use categories::{category_breakdown, CategoryScore};
pub use router::questionnaire_router;
pub use scoring::{
    InvalidInput, RatingScale, RatingSheet, ScoreEngine, ScoreResult, ScoringConfig, Tier,
    TierThresholds,
};
pub use service::{QuestionnaireError, QuestionnaireOutcome, QuestionnaireService};
