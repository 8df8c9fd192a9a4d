use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Answers keyed by question id. Iteration order never affects the result.
pub type RatingSheet = HashMap<String, u8>;

/// Closed Likert interval accepted by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingScale {
    pub min: u8,
    pub max: u8,
}

impl RatingScale {
    pub const LIKERT_FIVE: RatingScale = RatingScale { min: 1, max: 5 };

    pub fn contains(&self, value: u8) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

impl Default for RatingScale {
    fn default() -> Self {
        Self::LIKERT_FIVE
    }
}

/// Inclusive lower bounds on the average rating for each tier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TierThresholds {
    pub excellent: f64,
    pub good: f64,
    pub fair: f64,
}

impl Default for TierThresholds {
    fn default() -> Self {
        Self {
            excellent: 4.5,
            good: 3.5,
            fair: 2.5,
        }
    }
}

/// Scale and tier cut-offs used by [`ScoreEngine`].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub scale: RatingScale,
    pub thresholds: TierThresholds,
}

/// Qualitative bucket derived from the average rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Excellent,
    Good,
    Fair,
    NeedsUrgentImprovement,
}

impl Tier {
    pub fn label(&self) -> &'static str {
        match self {
            Tier::Excellent => "Excelente",
            Tier::Good => "Bueno",
            Tier::Fair => "Regular",
            Tier::NeedsUrgentImprovement => "Requiere Mejora Urgente",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Tier::Excellent => {
                "El proceso de cosecha de su empresa muestra un nivel excelente de gestión y \
                 cumplimiento. Los procedimientos están bien documentados y se implementan de \
                 manera efectiva. Continúe manteniendo estos estándares de calidad."
            }
            Tier::Good => {
                "El proceso de cosecha presenta un buen nivel de gestión. Existen áreas sólidas, \
                 pero hay oportunidades de mejora que pueden elevar aún más la eficiencia y \
                 calidad del proceso. Recomendamos revisar las áreas con puntuación más baja."
            }
            Tier::Fair => {
                "El proceso de cosecha tiene un nivel regular. Se identifican áreas que requieren \
                 atención inmediata para mejorar la eficiencia, calidad y cumplimiento normativo. \
                 Es importante implementar mejoras en los procedimientos y controles."
            }
            Tier::NeedsUrgentImprovement => {
                "El proceso de cosecha requiere mejoras significativas. Se recomienda implementar \
                 urgentemente procedimientos documentados, capacitación del personal, controles \
                 de calidad y sistemas de gestión. Nuestro equipo puede ayudarle a desarrollar \
                 un plan de mejora integral."
            }
        }
    }
}

/// Aggregate outcome of a completed questionnaire.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreResult {
    pub score: u8,
    pub tier: Tier,
    pub average: f64,
    pub message: &'static str,
}

/// Caller errors: the rating mapping must be non-empty and within the scale.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidInput {
    #[error("at least one rating is required")]
    Empty,
    #[error("rating {value} for question '{question_id}' is outside the {min}-{max} scale")]
    OutOfScale {
        question_id: String,
        value: u8,
        min: u8,
        max: u8,
    },
}

/// Stateless scorer that applies the configured scale and tier thresholds.
#[derive(Debug, Clone, Default)]
pub struct ScoreEngine {
    config: ScoringConfig,
}

impl ScoreEngine {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    pub fn score(&self, ratings: &RatingSheet) -> Result<ScoreResult, InvalidInput> {
        let (total, count) = tally(ratings.iter(), self.config.scale)?;
        if count == 0 {
            return Err(InvalidInput::Empty);
        }

        let tier = self.classify(total, count);
        Ok(ScoreResult {
            score: percent_of_max(total, count, self.config.scale.max),
            tier,
            average: total as f64 / count as f64,
            message: tier.message(),
        })
    }

    // Thresholds are inclusive: an average of exactly 3.5 is Good.
    fn classify(&self, total: u64, count: u64) -> Tier {
        let thresholds = &self.config.thresholds;
        let total = total as f64;
        let count = count as f64;

        if total >= thresholds.excellent * count {
            Tier::Excellent
        } else if total >= thresholds.good * count {
            Tier::Good
        } else if total >= thresholds.fair * count {
            Tier::Fair
        } else {
            Tier::NeedsUrgentImprovement
        }
    }
}

/// Sums ratings after checking each against the scale.
pub(crate) fn tally<'a, I>(ratings: I, scale: RatingScale) -> Result<(u64, u64), InvalidInput>
where
    I: IntoIterator<Item = (&'a String, &'a u8)>,
{
    let mut total = 0u64;
    let mut count = 0u64;
    for (question_id, value) in ratings {
        if !scale.contains(*value) {
            return Err(InvalidInput::OutOfScale {
                question_id: question_id.clone(),
                value: *value,
                min: scale.min,
                max: scale.max,
            });
        }
        total += u64::from(*value);
        count += 1;
    }
    Ok((total, count))
}

/// `round(average / max * 100)` with round-half-up in integer arithmetic.
fn percent_of_max(total: u64, count: u64, max: u8) -> u8 {
    let denominator = count * u64::from(max.max(1));
    let rounded = (200 * total + denominator) / (2 * denominator);
    rounded.min(100) as u8
}
