use std::collections::BTreeMap;

use serde::Serialize;

use super::catalog::Questionnaire;
use super::scoring::{tally, InvalidInput, RatingScale, RatingSheet};

/// Per-category reduction over the answered questions of that category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryScore {
    pub title: String,
    pub average: f64,
    pub total: u64,
    pub count: u64,
}

/// Groups ratings by catalog category, skipping categories with no answers.
pub fn category_breakdown(
    questionnaire: &Questionnaire,
    ratings: &RatingSheet,
    scale: RatingScale,
) -> Result<BTreeMap<String, CategoryScore>, InvalidInput> {
    let mut results = BTreeMap::new();

    for category in &questionnaire.categories {
        let answered = category
            .questions
            .iter()
            .filter_map(|question| ratings.get_key_value(&question.id));
        let (total, count) = tally(answered, scale)?;
        if count == 0 {
            continue;
        }

        results.insert(
            category.id.clone(),
            CategoryScore {
                title: category.title.clone(),
                average: total as f64 / count as f64,
                total,
                count,
            },
        );
    }

    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skips_categories_without_answers() {
        let questionnaire = Questionnaire::harvest();
        let ratings: RatingSheet = [("q1", 5u8), ("q2", 2), ("q8", 4)]
            .into_iter()
            .map(|(id, value)| (id.to_string(), value))
            .collect();

        let breakdown =
            category_breakdown(&questionnaire, &ratings, RatingScale::LIKERT_FIVE).expect("valid");

        assert_eq!(breakdown.len(), 2);
        let procedures = &breakdown["procedimientos"];
        assert_eq!(procedures.total, 7);
        assert_eq!(procedures.count, 2);
        assert_eq!(procedures.average, 3.5);
        assert_eq!(breakdown["cumplimiento"].count, 1);
        assert!(!breakdown.contains_key("control"));
    }

    #[test]
    fn rejects_out_of_scale_values_inside_a_category() {
        let questionnaire = Questionnaire::harvest();
        let ratings: RatingSheet = [("q3".to_string(), 9u8)].into_iter().collect();

        let err = category_breakdown(&questionnaire, &ratings, RatingScale::LIKERT_FIVE)
            .expect_err("out of scale");

        assert!(matches!(err, InvalidInput::OutOfScale { value: 9, .. }));
    }
}
