//! Integration scenarios for the harvest self-assessment.
//!
//! Exercises the public catalog, scoring engine, and HTTP router together the way the site
//! submits a completed questionnaire.

mod common {
    use agro_advisor::workflows::questionnaire::{Questionnaire, RatingSheet};

    pub(super) fn answers_with(rating: impl Fn(usize) -> u8) -> RatingSheet {
        Questionnaire::harvest()
            .questions()
            .enumerate()
            .map(|(index, question)| (question.id.clone(), rating(index)))
            .collect()
    }
}

use std::sync::Arc;

use agro_advisor::workflows::questionnaire::{
    questionnaire_router, InvalidInput, QuestionnaireError, QuestionnaireService, ScoreEngine,
    Tier,
};
use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

#[test]
fn extreme_answer_sheets_map_to_tier_edges() {
    let engine = ScoreEngine::default();

    let best = engine.score(&common::answers_with(|_| 5)).expect("valid");
    assert_eq!((best.score, best.tier), (100, Tier::Excellent));

    let worst = engine.score(&common::answers_with(|_| 1)).expect("valid");
    assert_eq!((worst.score, worst.tier), (20, Tier::NeedsUrgentImprovement));
}

#[test]
fn mixed_sheet_lands_in_fair_tier() {
    // 3,2,3,2,... averages 2.5
    let ratings = common::answers_with(|index| if index % 2 == 0 { 3 } else { 2 });
    let outcome = QuestionnaireService::harvest()
        .evaluate(&ratings)
        .expect("complete sheet");

    assert_eq!(outcome.result.score, 50);
    assert_eq!(outcome.result.tier, Tier::Fair);
    assert_eq!(outcome.level, "Regular");
    assert_eq!(outcome.categories.len(), 4);
}

#[test]
fn service_rejects_out_of_scale_answer() {
    let mut ratings = common::answers_with(|_| 4);
    ratings.insert("q4".to_string(), 0);

    let err = QuestionnaireService::harvest()
        .evaluate(&ratings)
        .expect_err("zero rejected");

    assert!(matches!(
        err,
        QuestionnaireError::Invalid(InvalidInput::OutOfScale { value: 0, .. })
    ));
}

#[tokio::test]
async fn score_route_round_trip() {
    let router = questionnaire_router(Arc::new(QuestionnaireService::harvest()));
    let answers: serde_json::Map<String, Value> = common::answers_with(|_| 5)
        .into_iter()
        .map(|(id, rating)| (id, json!(rating)))
        .collect();

    let response = router
        .oneshot(
            Request::post("/api/v1/questionnaire/score")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json!({ "answers": answers }).to_string()))
                .expect("request builds"),
        )
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    let body: Value = serde_json::from_slice(&bytes).expect("json body");
    assert_eq!(body["score"], 100);
    assert_eq!(body["level"], "Excelente");
    assert_eq!(body["categories"]["planificacion"]["count"], 3);
}
