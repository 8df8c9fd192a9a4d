use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;

use super::scoring::RatingSheet;
use super::service::{QuestionnaireError, QuestionnaireService};

#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    pub answers: RatingSheet,
}

/// Router exposing the questionnaire catalog and scoring endpoint.
pub fn questionnaire_router(service: Arc<QuestionnaireService>) -> Router {
    Router::new()
        .route("/api/v1/questionnaire", get(catalog_handler))
        .route("/api/v1/questionnaire/score", post(score_handler))
        .with_state(service)
}

pub(crate) async fn catalog_handler(State(service): State<Arc<QuestionnaireService>>) -> Response {
    (StatusCode::OK, Json(service.questionnaire())).into_response()
}

pub(crate) async fn score_handler(
    State(service): State<Arc<QuestionnaireService>>,
    Json(request): Json<ScoreRequest>,
) -> Response {
    match service.evaluate(&request.answers) {
        Ok(outcome) => (StatusCode::OK, Json(outcome)).into_response(),
        Err(QuestionnaireError::Incomplete(report)) => {
            let payload = json!({
                "error": "answer sheet does not match the questionnaire",
                "missing": report.missing,
                "unknown": report.unknown,
            });
            (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
        }
        Err(QuestionnaireError::Invalid(error)) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
        }
    }
}
