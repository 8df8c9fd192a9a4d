use std::sync::Arc;

use axum::body::to_bytes;
use axum::response::Response;
use serde_json::Value;

use crate::workflows::questionnaire::{Questionnaire, QuestionnaireService, RatingSheet};

pub(super) fn sheet(entries: &[(&str, u8)]) -> RatingSheet {
    entries
        .iter()
        .map(|(id, value)| (id.to_string(), *value))
        .collect()
}

/// Every harvest question answered with `value`.
pub(super) fn uniform_answers(value: u8) -> RatingSheet {
    Questionnaire::harvest()
        .questions()
        .map(|question| (question.id.clone(), value))
        .collect()
}

pub(super) fn service() -> Arc<QuestionnaireService> {
    Arc::new(QuestionnaireService::harvest())
}

pub(super) async fn json_body(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    serde_json::from_slice(&bytes).expect("json body")
}
