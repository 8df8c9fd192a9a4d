use crate::infra::AppState;
use agro_advisor::workflows::assistant::{assistant_router, ResponderResolver};
use agro_advisor::workflows::intake::{intake_router, ServiceCatalog};
use agro_advisor::workflows::questionnaire::{questionnaire_router, QuestionnaireService};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use serde_json::json;
use std::sync::Arc;

pub(crate) fn with_site_routes(
    questionnaire: Arc<QuestionnaireService>,
    resolver: Arc<ResponderResolver>,
    catalog: Arc<ServiceCatalog>,
) -> axum::Router {
    questionnaire_router(questionnaire)
        .merge(assistant_router(resolver))
        .merge(intake_router(catalog))
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    if ready {
        (StatusCode::OK, Json(json!({ "status": "ready" })))
    } else {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({ "status": "initializing" })),
        )
    }
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}
