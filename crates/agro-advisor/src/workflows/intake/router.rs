use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::json;

use super::catalog::ServiceCatalog;
use super::forms::{AppointmentRequest, CompanyProfile};
use super::validation::ValidationErrors;

/// Acknowledgement returned for an accepted form.
#[derive(Debug, Clone, Serialize)]
pub struct IntakeReceipt<T> {
    pub status: &'static str,
    pub received_at: DateTime<Utc>,
    pub submission: T,
}

impl<T> IntakeReceipt<T> {
    fn received(submission: T) -> Self {
        Self {
            status: "received",
            received_at: Utc::now(),
            submission,
        }
    }
}

/// Router exposing the appointment and company forms.
pub fn intake_router(catalog: Arc<ServiceCatalog>) -> Router {
    Router::new()
        .route("/api/v1/services", get(services_handler))
        .route("/api/v1/appointments", post(appointment_handler))
        .route("/api/v1/company", post(company_handler))
        .with_state(catalog)
}

pub(crate) async fn services_handler(State(catalog): State<Arc<ServiceCatalog>>) -> Response {
    (StatusCode::OK, Json(catalog.as_ref().clone())).into_response()
}

pub(crate) async fn appointment_handler(
    State(catalog): State<Arc<ServiceCatalog>>,
    Json(request): Json<AppointmentRequest>,
) -> Response {
    match request.validate(&catalog) {
        Ok(appointment) => {
            tracing::info!(
                services = ?appointment.services,
                preferred_date = ?appointment.preferred_date,
                "appointment request accepted"
            );
            (
                StatusCode::ACCEPTED,
                Json(IntakeReceipt::received(appointment)),
            )
                .into_response()
        }
        Err(errors) => rejected("appointment", errors),
    }
}

pub(crate) async fn company_handler(Json(profile): Json<CompanyProfile>) -> Response {
    match profile.validate() {
        Ok(profile) => {
            tracing::info!(industry = %profile.industry, "company profile accepted");
            (StatusCode::ACCEPTED, Json(IntakeReceipt::received(profile))).into_response()
        }
        Err(errors) => rejected("company", errors),
    }
}

fn rejected(form: &'static str, errors: ValidationErrors) -> Response {
    tracing::debug!(form, failures = errors.len(), "intake form rejected");
    let payload = json!({
        "error": errors.to_string(),
        "fields": errors,
    });
    (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
}
