use axum::body::to_bytes;
use axum::response::Response;
use serde_json::Value;

use crate::workflows::intake::{AppointmentRequest, CompanyProfile};

pub(super) fn appointment() -> AppointmentRequest {
    AppointmentRequest {
        name: "María González".to_string(),
        email: "maria@viñedos.cl".to_string(),
        phone: "+56 9 1234 5678".to_string(),
        company: Some("Viñedos del Sur".to_string()),
        preferred_date: Some("2026-11-03".to_string()),
        preferred_time: Some("09:30".to_string()),
        message: Some("Queremos revisar costos de cosecha.".to_string()),
        selected_services: vec!["auditoria".to_string(), "licencias".to_string()],
    }
}

pub(super) fn company() -> CompanyProfile {
    CompanyProfile {
        company_name: "Frutícola Los Andes".to_string(),
        contact_name: "Pedro Rojas".to_string(),
        email: "pedro@losandes.cl".to_string(),
        phone: "+56 2 2345 6789".to_string(),
        industry: "Fruticultura".to_string(),
        employees: Some("51-200".to_string()),
        description: None,
    }
}

pub(super) async fn json_body(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    serde_json::from_slice(&bytes).expect("json body")
}
