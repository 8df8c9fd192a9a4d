use super::common::*;
use std::sync::Arc;

use axum::body::Body;
use axum::extract::State;
use axum::http::{header, Request, StatusCode};
use axum::Json;
use serde_json::json;
use tower::ServiceExt;

use crate::workflows::intake::router::{appointment_handler, company_handler};
use crate::workflows::intake::{intake_router, AppointmentRequest, ServiceCatalog};

#[tokio::test]
async fn appointment_handler_returns_receipt() {
    let response = appointment_handler(
        State(Arc::new(ServiceCatalog::agro())),
        Json(appointment()),
    )
    .await;

    assert_eq!(response.status(), StatusCode::ACCEPTED);
    let body = json_body(response).await;
    assert_eq!(body["status"], "received");
    assert!(body["received_at"].is_string());
    assert_eq!(body["submission"]["preferred_date"], "2026-11-03");
    assert_eq!(body["submission"]["services"], json!(["auditoria", "licencias"]));
}

#[tokio::test]
async fn appointment_handler_lists_field_errors() {
    let response = appointment_handler(
        State(Arc::new(ServiceCatalog::agro())),
        Json(AppointmentRequest::default()),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = json_body(response).await;
    assert_eq!(body["fields"]["email"], "El email es requerido");
    assert_eq!(body["error"], "4 field(s) failed validation");
}

#[tokio::test]
async fn company_handler_accepts_profile() {
    let response = company_handler(Json(company())).await;

    assert_eq!(response.status(), StatusCode::ACCEPTED);
    let body = json_body(response).await;
    assert_eq!(body["submission"]["industry"], "Fruticultura");
}

#[tokio::test]
async fn company_route_rejects_bad_email() {
    let router = intake_router(Arc::new(ServiceCatalog::agro()));
    let payload = json!({
        "company_name": "Frutícola Los Andes",
        "contact_name": "Pedro Rojas",
        "email": "pedro at losandes.cl",
        "phone": "+56 2 2345 6789",
        "industry": "Fruticultura"
    });

    let response = router
        .oneshot(
            Request::post("/api/v1/company")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    serde_json::to_vec(&payload).expect("payload serializes"),
                ))
                .expect("request builds"),
        )
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = json_body(response).await;
    assert_eq!(body["fields"]["email"], "El email no es válido");
}

#[tokio::test]
async fn services_route_lists_catalog() {
    let router = intake_router(Arc::new(ServiceCatalog::agro()));

    let response = router
        .oneshot(
            Request::get("/api/v1/services")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    let ids: Vec<&str> = body
        .as_array()
        .expect("array")
        .iter()
        .filter_map(|service| service["id"].as_str())
        .collect();
    assert!(ids.contains(&"capacitacion"));
}
