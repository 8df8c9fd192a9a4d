use super::common::*;
use std::sync::Arc;

use axum::body::Body;
use axum::extract::State;
use axum::http::{header, Request, StatusCode};
use axum::Json;
use serde_json::json;
use tower::ServiceExt;

use crate::workflows::assistant::router::{reply_handler, ReplyRequest};
use crate::workflows::assistant::{assistant_router, ConversationHistory};

#[tokio::test]
async fn reply_handler_serializes_navigate_action() {
    let response = reply_handler(
        State(Arc::new(offline_resolver())),
        Json(ReplyRequest {
            message: "Quiero llenar el cuestionario".to_string(),
            history: ConversationHistory::new(),
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["action"]["type"], "navigate");
    assert_eq!(body["action"]["path"], "/cuestionario");
    assert_eq!(body["action"]["label"], "Ir al Cuestionario");
    assert!(!body["message"].as_str().expect("message").is_empty());
}

#[tokio::test]
async fn reply_handler_rejects_blank_messages() {
    let response = reply_handler(
        State(Arc::new(offline_resolver())),
        Json(ReplyRequest {
            message: "   ".to_string(),
            history: ConversationHistory::new(),
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn reply_route_accepts_history_payloads() {
    let router = assistant_router(Arc::new(offline_resolver()));
    let payload = json!({
        "message": "gracias, eso es todo",
        "history": [
            { "speaker": "user", "text": "hola" },
            { "speaker": "assistant", "text": "¡Hola!" }
        ]
    });

    let response = router
        .oneshot(
            Request::post("/api/v1/assistant/reply")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    serde_json::to_vec(&payload).expect("payload serializes"),
                ))
                .expect("request builds"),
        )
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert!(body.get("action").is_none());
}

#[tokio::test]
async fn status_route_reports_fallback_mode() {
    let router = assistant_router(Arc::new(offline_resolver()));

    let response = router
        .oneshot(
            Request::get("/api/v1/assistant")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("router responds");

    let body = json_body(response).await;
    assert_eq!(body["mode"], "fallback");
    assert!(body["provider"].is_null());
    assert!(body["greeting"].as_str().expect("greeting").starts_with("¡Hola!"));
}
