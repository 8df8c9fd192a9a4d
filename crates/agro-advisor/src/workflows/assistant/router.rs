use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::domain::{ConversationHistory, Reply, ReplyAction};
use super::prompt::GREETING;
use super::resolver::ResponderResolver;

#[derive(Debug, Deserialize)]
pub struct ReplyRequest {
    pub message: String,
    #[serde(default)]
    pub history: ConversationHistory,
}

/// Wire shape consumed by the chat widget.
#[derive(Debug, Serialize)]
pub struct ReplyView {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<ActionView>,
}

#[derive(Debug, Serialize)]
pub struct ActionView {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub path: &'static str,
    pub label: String,
}

impl From<ReplyAction> for ActionView {
    fn from(action: ReplyAction) -> Self {
        Self {
            kind: "navigate",
            path: action.target.path(),
            label: action.label,
        }
    }
}

impl From<Reply> for ReplyView {
    fn from(reply: Reply) -> Self {
        Self {
            message: reply.text,
            action: reply.action.map(ActionView::from),
        }
    }
}

/// Router exposing the chat assistant.
pub fn assistant_router(resolver: Arc<ResponderResolver>) -> Router {
    Router::new()
        .route("/api/v1/assistant", get(status_handler))
        .route("/api/v1/assistant/reply", post(reply_handler))
        .with_state(resolver)
}

pub(crate) async fn status_handler(State(resolver): State<Arc<ResponderResolver>>) -> Response {
    let provider = resolver.provider();
    let mode = if provider.is_some() { "remote" } else { "fallback" };
    let payload = json!({
        "greeting": GREETING,
        "mode": mode,
        "provider": provider,
    });
    (StatusCode::OK, Json(payload)).into_response()
}

pub(crate) async fn reply_handler(
    State(resolver): State<Arc<ResponderResolver>>,
    Json(request): Json<ReplyRequest>,
) -> Response {
    let message = request.message.trim();
    if message.is_empty() {
        let payload = json!({ "error": "message must not be blank" });
        return (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response();
    }

    let reply = resolver.get_reply(message, &request.history).await;
    (StatusCode::OK, Json(ReplyView::from(reply))).into_response()
}
