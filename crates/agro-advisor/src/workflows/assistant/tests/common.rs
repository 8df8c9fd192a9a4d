use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::to_bytes;
use axum::response::Response;
use reqwest::StatusCode;
use serde_json::Value;

use crate::workflows::assistant::{
    CompletionRequest, FallbackResponder, FixedPicker, GenerationParams, RemoteCompletion,
    RemoteUnavailable, ResponderResolver,
};

/// Returns a canned completion and records every request it receives.
pub(super) struct ScriptedRemote {
    reply: Option<String>,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl ScriptedRemote {
    pub(super) fn answering(text: &str) -> Self {
        Self {
            reply: Some(text.to_string()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub(super) fn silent() -> Self {
        Self {
            reply: None,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub(super) fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().expect("request mutex").clone()
    }
}

#[async_trait]
impl RemoteCompletion for ScriptedRemote {
    fn provider(&self) -> &'static str {
        "scripted"
    }

    async fn complete(
        &self,
        request: &CompletionRequest,
    ) -> Result<Option<String>, RemoteUnavailable> {
        self.requests
            .lock()
            .expect("request mutex")
            .push(request.clone());
        Ok(self.reply.clone())
    }
}

#[derive(Clone, Copy)]
pub(super) enum FailureMode {
    BadGateway,
    Malformed,
}

/// Fails every call in the configured way.
pub(super) struct FailingRemote {
    mode: FailureMode,
    calls: AtomicUsize,
}

impl FailingRemote {
    pub(super) fn new(mode: FailureMode) -> Self {
        Self {
            mode,
            calls: AtomicUsize::new(0),
        }
    }

    pub(super) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RemoteCompletion for FailingRemote {
    fn provider(&self) -> &'static str {
        "failing"
    }

    async fn complete(
        &self,
        _request: &CompletionRequest,
    ) -> Result<Option<String>, RemoteUnavailable> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(match self.mode {
            FailureMode::BadGateway => RemoteUnavailable::Status(StatusCode::BAD_GATEWAY),
            FailureMode::Malformed => RemoteUnavailable::Malformed("expected value".to_string()),
        })
    }
}

pub(super) fn fixed_fallback() -> FallbackResponder {
    FallbackResponder::new(Arc::new(FixedPicker(0)))
}

pub(super) fn offline_resolver() -> ResponderResolver {
    ResponderResolver::offline(fixed_fallback())
}

pub(super) fn resolver_with(remote: Arc<dyn RemoteCompletion>) -> ResponderResolver {
    ResponderResolver::new(Some(remote), fixed_fallback(), GenerationParams::default())
}

pub(super) async fn json_body(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    serde_json::from_slice(&bytes).expect("json body")
}
