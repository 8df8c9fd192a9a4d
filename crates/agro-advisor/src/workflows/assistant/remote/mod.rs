//! Remote text-generation providers behind a single async capability.

mod gemini;
mod openai;

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::domain::{ConversationHistory, Speaker};
use crate::config::{AssistantConfig, RemoteProvider};

pub use gemini::GeminiCompletion;
pub use openai::OpenAiCompletion;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PromptRole {
    System,
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PromptMessage {
    pub role: PromptRole,
    pub content: String,
}

impl PromptMessage {
    fn new(role: PromptRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationParams {
    pub temperature: f32,
    pub max_tokens: u32,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            max_tokens: 500,
        }
    }
}

/// System instructions, prior turns, then the new utterance.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub messages: Vec<PromptMessage>,
    pub params: GenerationParams,
}

impl CompletionRequest {
    pub fn build(
        system_prompt: &str,
        history: &ConversationHistory,
        utterance: &str,
        params: GenerationParams,
    ) -> Self {
        let mut messages = Vec::with_capacity(history.len() + 2);
        messages.push(PromptMessage::new(PromptRole::System, system_prompt));
        messages.extend(history.turns().iter().map(|turn| {
            let role = match turn.speaker {
                Speaker::User => PromptRole::User,
                Speaker::Assistant => PromptRole::Assistant,
            };
            PromptMessage::new(role, turn.text.clone())
        }));
        messages.push(PromptMessage::new(PromptRole::User, utterance));

        Self { messages, params }
    }
}

/// Any failure of a remote completion attempt.
#[derive(Debug, thiserror::Error)]
pub enum RemoteUnavailable {
    #[error("provider responded with HTTP {0}")]
    Status(StatusCode),
    #[error("provider request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("provider returned a malformed body: {0}")]
    Malformed(String),
}

/// Injected text-generation capability.
///
/// `Ok(None)` means the provider answered but produced no usable text.
#[async_trait]
pub trait RemoteCompletion: Send + Sync {
    fn provider(&self) -> &'static str;

    async fn complete(
        &self,
        request: &CompletionRequest,
    ) -> Result<Option<String>, RemoteUnavailable>;
}

/// Builds the configured provider, if any.
pub fn from_config(
    config: &AssistantConfig,
) -> Result<Option<Arc<dyn RemoteCompletion>>, reqwest::Error> {
    let Some(provider) = &config.provider else {
        return Ok(None);
    };

    let client = reqwest::Client::builder()
        .timeout(config.request_timeout)
        .build()?;

    let remote: Arc<dyn RemoteCompletion> = match provider {
        RemoteProvider::OpenAi {
            api_key,
            model,
            base_url,
        } => Arc::new(OpenAiCompletion::new(
            client,
            api_key.clone(),
            model.clone(),
            base_url.clone(),
        )),
        RemoteProvider::Gemini {
            api_key,
            model,
            base_url,
        } => Arc::new(GeminiCompletion::new(
            client,
            api_key.clone(),
            model.clone(),
            base_url.clone(),
        )),
    };

    Ok(Some(remote))
}

pub(crate) async fn read_success_body(
    response: reqwest::Response,
) -> Result<String, RemoteUnavailable> {
    let status = response.status();
    if !status.is_success() {
        return Err(RemoteUnavailable::Status(status));
    }
    Ok(response.text().await?)
}

pub(crate) fn parse_envelope<T: DeserializeOwned>(body: &str) -> Result<T, RemoteUnavailable> {
    serde_json::from_str(body).map_err(|err| RemoteUnavailable::Malformed(err.to_string()))
}

pub(crate) fn usable_text(text: Option<String>) -> Option<String> {
    text.map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
}
