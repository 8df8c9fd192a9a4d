use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::{
    parse_envelope, read_success_body, usable_text, CompletionRequest, PromptMessage,
    RemoteCompletion, RemoteUnavailable,
};

/// OpenAI-compatible `chat/completions` client.
pub struct OpenAiCompletion {
    client: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
}

#[derive(Serialize)]
struct ChatCompletionBody<'a> {
    model: &'a str,
    messages: &'a [PromptMessage],
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Default, Deserialize)]
struct ChatCompletionEnvelope {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Default, Deserialize)]
struct ChatChoice {
    #[serde(default)]
    message: Option<ChatMessage>,
}

#[derive(Debug, Default, Deserialize)]
struct ChatMessage {
    #[serde(default)]
    content: Option<String>,
}

impl OpenAiCompletion {
    pub fn new(client: reqwest::Client, api_key: String, model: String, base_url: String) -> Self {
        Self {
            client,
            api_key,
            model,
            base_url,
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

/// `choices[0].message.content`, if present and non-blank.
pub(super) fn extract_text(body: &str) -> Result<Option<String>, RemoteUnavailable> {
    let envelope: ChatCompletionEnvelope = parse_envelope(body)?;
    let content = envelope
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message)
        .and_then(|message| message.content);
    Ok(usable_text(content))
}

#[async_trait]
impl RemoteCompletion for OpenAiCompletion {
    fn provider(&self) -> &'static str {
        "openai"
    }

    async fn complete(
        &self,
        request: &CompletionRequest,
    ) -> Result<Option<String>, RemoteUnavailable> {
        let body = ChatCompletionBody {
            model: &self.model,
            messages: &request.messages,
            temperature: request.params.temperature,
            max_tokens: request.params.max_tokens,
        };

        tracing::debug!(
            model = %self.model,
            turns = request.messages.len(),
            "sending chat completion request"
        );

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let body = read_success_body(response).await?;
        extract_text(&body)
    }
}
