use std::sync::Arc;

use super::domain::{ConversationHistory, Reply};
use super::fallback::FallbackResponder;
use super::intent::detect_intent;
use super::prompt::{NO_TEXT_PLACEHOLDER, SYSTEM_PROMPT};
use super::remote::{self, CompletionRequest, GenerationParams, RemoteCompletion};
use crate::config::AssistantConfig;

/// Chooses between the remote provider and the local reply table for each turn.
///
/// Remote failures are logged and answered from the fallback table; callers always
/// receive a complete [`Reply`].
#[derive(Clone)]
pub struct ResponderResolver {
    remote: Option<Arc<dyn RemoteCompletion>>,
    fallback: FallbackResponder,
    params: GenerationParams,
}

impl ResponderResolver {
    pub fn new(
        remote: Option<Arc<dyn RemoteCompletion>>,
        fallback: FallbackResponder,
        params: GenerationParams,
    ) -> Self {
        Self {
            remote,
            fallback,
            params,
        }
    }

    /// Resolver that never touches the network.
    pub fn offline(fallback: FallbackResponder) -> Self {
        Self::new(None, fallback, GenerationParams::default())
    }

    pub fn from_config(config: &AssistantConfig) -> Result<Self, reqwest::Error> {
        let remote = remote::from_config(config)?;
        let params = GenerationParams {
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        };
        Ok(Self::new(remote, FallbackResponder::randomized(), params))
    }

    /// Name of the configured provider, or `None` in fallback-only mode.
    pub fn provider(&self) -> Option<&'static str> {
        self.remote.as_ref().map(|remote| remote.provider())
    }

    pub async fn get_reply(&self, utterance: &str, history: &ConversationHistory) -> Reply {
        let Some(remote) = &self.remote else {
            return self.fallback.respond(utterance);
        };

        let request = CompletionRequest::build(SYSTEM_PROMPT, history, utterance, self.params);
        match remote.complete(&request).await {
            Ok(text) => {
                let text = remote::usable_text(text)
                    .unwrap_or_else(|| NO_TEXT_PLACEHOLDER.to_string());
                let action = detect_intent(utterance, &text);
                Reply { text, action }
            }
            Err(error) => {
                tracing::warn!(
                    provider = remote.provider(),
                    %error,
                    "remote completion unavailable, answering from fallback table"
                );
                self.fallback.respond(utterance)
            }
        }
    }
}
