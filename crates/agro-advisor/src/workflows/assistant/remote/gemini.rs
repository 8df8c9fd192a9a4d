use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::{
    parse_envelope, read_success_body, usable_text, CompletionRequest, PromptRole,
    RemoteCompletion, RemoteUnavailable,
};

/// Google `generateContent` client. The conversation is flattened into one text part.
pub struct GeminiCompletion {
    client: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentBody {
    contents: Vec<ContentBody>,
    generation_config: GenerationConfigBody,
}

#[derive(Serialize)]
struct ContentBody {
    parts: Vec<PartBody>,
}

#[derive(Serialize)]
struct PartBody {
    text: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfigBody {
    temperature: f32,
    max_output_tokens: u32,
}

#[derive(Debug, Default, Deserialize)]
struct GenerateContentEnvelope {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Default, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Debug, Default, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Default, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: Option<String>,
}

impl GeminiCompletion {
    pub fn new(client: reqwest::Client, api_key: String, model: String, base_url: String) -> Self {
        Self {
            client,
            api_key,
            model,
            base_url,
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }
}

fn speaker_label(role: PromptRole) -> &'static str {
    match role {
        PromptRole::User => "Usuario",
        PromptRole::Assistant | PromptRole::System => "Asistente",
    }
}

/// System text, a labelled transcript of prior turns, then the pending utterance.
pub(super) fn flatten_prompt(request: &CompletionRequest) -> String {
    let system = request
        .messages
        .iter()
        .filter(|message| message.role == PromptRole::System)
        .map(|message| message.content.as_str())
        .collect::<Vec<_>>()
        .join("\n");

    let dialogue: Vec<_> = request
        .messages
        .iter()
        .filter(|message| message.role != PromptRole::System)
        .collect();

    let (pending, prior) = match dialogue.split_last() {
        Some((last, prior)) => (last.content.as_str(), prior),
        None => ("", &[][..]),
    };

    let transcript = prior
        .iter()
        .map(|message| format!("{}: {}", speaker_label(message.role), message.content))
        .collect::<Vec<_>>()
        .join("\n");

    format!("{system}\n\nConversación previa:\n{transcript}\n\nUsuario: {pending}\nAsistente:")
}

/// `candidates[0].content.parts[0].text`, if present and non-blank.
pub(super) fn extract_text(body: &str) -> Result<Option<String>, RemoteUnavailable> {
    let envelope: GenerateContentEnvelope = parse_envelope(body)?;
    let text = envelope
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content)
        .and_then(|content| content.parts.into_iter().next())
        .and_then(|part| part.text);
    Ok(usable_text(text))
}

#[async_trait]
impl RemoteCompletion for GeminiCompletion {
    fn provider(&self) -> &'static str {
        "gemini"
    }

    async fn complete(
        &self,
        request: &CompletionRequest,
    ) -> Result<Option<String>, RemoteUnavailable> {
        let body = GenerateContentBody {
            contents: vec![ContentBody {
                parts: vec![PartBody {
                    text: flatten_prompt(request),
                }],
            }],
            generation_config: GenerationConfigBody {
                temperature: request.params.temperature,
                max_output_tokens: request.params.max_tokens,
            },
        };

        tracing::debug!(
            model = %self.model,
            turns = request.messages.len(),
            "sending generateContent request"
        );

        let response = self
            .client
            .post(self.endpoint())
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await?;

        let body = read_success_body(response).await?;
        extract_text(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::assistant::domain::{ConversationHistory, ConversationTurn};
    use crate::workflows::assistant::remote::GenerationParams;

    #[test]
    fn flattens_history_into_labelled_transcript() {
        let history: ConversationHistory = vec![
            ConversationTurn::user("hola"),
            ConversationTurn::assistant("¡Hola!"),
        ]
        .into_iter()
        .collect();
        let request =
            CompletionRequest::build("SYS", &history, "¿qué hacen?", GenerationParams::default());

        let prompt = flatten_prompt(&request);

        assert_eq!(
            prompt,
            "SYS\n\nConversación previa:\nUsuario: hola\nAsistente: ¡Hola!\n\nUsuario: ¿qué hacen?\nAsistente:"
        );
    }

    #[test]
    fn extracts_first_candidate_part() {
        let body = r#"{"candidates":[{"content":{"parts":[{"text":"Ofrecemos auditoría."},{"text":"x"}]}}]}"#;
        assert_eq!(
            extract_text(body).expect("valid"),
            Some("Ofrecemos auditoría.".to_string())
        );
    }

    #[test]
    fn blocked_candidates_yield_no_text() {
        let body = r#"{"candidates":[{"finishReason":"SAFETY"}],"promptFeedback":{}}"#;
        assert_eq!(extract_text(body).expect("valid"), None);
    }

    #[test]
    fn generation_config_uses_camel_case() {
        let body = GenerateContentBody {
            contents: Vec::new(),
            generation_config: GenerationConfigBody {
                temperature: 0.5,
                max_output_tokens: 64,
            },
        };
        let json = serde_json::to_value(&body).expect("serializes");
        assert_eq!(json["generationConfig"]["maxOutputTokens"], 64);
    }
}
