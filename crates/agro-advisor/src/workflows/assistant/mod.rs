//! Chat assistant: remote completion with a keyword-table fallback and navigation hints.

pub mod domain;
pub mod fallback;
mod intent;
pub mod picker;
pub mod prompt;
pub mod remote;
pub mod resolver;
pub mod router;
pub mod session;

#[cfg(test)]
mod tests;

pub use domain::{
    ConversationHistory, ConversationTurn, NavigationTarget, Reply, ReplyAction, Speaker,
};
pub use fallback::{FallbackResponder, FallbackRule, DEFAULT_REPLIES, FALLBACK_RULES};
pub use intent::detect_intent;
pub use picker::{FixedPicker, RandomPicker, VariantPicker};
pub use remote::{
    CompletionRequest, GeminiCompletion, GenerationParams, OpenAiCompletion, PromptMessage,
    PromptRole, RemoteCompletion, RemoteUnavailable,
};
pub use resolver::ResponderResolver;
pub use router::assistant_router;
pub use session::ChatSession;
