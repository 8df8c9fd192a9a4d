use std::sync::Arc;

use super::domain::{ConversationHistory, ConversationTurn, Reply};
use super::resolver::ResponderResolver;

/// In-memory conversation for one widget session.
pub struct ChatSession {
    resolver: Arc<ResponderResolver>,
    history: ConversationHistory,
}

impl ChatSession {
    pub fn new(resolver: Arc<ResponderResolver>) -> Self {
        Self {
            resolver,
            history: ConversationHistory::new(),
        }
    }

    pub fn history(&self) -> &ConversationHistory {
        &self.history
    }

    /// Resolves a reply, then records the exchange. The resolver only sees prior turns.
    pub async fn send(&mut self, utterance: &str) -> Reply {
        let reply = self.resolver.get_reply(utterance, &self.history).await;
        self.history.push(ConversationTurn::user(utterance));
        self.history.push(ConversationTurn::assistant(reply.text.clone()));
        reply
    }
}
