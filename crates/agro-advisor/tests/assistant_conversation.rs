//! Integration scenarios for the chat assistant through its public facade.

mod common {
    use std::sync::Arc;

    use agro_advisor::workflows::assistant::{
        CompletionRequest, FallbackResponder, GenerationParams, RandomPicker, RemoteCompletion,
        RemoteUnavailable, ResponderResolver,
    };
    use async_trait::async_trait;
    use reqwest::StatusCode;

    /// Provider that is always down.
    pub(super) struct Outage;

    #[async_trait]
    impl RemoteCompletion for Outage {
        fn provider(&self) -> &'static str {
            "outage"
        }

        async fn complete(
            &self,
            _request: &CompletionRequest,
        ) -> Result<Option<String>, RemoteUnavailable> {
            Err(RemoteUnavailable::Status(StatusCode::SERVICE_UNAVAILABLE))
        }
    }

    pub(super) fn resolver(remote: Option<Arc<dyn RemoteCompletion>>, seed: u64) -> ResponderResolver {
        ResponderResolver::new(
            remote,
            FallbackResponder::new(Arc::new(RandomPicker::seeded(seed))),
            GenerationParams::default(),
        )
    }
}

use std::sync::Arc;

use agro_advisor::workflows::assistant::{ChatSession, ConversationHistory, NavigationTarget};

#[tokio::test]
async fn agendar_targets_appointments_without_remote() {
    for seed in 0..8 {
        let reply = common::resolver(None, seed)
            .get_reply("Me gustaría agendar una reunión", &ConversationHistory::new())
            .await;

        let action = reply.action.expect("navigation action");
        assert_eq!(action.target, NavigationTarget::Appointments);
        assert_eq!(action.target.path(), "/citas");
    }
}

#[tokio::test]
async fn outage_still_produces_replies() {
    let resolver = common::resolver(Some(Arc::new(common::Outage)), 7);
    assert_eq!(resolver.provider(), Some("outage"));

    for utterance in ["hola", "¿qué servicios ofrecen?", "asdfgh", "quiero el cuestionario"] {
        let reply = resolver
            .get_reply(utterance, &ConversationHistory::new())
            .await;
        assert!(!reply.text.trim().is_empty(), "empty reply for {utterance}");
    }
}

#[tokio::test]
async fn appointment_keyword_wins_tie_with_questionnaire() {
    let reply = common::resolver(None, 3)
        .get_reply(
            "¿Puedo reservar una cita después del formulario?",
            &ConversationHistory::new(),
        )
        .await;

    assert_eq!(
        reply.action.map(|action| action.target),
        Some(NavigationTarget::Appointments)
    );
}

#[tokio::test]
async fn session_keeps_alternating_history() {
    let mut session = ChatSession::new(Arc::new(common::resolver(None, 1)));

    session.send("hola").await;
    let reply = session.send("quiero ir al inicio").await;

    assert_eq!(
        reply.action.map(|action| action.target),
        Some(NavigationTarget::Home)
    );
    assert_eq!(session.history().len(), 4);
}
