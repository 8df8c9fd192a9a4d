use serde::{Deserialize, Serialize};

/// Author of a conversation turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Speaker {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationTurn {
    pub speaker: Speaker,
    pub text: String,
}

impl ConversationTurn {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            speaker: Speaker::User,
            text: text.into(),
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            speaker: Speaker::Assistant,
            text: text.into(),
        }
    }
}

/// Ordered, append-only transcript for one widget session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConversationHistory {
    turns: Vec<ConversationTurn>,
}

impl ConversationHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, turn: ConversationTurn) {
        self.turns.push(turn);
    }

    pub fn turns(&self) -> &[ConversationTurn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}

impl FromIterator<ConversationTurn> for ConversationHistory {
    fn from_iter<T: IntoIterator<Item = ConversationTurn>>(iter: T) -> Self {
        Self {
            turns: iter.into_iter().collect(),
        }
    }
}

/// Closed set of in-app destinations the assistant may recommend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavigationTarget {
    Home,
    Appointments,
    Questionnaire,
}

impl NavigationTarget {
    pub fn path(&self) -> &'static str {
        match self {
            NavigationTarget::Home => "/",
            NavigationTarget::Appointments => "/citas",
            NavigationTarget::Questionnaire => "/cuestionario",
        }
    }

    pub fn default_label(&self) -> &'static str {
        match self {
            NavigationTarget::Home => "Ir a Inicio",
            NavigationTarget::Appointments => "Solicitar Cita",
            NavigationTarget::Questionnaire => "Ir al Cuestionario",
        }
    }
}

/// Navigation suggestion attached to a reply. The caller decides whether to follow it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplyAction {
    pub target: NavigationTarget,
    pub label: String,
}

impl ReplyAction {
    pub fn new(target: NavigationTarget, label: impl Into<String>) -> Self {
        Self {
            target,
            label: label.into(),
        }
    }

    pub fn navigate(target: NavigationTarget) -> Self {
        Self::new(target, target.default_label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reply {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<ReplyAction>,
}
