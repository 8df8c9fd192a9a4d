use std::sync::OnceLock;

use regex::Regex;

use super::domain::{NavigationTarget, ReplyAction};

/// Keywords that point at one navigation target.
///
/// Generated text is matched against a narrower list than the user's utterance so
/// that incidental words in a model answer ("principal") do not trigger navigation.
#[derive(Debug, Clone, Copy)]
pub(crate) struct IntentRule {
    pub target: NavigationTarget,
    pub utterance_keywords: &'static [&'static str],
    pub reply_keywords: &'static [&'static str],
}

pub(crate) const HOME_KEYWORDS: &[&str] = &["inicio", "home", "principal", "portada"];

pub(crate) const APPOINTMENT_KEYWORDS: &[&str] = &[
    "cita",
    "agendar",
    "reservar",
    "reunión",
    "reunion",
    "videollamada",
];

pub(crate) const QUESTIONNAIRE_KEYWORDS: &[&str] = &[
    "cuestionario",
    "formulario",
    "encuesta",
    "autoevaluación",
    "autoevaluacion",
    "diagnóstico",
    "diagnostico",
];

/// Evaluated in order; the first rule with any hit wins.
pub(crate) const INTENT_RULES: [IntentRule; 3] = [
    IntentRule {
        target: NavigationTarget::Home,
        utterance_keywords: HOME_KEYWORDS,
        reply_keywords: &["inicio", "página principal"],
    },
    IntentRule {
        target: NavigationTarget::Appointments,
        utterance_keywords: APPOINTMENT_KEYWORDS,
        reply_keywords: &["cita", "agendar"],
    },
    IntentRule {
        target: NavigationTarget::Questionnaire,
        utterance_keywords: QUESTIONNAIRE_KEYWORDS,
        reply_keywords: &["cuestionario", "formulario"],
    },
];

/// Whole-word match against a keyword list, tolerating a plural "s"/"es" suffix.
///
/// "cita" matches "citas" but not "capacitación" or "solicitar".
#[derive(Debug, Clone)]
pub(crate) struct KeywordMatcher {
    pattern: Option<Regex>,
}

impl KeywordMatcher {
    pub(crate) fn new(keywords: &[&str]) -> Self {
        let alternatives: Vec<String> = keywords
            .iter()
            .map(|keyword| regex::escape(keyword))
            .collect();
        let source = format!(r"\b(?:{})(?:s|es)?\b", alternatives.join("|"));
        let pattern = Regex::new(&source)
            .map_err(|error| {
                tracing::error!(%error, pattern = %source, "keyword pattern rejected");
            })
            .ok();
        Self { pattern }
    }

    /// Expects lowercase input.
    pub(crate) fn is_match(&self, text: &str) -> bool {
        self.pattern
            .as_ref()
            .is_some_and(|pattern| pattern.is_match(text))
    }
}

struct CompiledIntent {
    target: NavigationTarget,
    utterance: KeywordMatcher,
    reply: KeywordMatcher,
}

fn compiled_intents() -> &'static [CompiledIntent] {
    static COMPILED: OnceLock<Vec<CompiledIntent>> = OnceLock::new();
    COMPILED.get_or_init(|| {
        INTENT_RULES
            .iter()
            .map(|rule| CompiledIntent {
                target: rule.target,
                utterance: KeywordMatcher::new(rule.utterance_keywords),
                reply: KeywordMatcher::new(rule.reply_keywords),
            })
            .collect()
    })
}

/// Best-effort navigation hint for a generated reply.
pub fn detect_intent(utterance: &str, generated: &str) -> Option<ReplyAction> {
    let utterance = utterance.to_lowercase();
    let generated = generated.to_lowercase();

    compiled_intents()
        .iter()
        .find(|intent| {
            intent.utterance.is_match(&utterance) || intent.reply.is_match(&generated)
        })
        .map(|intent| ReplyAction::navigate(intent.target))
}
