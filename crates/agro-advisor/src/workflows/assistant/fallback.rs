use std::sync::Arc;

use super::domain::{NavigationTarget, Reply, ReplyAction};
use super::intent::{KeywordMatcher, APPOINTMENT_KEYWORDS, HOME_KEYWORDS, QUESTIONNAIRE_KEYWORDS};
use super::picker::{RandomPicker, VariantPicker};

/// One row of the local reply table.
#[derive(Debug, Clone, Copy)]
pub struct FallbackRule {
    pub name: &'static str,
    pub keywords: &'static [&'static str],
    pub variants: &'static [&'static str],
    pub action: Option<(NavigationTarget, &'static str)>,
}

impl FallbackRule {
    fn action(&self) -> Option<ReplyAction> {
        self.action
            .map(|(target, label)| ReplyAction::new(target, label))
    }
}

/// Navigation first, then service information, greetings, help, and company info.
pub const FALLBACK_RULES: &[FallbackRule] = &[
    FallbackRule {
        name: "home",
        keywords: HOME_KEYWORDS,
        variants: &[
            "Te puedo llevar a la página de inicio donde encontrarás información sobre nuestros servicios.",
            "En la página de inicio verás quiénes somos y cómo apoyamos al sector agrícola. ¿Vamos?",
            "Claro, desde el inicio puedes recorrer nuestros servicios de auditoría, software y capacitación.",
        ],
        action: Some((NavigationTarget::Home, "Ir a Inicio")),
    },
    FallbackRule {
        name: "appointments",
        keywords: APPOINTMENT_KEYWORDS,
        variants: &[
            "Puedo ayudarte a solicitar una cita. Te llevaré al formulario de citas.",
            "¡Perfecto! Agenda una videollamada con nuestro equipo desde el formulario de citas.",
            "Con gusto coordinamos una reunión. Completa el formulario y te contactaremos pronto.",
        ],
        action: Some((NavigationTarget::Appointments, "Solicitar Cita")),
    },
    FallbackRule {
        name: "questionnaire",
        keywords: QUESTIONNAIRE_KEYWORDS,
        variants: &[
            "Te puedo ayudar a completar nuestro cuestionario. Te llevaré al formulario.",
            "Nuestro cuestionario de cosecha toma pocos minutos y entrega un puntaje de 0 a 100.",
            "Evalúa tu proceso de cosecha con nuestro cuestionario y recibe recomendaciones al instante.",
        ],
        action: Some((NavigationTarget::Questionnaire, "Ir al Cuestionario")),
    },
    FallbackRule {
        name: "services",
        keywords: &["servicio", "qué ofrecen", "que ofrecen", "qué hacen", "que hacen"],
        variants: &[
            "Ofrecemos servicios profesionales de auditoría, control de gestión, licencias de software con IA, y capacitaciones especializadas para el sector agrícola. ¿Te gustaría conocer más detalles sobre algún servicio en particular?",
            "Trabajamos en tres líneas: auditoría y control de gestión, software de monitoreo con inteligencia artificial, y capacitaciones y asesorías técnicas. ¿Cuál te interesa?",
        ],
        action: None,
    },
    FallbackRule {
        name: "audit",
        keywords: &["auditoría", "auditoria", "control de gestión", "control de gestion"],
        variants: &[
            "Nuestros servicios de auditoría incluyen evaluación de procesos, control financiero y reportes personalizados. ¿Te gustaría solicitar más información o una cita?",
            "Auditamos procesos agrícolas de punta a punta: costos, cumplimiento normativo y control de gestión. Podemos revisarlo juntos en una cita.",
        ],
        action: Some((NavigationTarget::Appointments, "Solicitar Información")),
    },
    FallbackRule {
        name: "software",
        keywords: &["software", "licencia", "inteligencia artificial", "monitoreo"],
        variants: &[
            "Nuestras licencias de software con IA permiten monitorear y controlar la operación agrícola en tiempo real. ¿Quieres una demostración?",
            "El software de monitoreo con inteligencia artificial detecta desviaciones en costos y rendimiento. Podemos mostrártelo en una videollamada.",
        ],
        action: Some((NavigationTarget::Appointments, "Solicitar Información")),
    },
    FallbackRule {
        name: "training",
        keywords: &["capacitación", "capacitacion", "curso", "asesoría", "asesoria"],
        variants: &[
            "Diseñamos capacitaciones y asesorías técnicas a la medida de tu equipo agrícola. ¿Te gustaría coordinar una reunión?",
            "Nuestras capacitaciones cubren buenas prácticas agrícolas, gestión de costos y uso de herramientas digitales.",
        ],
        action: Some((NavigationTarget::Appointments, "Solicitar Información")),
    },
    FallbackRule {
        name: "greeting",
        keywords: &["hola", "buenos días", "buenos dias", "buenas tardes", "buenas noches", "saludos"],
        variants: &[
            "¡Hola! Me alegra saludarte. ¿En qué puedo ayudarte hoy? Puedo ayudarte a navegar por nuestro sitio, conocer nuestros servicios o agendar una cita.",
            "¡Hola! Bienvenido. Cuéntame qué necesitas: información de servicios, el cuestionario o una cita.",
            "¡Saludos! Estoy aquí para orientarte sobre nuestra consultoría agrícola. ¿Qué te gustaría saber?",
        ],
        action: None,
    },
    FallbackRule {
        name: "help",
        keywords: &["ayuda", "ayúdame", "ayudame", "help"],
        variants: &[
            "Puedo ayudarte a:\n• Navegar por nuestro sitio web\n• Conocer nuestros servicios\n• Agendar una cita\n• Completar el cuestionario\n• Obtener información sobre nuestra empresa\n\n¿Qué te gustaría hacer?",
            "Claro que sí. Puedo explicarte nuestros servicios, llevarte al cuestionario de cosecha o ayudarte a solicitar una cita. ¿Por dónde empezamos?",
        ],
        action: None,
    },
    FallbackRule {
        name: "company",
        keywords: &[
            "empresa",
            "misión",
            "mision",
            "visión",
            "vision",
            "valores",
            "quiénes son",
            "quienes son",
            "sostenibilidad",
        ],
        variants: &[
            "Somos una consultoría especializada en el sector agrícola chileno. Nuestra misión es entregar auditoría, control de gestión y asesoría estratégica integrando tecnología, inteligencia artificial y sostenibilidad.",
            "Queremos consolidarnos al 2030 como la consultoría líder en Chile en auditoría y gestión agrícola sustentable. Nos guían la ética profesional, la innovación, la sostenibilidad, la excelencia y la colaboración.",
        ],
        action: None,
    },
];

pub const DEFAULT_REPLIES: &[&str] = &[
    "Entiendo tu consulta. Puedo ayudarte a navegar por nuestro sitio, conocer nuestros servicios de auditoría y consultoría, o agendar una cita. ¿Qué te gustaría hacer?",
    "Gracias por escribirnos. ¿Te interesa conocer nuestros servicios, completar el cuestionario de cosecha o agendar una cita?",
    "No estoy seguro de haber entendido. Puedo orientarte sobre auditoría agrícola, software con IA o capacitaciones, o conectarte con nuestro equipo.",
];

/// Deterministic keyword table used without a remote provider or after it fails.
#[derive(Clone)]
pub struct FallbackResponder {
    rules: &'static [FallbackRule],
    matchers: Arc<[KeywordMatcher]>,
    defaults: &'static [&'static str],
    picker: Arc<dyn VariantPicker>,
}

impl FallbackResponder {
    pub fn new(picker: Arc<dyn VariantPicker>) -> Self {
        Self {
            rules: FALLBACK_RULES,
            matchers: FALLBACK_RULES
                .iter()
                .map(|rule| KeywordMatcher::new(rule.keywords))
                .collect(),
            defaults: DEFAULT_REPLIES,
            picker,
        }
    }

    pub fn randomized() -> Self {
        Self::new(Arc::new(RandomPicker::from_entropy()))
    }

    /// First rule whose keywords appear in the utterance.
    pub fn matched_rule(&self, utterance: &str) -> Option<&'static FallbackRule> {
        let lowered = utterance.trim().to_lowercase();
        self.rules
            .iter()
            .zip(self.matchers.iter())
            .find(|(_, matcher)| matcher.is_match(&lowered))
            .map(|(rule, _)| rule)
    }

    pub fn respond(&self, utterance: &str) -> Reply {
        match self.matched_rule(utterance) {
            Some(rule) => Reply {
                text: self.choose(rule.variants),
                action: rule.action(),
            },
            None => Reply {
                text: self.choose(self.defaults),
                action: None,
            },
        }
    }

    fn choose(&self, variants: &[&str]) -> String {
        let index = self.picker.pick(variants.len());
        variants
            .get(index)
            .or_else(|| variants.first())
            .map(|text| text.to_string())
            .unwrap_or_default()
    }
}
