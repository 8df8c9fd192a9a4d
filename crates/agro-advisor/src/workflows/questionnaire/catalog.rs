use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::scoring::{RatingScale, RatingSheet};

/// Anchor captions shown at both ends of a question's scale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScaleLabels {
    pub min: String,
    pub max: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub text: String,
    pub scale: RatingScale,
    pub labels: ScaleLabels,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionCategory {
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub questions: Vec<Question>,
}

/// Ordered set of categories; question order is category order, then declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Questionnaire {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub categories: Vec<QuestionCategory>,
}

/// Result of matching an answer sheet against the catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CompletenessReport {
    pub missing: Vec<String>,
    pub unknown: Vec<String>,
}

impl CompletenessReport {
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty() && self.unknown.is_empty()
    }
}

impl Questionnaire {
    /// Harvest-process self-assessment offered on the public site.
    pub fn harvest() -> Self {
        let question = |id: &str, text: &str| Question {
            id: id.to_string(),
            text: text.to_string(),
            scale: RatingScale::LIKERT_FIVE,
            labels: ScaleLabels {
                min: "Muy deficiente".to_string(),
                max: "Excelente".to_string(),
            },
        };

        let category = |id: &str, title: &str, questions: Vec<Question>| QuestionCategory {
            id: id.to_string(),
            title: title.to_string(),
            description: None,
            questions,
        };

        Self {
            id: "cosecha".to_string(),
            title: "Cuestionario de Evaluación - Cosecha".to_string(),
            subtitle: "Por favor, responda las siguientes preguntas sobre el proceso de cosecha \
                       usando la escala del 1 al 5"
                .to_string(),
            categories: vec![
                category(
                    "procedimientos",
                    "Procedimientos y capacitación",
                    vec![
                        question(
                            "q1",
                            "¿La empresa cuenta con procedimientos documentados para la etapa de cosecha?",
                        ),
                        question(
                            "q2",
                            "¿El personal involucrado en la cosecha recibe capacitación formal sobre buenas prácticas agrícolas y seguridad laboral?",
                        ),
                    ],
                ),
                category(
                    "control",
                    "Control de calidad y costos",
                    vec![
                        question(
                            "q3",
                            "¿Existen mecanismos de control para supervisar la calidad de la fruta durante la cosecha?",
                        ),
                        question(
                            "q4",
                            "¿Se lleva un registro actualizado de los costos asociados a la mano de obra y materiales utilizados en la cosecha?",
                        ),
                    ],
                ),
                category(
                    "planificacion",
                    "Planificación y riesgos",
                    vec![
                        question(
                            "q5",
                            "¿Se realiza una planificación previa de recursos (equipos, personal y tiempo) para el proceso de cosecha?",
                        ),
                        question(
                            "q6",
                            "¿La empresa identifica y evalúa los principales riesgos operativos durante la cosecha (climáticos, técnicos o de gestión)?",
                        ),
                        question(
                            "q7",
                            "¿Existen medidas de prevención y respuesta ante contingencias durante la cosecha?",
                        ),
                    ],
                ),
                category(
                    "cumplimiento",
                    "Trazabilidad y mejora continua",
                    vec![
                        question(
                            "q8",
                            "¿Se controla la trazabilidad del producto desde el campo hasta el centro de acopio o packing?",
                        ),
                        question(
                            "q9",
                            "¿El proceso de cosecha cumple con las normativas y estándares de calidad exigidos por el mercado?",
                        ),
                        question(
                            "q10",
                            "¿Se realiza una evaluación posterior de los resultados obtenidos para detectar oportunidades de mejora?",
                        ),
                    ],
                ),
            ],
        }
    }

    pub fn questions(&self) -> impl Iterator<Item = &Question> {
        self.categories
            .iter()
            .flat_map(|category| category.questions.iter())
    }

    pub fn question_count(&self) -> usize {
        self.questions().count()
    }

    /// Missing ids follow catalog order; unknown ids are sorted.
    pub fn check_complete(&self, ratings: &RatingSheet) -> CompletenessReport {
        let known: BTreeSet<&str> = self.questions().map(|q| q.id.as_str()).collect();

        let missing = self
            .questions()
            .filter(|q| !ratings.contains_key(&q.id))
            .map(|q| q.id.clone())
            .collect();

        let unknown: BTreeSet<&String> = ratings
            .keys()
            .filter(|id| !known.contains(id.as_str()))
            .collect();

        CompletenessReport {
            missing,
            unknown: unknown.into_iter().cloned().collect(),
        }
    }
}
