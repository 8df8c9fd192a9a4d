pub mod assistant;
pub mod intake;
pub mod questionnaire;
