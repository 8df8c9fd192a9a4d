//! Library backing the agricultural consultancy site: harvest questionnaire scoring,
//! the chat assistant, and contact-form intake.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
