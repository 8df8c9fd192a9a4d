use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use super::catalog::ServiceCatalog;
use super::validation::{optional, required, required_email, ValidationErrors};

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M";

/// Raw appointment form as posted by the site.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppointmentRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: Option<String>,
    pub preferred_date: Option<String>,
    pub preferred_time: Option<String>,
    pub message: Option<String>,
    pub selected_services: Vec<String>,
}

/// Appointment request with trimmed text, parsed schedule, and known service ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidatedAppointment {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: Option<String>,
    pub preferred_date: Option<NaiveDate>,
    pub preferred_time: Option<NaiveTime>,
    pub message: Option<String>,
    pub services: Vec<String>,
}

impl AppointmentRequest {
    pub fn validate(&self, catalog: &ServiceCatalog) -> Result<ValidatedAppointment, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let name = required(&mut errors, "name", &self.name, "El nombre es requerido");
        let email = required_email(&mut errors, &self.email);
        let phone = required(&mut errors, "phone", &self.phone, "El teléfono es requerido");

        let preferred_date = optional(self.preferred_date.as_deref()).and_then(|raw| {
            NaiveDate::parse_from_str(&raw, DATE_FORMAT)
                .map_err(|_| errors.add("preferred_date", "La fecha preferida no es válida"))
                .ok()
        });
        let preferred_time = optional(self.preferred_time.as_deref()).and_then(|raw| {
            NaiveTime::parse_from_str(&raw, TIME_FORMAT)
                .map_err(|_| errors.add("preferred_time", "La hora preferida no es válida"))
                .ok()
        });

        let mut services: Vec<String> = Vec::with_capacity(self.selected_services.len());
        for id in self.selected_services.iter().map(|id| id.trim()) {
            if id.is_empty() || services.iter().any(|seen| seen == id) {
                continue;
            }
            if !catalog.contains(id) {
                errors.add("selected_services", format!("Servicio desconocido: {id}"));
                continue;
            }
            services.push(id.to_string());
        }
        if services.is_empty() {
            errors.add("selected_services", "Debe seleccionar al menos un servicio");
        }

        errors.into_result(ValidatedAppointment {
            name,
            email,
            phone,
            company: optional(self.company.as_deref()),
            preferred_date,
            preferred_time,
            message: optional(self.message.as_deref()),
            services,
        })
    }
}

/// Company registration form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompanyProfile {
    pub company_name: String,
    pub contact_name: String,
    pub email: String,
    pub phone: String,
    pub industry: String,
    /// Free-form size band such as "11-50".
    pub employees: Option<String>,
    pub description: Option<String>,
}

impl CompanyProfile {
    /// Returns a trimmed copy when every required field is present.
    pub fn validate(&self) -> Result<CompanyProfile, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let company_name = required(
            &mut errors,
            "company_name",
            &self.company_name,
            "El nombre de la empresa es requerido",
        );
        let contact_name = required(
            &mut errors,
            "contact_name",
            &self.contact_name,
            "El nombre de contacto es requerido",
        );
        let email = required_email(&mut errors, &self.email);
        let phone = required(&mut errors, "phone", &self.phone, "El teléfono es requerido");
        let industry = required(
            &mut errors,
            "industry",
            &self.industry,
            "La industria es requerida",
        );

        errors.into_result(CompanyProfile {
            company_name,
            contact_name,
            email,
            phone,
            industry,
            employees: optional(self.employees.as_deref()),
            description: optional(self.description.as_deref()),
        })
    }
}
