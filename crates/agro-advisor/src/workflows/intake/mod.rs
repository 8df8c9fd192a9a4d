//! Contact forms submitted from the public site: appointment requests and company profiles.
//!
//! The service validates and acknowledges submissions; nothing is persisted.

pub mod catalog;
pub mod forms;
pub mod router;
pub mod validation;

#[cfg(test)]
mod tests;

pub use catalog::{ServiceCatalog, ServiceOffering};
pub use forms::{AppointmentRequest, CompanyProfile, ValidatedAppointment};
pub use router::{intake_router, IntakeReceipt};
pub use validation::{is_valid_email, ValidationErrors};
