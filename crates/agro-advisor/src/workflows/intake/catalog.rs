use serde::Serialize;

/// One bookable offering shown on the appointment form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceOffering {
    pub id: String,
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ServiceCatalog {
    services: Vec<ServiceOffering>,
}

impl ServiceCatalog {
    pub fn new(services: Vec<ServiceOffering>) -> Self {
        Self { services }
    }

    /// Offerings of the agricultural consultancy.
    pub fn agro() -> Self {
        let offering = |id: &str, name: &str, description: &str| ServiceOffering {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
        };

        Self::new(vec![
            offering(
                "consultoria",
                "Consultoría Financiera",
                "Asesoramiento estratégico para optimizar las finanzas de la operación agrícola",
            ),
            offering(
                "auditoria",
                "Auditoría y Control de Gestión",
                "Revisión exhaustiva de procesos, costos y estados financieros",
            ),
            offering(
                "licencias",
                "Licencias de Software con IA",
                "Monitoreo y control de la operación con inteligencia artificial",
            ),
            offering(
                "planificacion",
                "Planificación Fiscal",
                "Estrategias para optimizar la carga tributaria de manera legal",
            ),
            offering(
                "contabilidad",
                "Servicios Contables",
                "Gestión completa de la contabilidad y registros financieros",
            ),
            offering(
                "asesoria",
                "Asesoría Técnica",
                "Acompañamiento especializado en gestión agrícola sustentable",
            ),
            offering(
                "capacitacion",
                "Capacitación",
                "Programas de formación para equipos de campo y administración",
            ),
        ])
    }

    pub fn services(&self) -> &[ServiceOffering] {
        &self.services
    }

    pub fn get(&self, id: &str) -> Option<&ServiceOffering> {
        self.services.iter().find(|service| service.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }
}

impl Default for ServiceCatalog {
    fn default() -> Self {
        Self::agro()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn agro_catalog_ids_are_unique() {
        let catalog = ServiceCatalog::agro();
        let mut ids: Vec<&str> = catalog.services().iter().map(|s| s.id.as_str()).collect();
        let total = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), total);
        assert!(catalog.contains("auditoria"));
        assert!(!catalog.contains("seguros"));
    }
}
