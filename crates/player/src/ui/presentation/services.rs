//! Service providers for the presentation layer
//!
//! The composition root builds a [`Services`] bundle and places it in the
//! Dioxus context. Components reach services through the `use_*` hooks and
//! never see the infrastructure adapters behind them.

use dioxus::prelude::*;
use std::sync::Arc;

use landing_domain::{FormSchema, LandingConfig};

use crate::application::services::EnrollmentService;
use crate::ports::outbound::EnrollmentSubmissionPort;

/// Everything the UI needs from the application layer
#[derive(Clone)]
pub struct Services {
    pub config: Arc<LandingConfig>,
    pub enrollment: Arc<EnrollmentService>,
}

impl Services {
    /// Build the bundle from the loaded configuration and a submission adapter
    pub fn new(config: LandingConfig, submitter: Arc<dyn EnrollmentSubmissionPort>) -> Self {
        let schema = FormSchema::enrollment(&config.country_cities);
        let enrollment = EnrollmentService::new(schema, config.rules, submitter);
        Self {
            config: Arc::new(config),
            enrollment: Arc::new(enrollment),
        }
    }
}

/// Hook to access the EnrollmentService from context
pub fn use_enrollment_service() -> Arc<EnrollmentService> {
    let services = use_context::<Services>();
    services.enrollment.clone()
}

/// Hook to access the page configuration from context
pub fn use_landing_config() -> Arc<LandingConfig> {
    let services = use_context::<Services>();
    services.config.clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::outbound::MockEnrollmentSubmissionPort;
    use landing_domain::{field_ids, FieldId};

    #[test]
    fn schema_follows_configured_countries() {
        let json = r#"{"country_cities":{"countries":[
            {"key":"ghana","label":"Ghana","cities":["Accra"]},
            {"key":"other","label":"Other","cities":["Please specify in comments"]}
        ]}}"#;
        let config = LandingConfig::from_json(json).unwrap();
        let services = Services::new(config, Arc::new(MockEnrollmentSubmissionPort::new()));

        let country = services
            .enrollment
            .schema()
            .field(&FieldId::new(field_ids::COUNTRY).unwrap())
            .unwrap();
        let keys: Vec<_> = country.options.iter().map(|o| o.value.as_str()).collect();
        assert_eq!(keys, vec!["ghana", "other"]);
    }
}
