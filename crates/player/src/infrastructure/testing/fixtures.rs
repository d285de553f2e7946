//! Simple test fixtures used across unit tests.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use landing_domain::{field_ids, CountryCityTable, FieldId, FormSchema, FormState, ValidationRules};
use uuid::Uuid;

use crate::application::dto::SubmissionReceipt;
use crate::application::services::EnrollmentService;
use crate::ports::outbound::EnrollmentSubmissionPort;

/// A form that passes every rule
pub fn valid_form() -> FormState {
    [
        (field_ids::FIRST_NAME, "Ada"),
        (field_ids::LAST_NAME, "Lovelace"),
        (field_ids::EMAIL, "ada@example.com"),
        (field_ids::PHONE, "+1 555-123-4567"),
        (field_ids::COUNTRY, "guyana"),
        (field_ids::CITY, "georgetown"),
        (field_ids::COURSE, "web-development"),
    ]
    .into_iter()
    .fold(FormState::new(), |state, (id, value)| {
        state.with(&FieldId::from_static(id), value)
    })
}

/// A receipt with fixed contents
pub fn receipt() -> SubmissionReceipt {
    SubmissionReceipt::new(
        Uuid::from_u128(0x5eed),
        DateTime::<Utc>::from_timestamp(1_700_000_000, 0).unwrap_or_default(),
    )
}

/// Enrollment service over the default table and rules
pub fn enrollment_service(port: impl EnrollmentSubmissionPort + 'static) -> EnrollmentService {
    EnrollmentService::new(
        FormSchema::enrollment(&CountryCityTable::default()),
        ValidationRules::default(),
        Arc::new(port),
    )
}
