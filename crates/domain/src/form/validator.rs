//! Pure form validation
//!
//! `(FormSchema, FormState, ValidationRules) -> ValidationReport`. Nothing here
//! touches presentation; the UI only maps the report onto field styling.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::field::{FieldId, FieldKind, FieldSpec};
use super::rules::ValidationRules;
use super::schema::FormSchema;
use super::state::FormState;
use crate::error::FieldError;

/// Validate a single field on its own (used on blur).
///
/// Only the required check runs here; format checks run on submit.
pub fn validate_field(field: &FieldSpec, value: &str) -> Result<(), FieldError> {
    if field.required && value.trim().is_empty() {
        return Err(FieldError::Required);
    }
    Ok(())
}

/// Validate the whole form.
///
/// Each field carries at most one error; a required error wins over a format
/// error. Format rules only apply to non-empty values.
pub fn validate_form(
    schema: &FormSchema,
    state: &FormState,
    rules: &ValidationRules,
) -> ValidationReport {
    let mut report = ValidationReport::default();

    for field in schema.required_fields() {
        if let Err(err) = validate_field(field, state.value(&field.id)) {
            report.insert(field.id.clone(), err);
        }
    }

    for field in schema.fields_of_kind(FieldKind::Email) {
        let value = state.value(&field.id);
        if !value.is_empty() && !rules.email.matches(value) {
            report.insert_if_absent(field.id.clone(), FieldError::InvalidEmail);
        }
    }

    for field in schema.fields_of_kind(FieldKind::Phone) {
        let value = state.value(&field.id);
        if !value.is_empty() && !rules.phone.matches(value) {
            report.insert_if_absent(field.id.clone(), FieldError::InvalidPhone);
        }
    }

    report
}

/// Per-field errors from one validation run
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ValidationReport {
    errors: BTreeMap<FieldId, FieldError>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn error_for(&self, id: &FieldId) -> Option<FieldError> {
        self.errors.get(id).copied()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&FieldId, FieldError)> {
        self.errors.iter().map(|(id, err)| (id, *err))
    }

    /// Consume into a `Result`, `Ok` when nothing failed
    pub fn into_result(self) -> Result<(), ValidationReport> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(self)
        }
    }

    fn insert(&mut self, id: FieldId, err: FieldError) {
        self.errors.insert(id, err);
    }

    fn insert_if_absent(&mut self, id: FieldId, err: FieldError) {
        self.errors.entry(id).or_insert(err);
    }
}

impl std::fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self
            .errors
            .iter()
            .map(|(id, err)| format!("{}: {}", id, err))
            .collect();
        write!(f, "{}", parts.join("; "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::field::field_ids;
    use crate::location::CountryCityTable;

    fn id(s: &str) -> FieldId {
        FieldId::new(s).unwrap()
    }

    fn schema() -> FormSchema {
        FormSchema::enrollment(&CountryCityTable::default())
    }

    fn valid_state() -> FormState {
        FormState::new()
            .with(&id(field_ids::FIRST_NAME), "Ada")
            .with(&id(field_ids::LAST_NAME), "Lovelace")
            .with(&id(field_ids::EMAIL), "user@example.com")
            .with(&id(field_ids::PHONE), "+1 555-123-4567")
            .with(&id(field_ids::COUNTRY), "guyana")
            .with(&id(field_ids::CITY), "georgetown")
            .with(&id(field_ids::COURSE), "web-development")
    }

    #[test]
    fn validate_field_requires_non_blank_value() {
        let s = schema();
        let first = s.field(&id(field_ids::FIRST_NAME)).unwrap();
        assert_eq!(validate_field(first, "   "), Err(FieldError::Required));
        assert_eq!(validate_field(first, "Ada"), Ok(()));
    }

    #[test]
    fn validate_field_passes_empty_optional() {
        let s = schema();
        let message = s.field(&id(field_ids::MESSAGE)).unwrap();
        assert_eq!(validate_field(message, ""), Ok(()));
    }

    #[test]
    fn complete_form_is_valid() {
        let report = validate_form(&schema(), &valid_state(), &ValidationRules::default());
        assert!(report.is_valid(), "unexpected errors: {}", report);
    }

    #[test]
    fn each_empty_required_field_gets_exactly_one_error() {
        let s = schema();
        let report = validate_form(&s, &FormState::new(), &ValidationRules::default());
        assert_eq!(report.len(), s.required_fields().count());
        for field in s.required_fields() {
            assert_eq!(report.error_for(&field.id), Some(FieldError::Required));
        }
        assert_eq!(report.error_for(&id(field_ids::MESSAGE)), None);
    }

    #[test]
    fn filling_a_field_removes_its_error() {
        let s = schema();
        let rules = ValidationRules::default();
        let state = valid_state().with(&id(field_ids::LAST_NAME), "");
        let report = validate_form(&s, &state, &rules);
        assert_eq!(
            report.error_for(&id(field_ids::LAST_NAME)),
            Some(FieldError::Required)
        );

        let state = state.with(&id(field_ids::LAST_NAME), "Lovelace");
        assert!(validate_form(&s, &state, &rules).is_valid());
    }

    #[test]
    fn malformed_email_is_reported() {
        let state = valid_state().with(&id(field_ids::EMAIL), "userexample.com");
        let report = validate_form(&schema(), &state, &ValidationRules::default());
        assert_eq!(report.len(), 1);
        assert_eq!(
            report.error_for(&id(field_ids::EMAIL)),
            Some(FieldError::InvalidEmail)
        );
    }

    #[test]
    fn malformed_phone_is_reported() {
        let state = valid_state().with(&id(field_ids::PHONE), "12345");
        let report = validate_form(&schema(), &state, &ValidationRules::default());
        assert_eq!(
            report.error_for(&id(field_ids::PHONE)),
            Some(FieldError::InvalidPhone)
        );
    }

    #[test]
    fn whitespace_email_reports_required_not_format() {
        let state = valid_state().with(&id(field_ids::EMAIL), "   ");
        let report = validate_form(&schema(), &state, &ValidationRules::default());
        assert_eq!(
            report.error_for(&id(field_ids::EMAIL)),
            Some(FieldError::Required)
        );
        assert_eq!(report.len(), 1);
    }

    #[test]
    fn into_result_maps_validity() {
        let ok = validate_form(&schema(), &valid_state(), &ValidationRules::default());
        assert!(ok.into_result().is_ok());
        let bad = validate_form(&schema(), &FormState::new(), &ValidationRules::default());
        assert!(bad.into_result().is_err());
    }
}
