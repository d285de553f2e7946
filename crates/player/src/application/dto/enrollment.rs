//! Enrollment request/receipt DTOs exchanged with the submission port

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

use landing_domain::{FormSchema, FormState};

/// A validated form, ready to hand to a submission adapter
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EnrollmentRequest {
    /// Trimmed value of every schema field, keyed by field id.
    /// Optional fields left blank are omitted.
    pub fields: BTreeMap<String, String>,
}

impl EnrollmentRequest {
    pub fn from_form(schema: &FormSchema, state: &FormState) -> Self {
        let fields = schema
            .fields
            .iter()
            .filter_map(|field| {
                let value = state.value(&field.id).trim();
                if value.is_empty() {
                    None
                } else {
                    Some((field.id.to_string(), value.to_string()))
                }
            })
            .collect();
        Self { fields }
    }

    pub fn get(&self, field_id: &str) -> Option<&str> {
        self.fields.get(field_id).map(String::as_str)
    }
}

/// Acknowledgement returned by a successful submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionReceipt {
    pub reference: Uuid,
    pub received_at: DateTime<Utc>,
}

impl SubmissionReceipt {
    pub fn new(reference: Uuid, received_at: DateTime<Utc>) -> Self {
        Self {
            reference,
            received_at,
        }
    }

    /// Receipt stamped at the given Unix time, with a fresh reference
    pub fn issued_at_unix(secs: u64) -> Self {
        let received_at = i64::try_from(secs)
            .ok()
            .and_then(|s| DateTime::<Utc>::from_timestamp(s, 0))
            .unwrap_or_default();
        Self::new(Uuid::new_v4(), received_at)
    }

    /// Short reference shown to the user
    pub fn short_reference(&self) -> String {
        self.reference.simple().to_string()[..8].to_uppercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use landing_domain::{field_ids, CountryCityTable, FieldId};

    #[test]
    fn request_contains_trimmed_non_empty_values() {
        let schema = FormSchema::enrollment(&CountryCityTable::default());
        let state = FormState::new()
            .with(&FieldId::new(field_ids::FIRST_NAME).unwrap(), "  Ada ")
            .with(&FieldId::new(field_ids::MESSAGE).unwrap(), "   ");

        let request = EnrollmentRequest::from_form(&schema, &state);
        assert_eq!(request.get(field_ids::FIRST_NAME), Some("Ada"));
        assert_eq!(request.get(field_ids::MESSAGE), None);
    }

    #[test]
    fn request_serializes_as_flat_field_map() {
        let schema = FormSchema::enrollment(&CountryCityTable::default());
        let state = FormState::new().with(&FieldId::new(field_ids::EMAIL).unwrap(), "a@b.co");

        let json = serde_json::to_value(EnrollmentRequest::from_form(&schema, &state)).unwrap();
        assert_eq!(json, serde_json::json!({ "fields": { "email": "a@b.co" } }));
    }

    #[test]
    fn receipt_timestamp_and_reference() {
        let receipt = SubmissionReceipt::issued_at_unix(1_700_000_000);
        assert_eq!(receipt.received_at.timestamp(), 1_700_000_000);
        assert_eq!(receipt.short_reference().len(), 8);
    }
}
