//! Enrollment service - validates the form and hands it to the submission port
//!
//! Depends on the `EnrollmentSubmissionPort` trait, not on the simulated
//! adapter, so a real backend can be swapped in without touching validation.

use std::sync::Arc;

use landing_domain::{
    validate_field, validate_form, FieldError, FieldId, FormSchema, FormState, ValidationReport,
    ValidationRules,
};

use crate::application::dto::{EnrollmentRequest, SubmissionReceipt};
use crate::ports::outbound::{EnrollmentSubmissionPort, SubmissionError};

/// Service for validating and submitting the enrollment form
pub struct EnrollmentService {
    schema: FormSchema,
    rules: ValidationRules,
    submitter: Arc<dyn EnrollmentSubmissionPort>,
}

impl EnrollmentService {
    pub fn new(
        schema: FormSchema,
        rules: ValidationRules,
        submitter: Arc<dyn EnrollmentSubmissionPort>,
    ) -> Self {
        Self {
            schema,
            rules,
            submitter,
        }
    }

    pub fn schema(&self) -> &FormSchema {
        &self.schema
    }

    /// Required check for one field. Unknown ids always pass.
    pub fn check_field(&self, id: &FieldId, value: &str) -> Result<(), FieldError> {
        match self.schema.field(id) {
            Some(field) => validate_field(field, value),
            None => Ok(()),
        }
    }

    /// Full validation of the current values
    pub fn validate(&self, state: &FormState) -> ValidationReport {
        validate_form(&self.schema, state, &self.rules)
    }

    /// Validate and build the request to send
    pub fn prepare(&self, state: &FormState) -> Result<EnrollmentRequest, ValidationReport> {
        self.validate(state).into_result()?;
        Ok(EnrollmentRequest::from_form(&self.schema, state))
    }

    /// Send an already validated request
    pub async fn send(
        &self,
        request: EnrollmentRequest,
    ) -> Result<SubmissionReceipt, SubmissionError> {
        tracing::info!(fields = request.fields.len(), "Submitting enrollment");
        let result = self.submitter.submit(request).await;
        match &result {
            Ok(receipt) => tracing::info!(reference = %receipt.reference, "Enrollment accepted"),
            Err(e) => tracing::warn!(error = %e, "Enrollment submission failed"),
        }
        result
    }
}
