//! Unified error types for the domain layer
//!
//! `DomainError` covers construction and configuration failures.
//! `FieldError` is the user-facing taxonomy surfaced inline next to a form field.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Validation failed (e.g., invalid field values)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Configuration is structurally invalid
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Parse error (for value objects and JSON input)
    #[error("Parse error: {0}")]
    Parse(String),
}

impl DomainError {
    /// Creates a validation error for business rule violations.
    ///
    /// # Example
    /// ```ignore
    /// if key.trim().is_empty() {
    ///     return Err(DomainError::validation("Field id cannot be empty"));
    /// }
    /// ```
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

impl From<serde_json::Error> for DomainError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

/// A single problem with a form field, shown next to the field.
///
/// The `Display` output is the exact message rendered in the page.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldError {
    /// Required field is empty (after trimming)
    #[error("This field is required")]
    Required,

    /// Email field does not look like an address
    #[error("Please enter a valid email address")]
    InvalidEmail,

    /// Phone field does not look like a phone number
    #[error("Please enter a valid phone number")]
    InvalidPhone,
}

impl FieldError {
    /// Message shown to the user for this error
    pub fn message(&self) -> String {
        self.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_error_messages_match_page_copy() {
        assert_eq!(FieldError::Required.message(), "This field is required");
        assert_eq!(
            FieldError::InvalidEmail.message(),
            "Please enter a valid email address"
        );
        assert_eq!(
            FieldError::InvalidPhone.message(),
            "Please enter a valid phone number"
        );
    }

    #[test]
    fn domain_error_from_json_is_parse() {
        let err = serde_json::from_str::<u32>("nope").unwrap_err();
        assert!(matches!(DomainError::from(err), DomainError::Parse(_)));
    }
}
