//! Form field descriptions
//!
//! A field is described once by a [`FieldSpec`]; its current value lives in
//! [`super::FormState`] and its validity is always derived, never stored.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Well-known field identifiers of the enrollment form
pub mod field_ids {
    pub const FIRST_NAME: &str = "first_name";
    pub const LAST_NAME: &str = "last_name";
    pub const EMAIL: &str = "email";
    pub const PHONE: &str = "phone";
    pub const COUNTRY: &str = "country";
    pub const CITY: &str = "city";
    pub const COURSE: &str = "course";
    pub const MESSAGE: &str = "message";
}

// ============================================================================
// FieldId
// ============================================================================

/// A validated field identifier (non-empty, trimmed)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FieldId(String);

impl FieldId {
    /// Create a new field identifier.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the id is empty after trimming.
    pub fn new(id: impl Into<String>) -> Result<Self, DomainError> {
        let id = id.into();
        let trimmed = id.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("Field id cannot be empty"));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Identifier for a compile-time constant such as those in [`field_ids`].
    pub fn from_static(id: &'static str) -> Self {
        Self(id.to_string())
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for FieldId {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<FieldId> for String {
    fn from(id: FieldId) -> String {
        id.0
    }
}

// ============================================================================
// FieldKind / SelectOption / FieldSpec
// ============================================================================

/// How a field is rendered and which format rule applies to it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Text,
    /// Checked against the email rule when non-empty
    Email,
    /// Checked against the phone rule when non-empty
    Phone,
    Select,
    TextArea,
}

impl FieldKind {
    /// HTML input type for single-line inputs
    pub fn input_type(&self) -> &'static str {
        match self {
            FieldKind::Email => "email",
            FieldKind::Phone => "tel",
            _ => "text",
        }
    }
}

/// An option of a select element
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }

    /// The default empty choice shown at the top of a select
    pub fn placeholder(label: impl Into<String>) -> Self {
        Self::new("", label)
    }
}

/// Description of one form field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSpec {
    pub id: FieldId,
    pub label: String,
    pub kind: FieldKind,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub placeholder: Option<String>,
    /// Static options for select fields. Dependent selects leave this empty.
    #[serde(default)]
    pub options: Vec<SelectOption>,
}

impl FieldSpec {
    pub fn new(id: FieldId, label: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            id,
            label: label.into(),
            kind,
            required: false,
            placeholder: None,
            options: Vec::new(),
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn with_options(mut self, options: Vec<SelectOption>) -> Self {
        self.options = options;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_id_is_trimmed() {
        let id = FieldId::new("  email ").unwrap();
        assert_eq!(id.as_str(), "email");
    }

    #[test]
    fn field_id_rejects_blank() {
        assert!(FieldId::new("   ").is_err());
    }

    #[test]
    fn field_id_deserialization_validates() {
        let parsed: Result<FieldId, _> = serde_json::from_str("\"\"");
        assert!(parsed.is_err());
        let parsed: FieldId = serde_json::from_str("\"phone\"").unwrap();
        assert_eq!(parsed.as_str(), "phone");
    }

    #[test]
    fn input_types_follow_kind() {
        assert_eq!(FieldKind::Email.input_type(), "email");
        assert_eq!(FieldKind::Phone.input_type(), "tel");
        assert_eq!(FieldKind::Text.input_type(), "text");
    }
}
