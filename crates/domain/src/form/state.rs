//! Current values of a form

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::field::FieldId;

/// Current value of every touched field. Untouched fields read as empty.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FormState {
    values: BTreeMap<FieldId, String>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter, handy for tests and fixtures
    pub fn with(mut self, id: &FieldId, value: impl Into<String>) -> Self {
        self.set(id, value);
        self
    }

    pub fn set(&mut self, id: &FieldId, value: impl Into<String>) {
        self.values.insert(id.clone(), value.into());
    }

    /// Current value, empty when the field was never set
    pub fn value(&self, id: &FieldId) -> &str {
        self.values.get(id).map(String::as_str).unwrap_or("")
    }

    /// Reset every field to empty
    pub fn clear(&mut self) {
        self.values.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.values.values().all(|v| v.is_empty())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&FieldId, &str)> {
        self.values.iter().map(|(k, v)| (k, v.as_str()))
    }
}
