//! Enrollment form: field descriptions, values, rules and validation

mod field;
mod rules;
mod schema;
mod state;
mod validator;

pub use field::{field_ids, FieldId, FieldKind, FieldSpec, SelectOption};
pub use rules::{EmailRule, PhoneRule, ValidationRules};
pub use schema::FormSchema;
pub use state::FormState;
pub use validator::{validate_field, validate_form, ValidationReport};
