//! Landing domain: everything about the enrollment page that is not presentation.

pub mod config;
pub mod effects;
pub mod error;
pub mod form;
pub mod location;

pub use config::{LandingConfig, Timings};
pub use effects::{TimerGate, TimerTicket};
pub use error::{DomainError, FieldError};

pub use form::{
    field_ids, validate_field, validate_form, EmailRule, FieldId, FieldKind, FieldSpec,
    FormSchema, FormState, PhoneRule, SelectOption, ValidationReport, ValidationRules,
};

pub use location::{slugify, CitySelection, CountryCityTable, CountryEntry};
