//! Application services for the Player
//!
//! Use-case logic sits here, between the UI components and the outbound
//! ports. Services depend on port traits only.

mod enrollment_form;
mod enrollment_service;

pub use enrollment_form::{
    EnrollmentForm, SubmitPhase, CITY_PLACEHOLDER, SUBMIT_BUSY_LABEL, SUBMIT_LABEL,
};
pub use enrollment_service::EnrollmentService;
