//! Enrollment form state shared between the form and its overlay

use dioxus::prelude::*;

use crate::application::services::EnrollmentForm;

#[derive(Clone, Copy)]
pub struct EnrollmentState {
    pub form: Signal<EnrollmentForm>,
}

impl EnrollmentState {
    /// Create a new EnrollmentState with an empty form
    pub fn new() -> Self {
        Self {
            form: Signal::new(EnrollmentForm::new()),
        }
    }
}

impl Default for EnrollmentState {
    fn default() -> Self {
        Self::new()
    }
}
