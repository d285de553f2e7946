//! Enrollment form, its fields and the confirmation overlay

mod enrollment_form;
mod form_field;
mod success_overlay;

pub use enrollment_form::EnrollmentFormView;
pub use form_field::FormField;
pub use success_overlay::SuccessOverlay;
