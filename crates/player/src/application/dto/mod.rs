//! Application DTOs

mod enrollment;

pub use enrollment::{EnrollmentRequest, SubmissionReceipt};
