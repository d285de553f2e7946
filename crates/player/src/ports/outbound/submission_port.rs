//! Enrollment Submission Port - asynchronous hand-off of a validated form
//!
//! The page ships with a simulated adapter; a real backend only needs another
//! implementation of this trait. Validation never happens behind this port.

use thiserror::Error;

use crate::application::dto::{EnrollmentRequest, SubmissionReceipt};

/// Errors a submission adapter can report
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SubmissionError {
    #[error("Submission rejected: {0}")]
    Rejected(String),

    #[error("Submission service unavailable: {0}")]
    Unavailable(String),
}

#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
pub trait EnrollmentSubmissionPort: Send + Sync {
    /// Submit a validated enrollment request
    async fn submit(&self, request: EnrollmentRequest) -> Result<SubmissionReceipt, SubmissionError>;
}
