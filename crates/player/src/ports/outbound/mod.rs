//! Outbound ports - Interfaces for external services
//!
//! These ports define the contracts that infrastructure adapters must implement,
//! allowing application services to interact with external systems without
//! depending on concrete implementations.

pub mod platform;
pub mod submission_port;

pub use platform::{DocumentProvider, RandomProvider, SleepProvider, TimeProvider};
pub use submission_port::{EnrollmentSubmissionPort, SubmissionError};

#[cfg(any(test, feature = "testing"))]
pub use submission_port::MockEnrollmentSubmissionPort;
