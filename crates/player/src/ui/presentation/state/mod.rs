//! Presentation state provided through Dioxus context

mod enrollment_state;
mod page_state;

pub use enrollment_state::EnrollmentState;
pub use page_state::PageState;
