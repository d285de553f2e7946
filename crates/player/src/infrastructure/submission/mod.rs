//! Submission adapters

mod simulated;

pub use simulated::SimulatedSubmitter;
