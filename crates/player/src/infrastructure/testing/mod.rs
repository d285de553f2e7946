//! Test-only helpers shared by unit tests across layers.

pub mod fixtures;
