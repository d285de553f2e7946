//! Reusable UI components

pub mod common;
pub mod enrollment;
pub mod hero;
pub mod layout;
