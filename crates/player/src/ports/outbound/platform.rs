//! Platform abstraction ports for cross-platform compatibility
//!
//! These traits abstract platform-specific operations so that:
//! 1. Application/presentation code remains platform-agnostic
//! 2. Platform-specific code is isolated in infrastructure
//! 3. Code becomes easily testable with mock implementations
//!
//! NOTE: The `Platform` struct (DI container) that aggregates these traits
//! lives in `state/platform.rs`, not here.

use std::{future::Future, pin::Pin};

/// Time operations abstraction
pub trait TimeProvider: Clone + 'static {
    /// Get current time as Unix timestamp in seconds
    fn now_unix_secs(&self) -> u64;
}

/// Async sleep abstraction
///
/// Used to avoid `#[cfg]` branches in UI code (typing effect, counters,
/// simulated submission, overlay auto-dismiss).
pub trait SleepProvider: Clone + 'static {
    fn sleep_ms(&self, ms: u64) -> Pin<Box<dyn Future<Output = ()> + 'static>>;
}

/// Random number generation abstraction
pub trait RandomProvider: Clone + 'static {
    /// Generate random f64 in range [0.0, 1.0)
    fn random_f64(&self) -> f64;
}

/// Browser document operations
pub trait DocumentProvider: Clone + 'static {
    /// Set the browser page title (no-op on desktop)
    fn set_page_title(&self, title: &str);

    /// Current viewport size as `(width, height)` in CSS pixels
    fn viewport_size(&self) -> (f64, f64);
}
