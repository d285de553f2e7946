//! Platform DI Container
//!
//! This module provides the `Platform` struct - a dependency injection container
//! that aggregates all platform-specific service implementations behind port traits.
//!
//! Usage:
//! - Created by `create_platform()` in infrastructure/platform/desktop.rs or wasm.rs
//! - Injected into Dioxus context by the composition root
//! - Accessed in UI via `use_platform()`

use std::{future::Future, pin::Pin, sync::Arc};

use crate::ports::outbound::{DocumentProvider, RandomProvider, SleepProvider, TimeProvider};

/// Unified platform services container
///
/// Provides all platform abstractions through a single injectable type.
#[derive(Clone)]
pub struct Platform {
    time: Arc<dyn TimeProviderDyn>,
    sleep: Arc<dyn SleepProviderDyn>,
    random: Arc<dyn RandomProviderDyn>,
    document: Arc<dyn DocumentProviderDyn>,
}

// =============================================================================
// Dynamic trait versions for Arc storage (need Send + Sync for Dioxus context)
// =============================================================================

trait TimeProviderDyn: Send + Sync {
    fn now_unix_secs(&self) -> u64;
}

trait SleepProviderDyn: Send + Sync {
    fn sleep_ms(&self, ms: u64) -> Pin<Box<dyn Future<Output = ()> + 'static>>;
}

trait RandomProviderDyn: Send + Sync {
    fn random_f64(&self) -> f64;
}

trait DocumentProviderDyn: Send + Sync {
    fn set_page_title(&self, title: &str);
    fn viewport_size(&self) -> (f64, f64);
}

// =============================================================================
// Blanket implementations - convert port traits to dyn-safe wrappers
// =============================================================================

impl<T: TimeProvider + Send + Sync> TimeProviderDyn for T {
    fn now_unix_secs(&self) -> u64 {
        TimeProvider::now_unix_secs(self)
    }
}

impl<T: SleepProvider + Send + Sync> SleepProviderDyn for T {
    fn sleep_ms(&self, ms: u64) -> Pin<Box<dyn Future<Output = ()> + 'static>> {
        SleepProvider::sleep_ms(self, ms)
    }
}

impl<T: RandomProvider + Send + Sync> RandomProviderDyn for T {
    fn random_f64(&self) -> f64 {
        RandomProvider::random_f64(self)
    }
}

impl<T: DocumentProvider + Send + Sync> DocumentProviderDyn for T {
    fn set_page_title(&self, title: &str) {
        DocumentProvider::set_page_title(self, title)
    }
    fn viewport_size(&self) -> (f64, f64) {
        DocumentProvider::viewport_size(self)
    }
}

// =============================================================================
// Platform implementation
// =============================================================================

impl Platform {
    /// Create a new Platform with the given providers
    pub fn new<Tm, Sl, R, D>(time: Tm, sleep: Sl, random: R, document: D) -> Self
    where
        Tm: TimeProvider + Send + Sync,
        Sl: SleepProvider + Send + Sync,
        R: RandomProvider + Send + Sync,
        D: DocumentProvider + Send + Sync,
    {
        Self {
            time: Arc::new(time),
            sleep: Arc::new(sleep),
            random: Arc::new(random),
            document: Arc::new(document),
        }
    }

    // -------------------------------------------------------------------------
    // Time operations
    // -------------------------------------------------------------------------

    /// Get current time as Unix timestamp in seconds
    pub fn now_unix_secs(&self) -> u64 {
        self.time.now_unix_secs()
    }

    // -------------------------------------------------------------------------
    // Sleep operations
    // -------------------------------------------------------------------------

    /// Sleep for the given number of milliseconds.
    pub fn sleep_ms(&self, ms: u64) -> Pin<Box<dyn Future<Output = ()> + 'static>> {
        self.sleep.sleep_ms(ms)
    }

    // -------------------------------------------------------------------------
    // Random operations
    // -------------------------------------------------------------------------

    /// Generate random f64 in range [0.0, 1.0)
    pub fn random_f64(&self) -> f64 {
        self.random.random_f64()
    }

    /// Closure form of [`Self::random_f64`] for the domain effect types
    pub fn rng(&self) -> impl FnMut() -> f64 + '_ {
        move || self.random_f64()
    }

    // -------------------------------------------------------------------------
    // Document operations
    // -------------------------------------------------------------------------

    /// Set the browser page title (no-op on desktop)
    pub fn set_page_title(&self, title: &str) {
        self.document.set_page_title(title)
    }

    /// Current viewport size as `(width, height)`
    pub fn viewport_size(&self) -> (f64, f64) {
        self.document.viewport_size()
    }
}
