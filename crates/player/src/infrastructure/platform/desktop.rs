//! Desktop platform implementations
//!
//! Provides platform-specific implementations for desktop using
//! standard library and native crates.

use crate::ports::outbound::platform::{
    DocumentProvider, RandomProvider, SleepProvider, TimeProvider,
};
use crate::state::Platform;
use std::time::{SystemTime, UNIX_EPOCH};
use std::{future::Future, pin::Pin};

/// Initial window size; resize events from the webview take over afterwards
const DEFAULT_VIEWPORT: (f64, f64) = (1280.0, 800.0);

/// Desktop time provider using std::time
#[derive(Clone, Default)]
pub struct DesktopTimeProvider;

impl TimeProvider for DesktopTimeProvider {
    fn now_unix_secs(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0)
    }
}

/// Desktop random provider using rand crate
#[derive(Clone, Default)]
pub struct DesktopRandomProvider;

impl RandomProvider for DesktopRandomProvider {
    fn random_f64(&self) -> f64 {
        use rand::Rng;
        rand::thread_rng().gen()
    }
}

/// Desktop document provider (no-op for page title)
#[derive(Clone)]
pub struct DesktopDocumentProvider {
    viewport: (f64, f64),
}

impl Default for DesktopDocumentProvider {
    fn default() -> Self {
        Self {
            viewport: DEFAULT_VIEWPORT,
        }
    }
}

impl DocumentProvider for DesktopDocumentProvider {
    fn set_page_title(&self, _title: &str) {
        // No-op on desktop - window title is set through the desktop Config
    }

    fn viewport_size(&self) -> (f64, f64) {
        self.viewport
    }
}

/// Desktop sleep provider using tokio timer
#[derive(Clone, Default)]
pub struct DesktopSleepProvider;

impl SleepProvider for DesktopSleepProvider {
    fn sleep_ms(&self, ms: u64) -> Pin<Box<dyn Future<Output = ()> + 'static>> {
        Box::pin(async move {
            tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
        })
    }
}

/// Create platform services for desktop
pub fn create_platform() -> Platform {
    Platform::new(
        DesktopTimeProvider,
        DesktopSleepProvider,
        DesktopRandomProvider,
        DesktopDocumentProvider::default(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_values_stay_in_unit_range() {
        let platform = create_platform();
        for _ in 0..100 {
            let v = platform.random_f64();
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn clock_is_past_2020() {
        let platform = create_platform();
        assert!(platform.now_unix_secs() > 1_577_836_800);
    }
}
