//! Deterministic platform for tests
//!
//! Sleeping completes immediately, the clock only moves when told to and
//! random numbers come from a fixed cycle.

use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::{future::Future, pin::Pin};

use crate::ports::outbound::platform::{
    DocumentProvider, RandomProvider, SleepProvider, TimeProvider,
};
use crate::state::Platform;

/// 2023-11-14T22:13:20Z
pub const MOCK_START_MILLIS: u64 = 1_700_000_000_000;

#[derive(Clone)]
pub struct MockTimeProvider {
    millis: Arc<AtomicU64>,
}

impl Default for MockTimeProvider {
    fn default() -> Self {
        Self {
            millis: Arc::new(AtomicU64::new(MOCK_START_MILLIS)),
        }
    }
}

impl MockTimeProvider {
    pub fn advance_ms(&self, ms: u64) {
        self.millis.fetch_add(ms, Ordering::SeqCst);
    }
}

impl TimeProvider for MockTimeProvider {
    fn now_unix_secs(&self) -> u64 {
        self.millis.load(Ordering::SeqCst) / 1000
    }
}

#[derive(Clone, Default)]
pub struct MockSleepProvider;

impl SleepProvider for MockSleepProvider {
    fn sleep_ms(&self, _ms: u64) -> Pin<Box<dyn Future<Output = ()> + 'static>> {
        Box::pin(std::future::ready(()))
    }
}

/// Cycles through a fixed list of values in [0, 1)
#[derive(Clone)]
pub struct MockRandomProvider {
    values: Arc<Vec<f64>>,
    next: Arc<AtomicUsize>,
}

impl MockRandomProvider {
    pub fn new(values: Vec<f64>) -> Self {
        Self {
            values: Arc::new(values),
            next: Arc::new(AtomicUsize::new(0)),
        }
    }
}

impl Default for MockRandomProvider {
    fn default() -> Self {
        Self::new(vec![0.5])
    }
}

impl RandomProvider for MockRandomProvider {
    fn random_f64(&self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let i = self.next.fetch_add(1, Ordering::SeqCst) % self.values.len();
        self.values[i]
    }
}

#[derive(Clone)]
pub struct MockDocumentProvider {
    title: Arc<Mutex<String>>,
    viewport: (f64, f64),
}

impl MockDocumentProvider {
    pub fn with_viewport(width: f64, height: f64) -> Self {
        Self {
            title: Arc::default(),
            viewport: (width, height),
        }
    }

    pub fn title(&self) -> String {
        self.title.lock().map(|t| t.clone()).unwrap_or_default()
    }
}

impl Default for MockDocumentProvider {
    fn default() -> Self {
        Self::with_viewport(1280.0, 800.0)
    }
}

impl DocumentProvider for MockDocumentProvider {
    fn set_page_title(&self, title: &str) {
        if let Ok(mut current) = self.title.lock() {
            *current = title.to_string();
        }
    }

    fn viewport_size(&self) -> (f64, f64) {
        self.viewport
    }
}

/// Providers behind a mock platform, kept so tests can steer them
#[derive(Clone, Default)]
pub struct MockProviders {
    pub time: MockTimeProvider,
    pub random: MockRandomProvider,
    pub document: MockDocumentProvider,
}

impl MockProviders {
    pub fn platform(&self) -> Platform {
        Platform::new(
            self.time.clone(),
            MockSleepProvider,
            self.random.clone(),
            self.document.clone(),
        )
    }
}

pub fn create_mock_platform() -> Platform {
    MockProviders::default().platform()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn providers_are_shared_with_the_platform() {
        let providers = MockProviders {
            random: MockRandomProvider::new(vec![0.1, 0.9]),
            ..Default::default()
        };
        let platform = providers.platform();

        providers.time.advance_ms(2500);
        assert_eq!(platform.now_unix_secs(), MOCK_START_MILLIS / 1000 + 2);

        let mut rng = platform.rng();
        assert_eq!((rng(), rng(), rng()), (0.1, 0.9, 0.1));

        platform.set_page_title("Enroll");
        assert_eq!(providers.document.title(), "Enroll");
        assert_eq!(platform.viewport_size(), (1280.0, 800.0));
    }

    #[tokio::test]
    async fn sleep_completes_immediately() {
        let platform = create_mock_platform();
        platform.sleep_ms(60_000).await;
    }
}
