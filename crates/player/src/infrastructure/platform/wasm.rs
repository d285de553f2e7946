//! WASM platform implementations
//!
//! Browser-backed providers: `gloo-timers` for sleeping, the `window` for
//! viewport and title, `getrandom`'s js backend behind `rand`.

use crate::ports::outbound::platform::{
    DocumentProvider, RandomProvider, SleepProvider, TimeProvider,
};
use crate::state::Platform;
use std::{future::Future, pin::Pin};

/// Used when the window cannot be queried
const FALLBACK_VIEWPORT: (f64, f64) = (1024.0, 768.0);

#[derive(Clone, Default)]
pub struct WasmTimeProvider;

impl TimeProvider for WasmTimeProvider {
    fn now_unix_secs(&self) -> u64 {
        chrono::Utc::now().timestamp().max(0) as u64
    }
}

#[derive(Clone, Default)]
pub struct WasmRandomProvider;

impl RandomProvider for WasmRandomProvider {
    fn random_f64(&self) -> f64 {
        use rand::Rng;
        rand::thread_rng().gen()
    }
}

#[derive(Clone, Default)]
pub struct WasmDocumentProvider;

impl DocumentProvider for WasmDocumentProvider {
    fn set_page_title(&self, title: &str) {
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            document.set_title(title);
        }
    }

    fn viewport_size(&self) -> (f64, f64) {
        let Some(window) = web_sys::window() else {
            return FALLBACK_VIEWPORT;
        };
        let width = window
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(FALLBACK_VIEWPORT.0);
        let height = window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(FALLBACK_VIEWPORT.1);
        (width, height)
    }
}

#[derive(Clone, Default)]
pub struct WasmSleepProvider;

impl SleepProvider for WasmSleepProvider {
    fn sleep_ms(&self, ms: u64) -> Pin<Box<dyn Future<Output = ()> + 'static>> {
        let ms = u32::try_from(ms).unwrap_or(u32::MAX);
        Box::pin(gloo_timers::future::TimeoutFuture::new(ms))
    }
}

/// Create platform services for the browser
pub fn create_platform() -> Platform {
    Platform::new(
        WasmTimeProvider,
        WasmSleepProvider,
        WasmRandomProvider,
        WasmDocumentProvider,
    )
}
